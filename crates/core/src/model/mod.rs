mod band;
mod question;
mod question_set;

pub use band::ScoreBand;
pub use question::{Question, QuestionDraft, QuestionError};
pub use question_set::{QuestionSet, QuestionSetError};
