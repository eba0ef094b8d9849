#![forbid(unsafe_code)]

pub mod error;
pub mod question_source;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::{QuestionSourceError, QuizError};
pub use question_source::{QuestionSource, load_question_set, parse_question_set};
pub use quiz::{
    AdvanceOutcome, AnswerOutcome, QuizEngine, QuizOperation, QuizPhase, QuizProgress,
    QuizSummary,
};
