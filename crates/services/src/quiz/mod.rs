mod engine;
mod phase;
mod progress;
mod summary;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use engine::{AdvanceOutcome, AnswerOutcome, QuizEngine};
pub use phase::{QuizOperation, QuizPhase};
pub use progress::QuizProgress;
pub use summary::QuizSummary;
