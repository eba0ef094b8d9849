//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::QuestionSetError;

use crate::quiz::{QuizOperation, QuizPhase};

/// Errors emitted by `QuizEngine`.
///
/// Both variants are contract violations by the caller; neither is transient.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("option index {index} is out of range for {len} options")]
    InvalidIndex { index: i64, len: usize },
    #[error("{operation} is not available while the quiz is {phase}")]
    OutOfSequence {
        operation: QuizOperation,
        phase: QuizPhase,
    },
}

/// Errors emitted while loading a question set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("failed to read question file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuestionSetError),
}
