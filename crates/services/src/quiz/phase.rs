use std::fmt;

/// Observable phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress { index: usize, revealed: bool },
    Completed,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizPhase::NotStarted => f.write_str("not started"),
            QuizPhase::InProgress { .. } => f.write_str("in progress"),
            QuizPhase::Completed => f.write_str("completed"),
        }
    }
}

/// Engine operations that can be rejected as out of sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOperation {
    SelectAnswer,
    CurrentQuestion,
    Summary,
}

impl fmt::Display for QuizOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizOperation::SelectAnswer => "select_answer",
            QuizOperation::CurrentQuestion => "current_question",
            QuizOperation::Summary => "summary",
        };
        f.write_str(name)
    }
}
