use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least 2 options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unchecked question as it arrives from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub explanation: String,
}

impl QuestionDraft {
    pub fn new<I, S>(
        prompt: impl Into<String>,
        options: I,
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_index,
            explanation: explanation.into(),
        }
    }

    /// Check the draft and turn it into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt is blank, there are fewer than
    /// two options, an option is blank, or `correct_index` does not point at an option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let len = self.options.len();
        if len < 2 {
            return Err(QuestionError::TooFewOptions { len });
        }

        if let Some(index) = self.options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }

        if self.correct_index >= len {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: self.correct_index,
                len,
            });
        }

        Ok(Question {
            prompt: self.prompt,
            options: self.options,
            correct_index: self.correct_index,
            explanation: self.explanation,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Only constructible through `QuestionDraft::validate`, so `correct_index`
/// always points at one of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionDraft", into = "QuestionDraft")]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

impl TryFrom<QuestionDraft> for Question {
    type Error = QuestionError;

    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl From<Question> for QuestionDraft {
    fn from(question: Question) -> Self {
        Self {
            prompt: question.prompt,
            options: question.options,
            correct_index: question.correct_index,
            explanation: question.explanation,
        }
    }
}
