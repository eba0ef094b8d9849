use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::question::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question set must contain at least one question")]
    Empty,

    #[error("question {position}: {source}")]
    Question {
        position: usize,
        #[source]
        source: QuestionError,
    },
}

/// Ordered, non-empty list of questions fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<QuestionDraft>", into = "Vec<QuestionDraft>")]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        Ok(Self { questions })
    }

    /// Validate every draft and build the set.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::Question` for the first invalid draft (1-based position)
    /// and `QuestionSetError::Empty` when no drafts are given.
    pub fn from_drafts(
        drafts: impl IntoIterator<Item = QuestionDraft>,
    ) -> Result<Self, QuestionSetError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(idx, draft)| {
                draft.validate().map_err(|source| QuestionSetError::Question {
                    position: idx + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<QuestionDraft>> for QuestionSet {
    type Error = QuestionSetError;

    fn try_from(drafts: Vec<QuestionDraft>) -> Result<Self, Self::Error> {
        Self::from_drafts(drafts)
    }
}

impl From<QuestionSet> for Vec<QuestionDraft> {
    fn from(set: QuestionSet) -> Self {
        set.questions.into_iter().map(QuestionDraft::from).collect()
    }
}
