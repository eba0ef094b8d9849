use chrono::{DateTime, Utc};

use quiz_core::model::ScoreBand;

/// Result of a completed quiz session.
///
/// Presentation-agnostic: no pre-formatted strings, the UI picks the wording for `band()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl QuizSummary {
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score, self.total)
    }

    #[must_use]
    pub fn as_pair(&self) -> (usize, usize) {
        (self.score, self.total)
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}
