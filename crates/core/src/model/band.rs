use serde::{Deserialize, Serialize};

/// Qualitative tier assigned to a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    /// Every question answered correctly.
    Perfect,
    /// At least 60% correct.
    Good,
    /// Below 60%.
    NeedsReview,
}

impl ScoreBand {
    /// Classify `score` out of `total`. The 60% boundary is inclusive.
    #[must_use]
    pub fn from_score(score: usize, total: usize) -> Self {
        if score >= total {
            Self::Perfect
        } else if score.saturating_mul(5) >= total.saturating_mul(3) {
            Self::Good
        } else {
            Self::NeedsReview
        }
    }
}
