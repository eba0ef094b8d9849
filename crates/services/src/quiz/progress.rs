/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    /// 1-based position of the current question; `0` before start, `total` once complete.
    pub position: usize,
    pub answered: usize,
    pub score: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    /// Share of the quiz reached, as shown on the bar above the question.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position as f64 / self.total as f64 * 100.0
    }
}
