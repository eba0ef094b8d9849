use chrono::{DateTime, Utc};
use log::{debug, warn};

use quiz_core::Clock;
use quiz_core::model::{Question, QuestionSet};

use super::phase::{QuizOperation, QuizPhase};
use super::progress::QuizProgress;
use super::summary::QuizSummary;
use crate::error::QuizError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// What `select_answer` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// First pick on this question; the answer is now locked.
    Revealed { correct: bool },
    /// The question was already answered; nothing changed.
    Locked,
}

/// What `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// No revealed answer to move past; nothing changed.
    Ignored,
    Next { index: usize },
    Completed,
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SessionState {
    current: usize,
    // `Some` means the answer for `current` is revealed.
    selected: Option<usize>,
    score: usize,
    started: bool,
    completed: bool,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionState {
    fn fresh(started_at: DateTime<Utc>) -> Self {
        Self {
            started: true,
            started_at: Some(started_at),
            ..Self::default()
        }
    }
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Single-user quiz session over a fixed `QuestionSet`.
///
/// Each question can be answered once; the score is updated at the moment of
/// reveal and never adjusted afterwards. The engine is a plain state container:
/// callers re-read its getters after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizEngine {
    questions: QuestionSet,
    clock: Clock,
    state: SessionState,
}

impl QuizEngine {
    #[must_use]
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            clock: Clock::default(),
            state: SessionState::default(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if !self.state.started {
            QuizPhase::NotStarted
        } else if self.state.completed {
            QuizPhase::Completed
        } else {
            QuizPhase::InProgress {
                index: self.state.current,
                revealed: self.state.selected.is_some(),
            }
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state.started
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.completed
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self.phase(), QuizPhase::InProgress { revealed: true, .. })
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.state.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Index of the question being shown, if a question is being shown.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.phase() {
            QuizPhase::InProgress { index, .. } => Some(index),
            _ => None,
        }
    }

    /// The option picked for the current question, once revealed.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.current_index().and(self.state.selected)
    }

    /// Whether the revealed answer on the current question was correct.
    #[must_use]
    pub fn last_outcome_correct(&self) -> Option<bool> {
        let question = self.current_index().and_then(|i| self.questions.get(i))?;
        self.state.selected.map(|picked| question.is_correct(picked))
    }

    /// Begin the session. Has no effect once started.
    pub fn start(&mut self) {
        if self.state.started {
            debug!("quiz start ignored: already {}", self.phase());
            return;
        }
        self.state = SessionState::fresh(self.clock.now());
        debug!("quiz started with {} questions", self.questions.len());
    }

    /// Throw away the current attempt and begin again at the first question.
    pub fn restart(&mut self) {
        let previous = self.state.score;
        self.state = SessionState::fresh(self.clock.now());
        debug!("quiz restarted (previous score {previous})");
    }

    /// The question currently shown.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfSequence` before `start` and after completion.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.current_index()
            .and_then(|index| self.questions.get(index))
            .ok_or_else(|| self.out_of_sequence(QuizOperation::CurrentQuestion))
    }

    /// Pick an option on the current question.
    ///
    /// The first valid pick locks the question and updates the score; later
    /// picks return `AnswerOutcome::Locked` without touching state.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidIndex` if `index` is not an option of the current question.
    /// Returns `QuizError::OutOfSequence` if no question is being shown.
    pub fn select_answer(&mut self, index: usize) -> Result<AnswerOutcome, QuizError> {
        let question = self.current_question_for(QuizOperation::SelectAnswer)?;
        let len = question.option_count();
        if index >= len {
            let err = QuizError::InvalidIndex {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len,
            };
            warn!("rejected answer: {err}");
            return Err(err);
        }

        if let Some(picked) = self.state.selected {
            debug!(
                "answer {index} ignored: question {} already locked on {picked}",
                self.state.current
            );
            return Ok(AnswerOutcome::Locked);
        }

        let correct = question.is_correct(index);
        self.state.selected = Some(index);
        if correct {
            self.state.score += 1;
        }
        debug!(
            "question {} answered with {index} (correct: {correct}, score: {})",
            self.state.current, self.state.score
        );
        Ok(AnswerOutcome::Revealed { correct })
    }

    /// Like `select_answer`, for indices that come from a signed source.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidIndex` for negative indices, otherwise as `select_answer`.
    pub fn select_answer_raw(&mut self, index: i64) -> Result<AnswerOutcome, QuizError> {
        let len = self
            .current_question_for(QuizOperation::SelectAnswer)?
            .option_count();
        let index = usize::try_from(index).map_err(|_| {
            let err = QuizError::InvalidIndex { index, len };
            warn!("rejected answer: {err}");
            err
        })?;
        self.select_answer(index)
    }

    /// Move past a revealed answer to the next question, or finish the quiz.
    ///
    /// Ignored while the current answer is unrevealed, before start and after completion.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let QuizPhase::InProgress {
            index,
            revealed: true,
        } = self.phase()
        else {
            debug!("advance ignored while {}", self.phase());
            return AdvanceOutcome::Ignored;
        };

        let next = index + 1;
        self.state.selected = None;
        if next < self.questions.len() {
            self.state.current = next;
            debug!("advanced to question {next}");
            AdvanceOutcome::Next { index: next }
        } else {
            self.state.completed = true;
            self.state.completed_at = Some(self.clock.now());
            debug!(
                "quiz completed: {}/{}",
                self.state.score,
                self.questions.len()
            );
            AdvanceOutcome::Completed
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.questions.len();
        let (position, answered) = match self.phase() {
            QuizPhase::NotStarted => (0, 0),
            QuizPhase::InProgress { index, revealed } => (index + 1, index + usize::from(revealed)),
            QuizPhase::Completed => (total, total),
        };
        QuizProgress {
            total,
            position,
            answered,
            score: self.state.score,
            is_complete: self.is_complete(),
        }
    }

    /// Final result of the session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfSequence` unless the quiz is completed.
    pub fn summary(&self) -> Result<QuizSummary, QuizError> {
        let (QuizPhase::Completed, Some(started_at), Some(completed_at)) =
            (self.phase(), self.state.started_at, self.state.completed_at)
        else {
            return Err(self.out_of_sequence(QuizOperation::Summary));
        };

        Ok(QuizSummary {
            score: self.state.score,
            total: self.questions.len(),
            started_at,
            completed_at,
        })
    }

    fn current_question_for(&self, operation: QuizOperation) -> Result<&Question, QuizError> {
        self.current_index()
            .and_then(|index| self.questions.get(index))
            .ok_or_else(|| {
                let err = self.out_of_sequence(operation);
                warn!("{err}");
                err
            })
    }

    fn out_of_sequence(&self, operation: QuizOperation) -> QuizError {
        QuizError::OutOfSequence {
            operation,
            phase: self.phase(),
        }
    }
}
