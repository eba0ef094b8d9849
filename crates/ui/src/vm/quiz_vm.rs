use quiz_core::model::ScoreBand;
use services::{QuizEngine, QuizError, QuizPhase, QuizSummary};

use crate::vm::time_fmt::format_elapsed;

//
// ─── INTENTS ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Pick(usize),
    Next,
    Restart,
}

/// Apply a user intent to the engine.
///
/// # Errors
///
/// Propagates `QuizError` from `select_answer`; the other intents cannot fail.
pub fn apply_intent(engine: &mut QuizEngine, intent: QuizIntent) -> Result<(), QuizError> {
    match intent {
        QuizIntent::Start => engine.start(),
        QuizIntent::Pick(index) => {
            engine.select_answer(index)?;
        }
        QuizIntent::Next => {
            engine.advance();
        }
        QuizIntent::Restart => engine.restart(),
    }
    Ok(())
}

//
// ─── VIEW MODELS ───────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// Not answered yet; selectable.
    Idle,
    /// The right answer, shown after reveal.
    Correct,
    /// The user's wrong pick.
    Incorrect,
    /// Any other option after reveal.
    Dimmed,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Idle => "quiz-option",
            OptionState::Correct => "quiz-option quiz-option--correct",
            OptionState::Incorrect => "quiz-option quiz-option--incorrect",
            OptionState::Dimmed => "quiz-option quiz-option--dimmed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub state: OptionState,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub position_label: String,
    pub score_label: String,
    pub progress_percent: f64,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub explanation: Option<String>,
    pub next_label: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub score_label: String,
    pub band: ScoreBand,
    pub headline: &'static str,
    pub message: &'static str,
    pub elapsed_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuizScreenVm {
    Intro { total_label: String },
    Question(QuestionVm),
    Finished(SummaryVm),
}

#[must_use]
pub fn band_copy(band: ScoreBand) -> (&'static str, &'static str) {
    match band {
        ScoreBand::Perfect => (
            "🎉 Превосходно!",
            "Вы отлично знаете историю российской исторической науки!",
        ),
        ScoreBand::Good => (
            "👍 Хороший результат!",
            "Вы неплохо усвоили материал, но есть пробелы в знаниях.",
        ),
        ScoreBand::NeedsReview => (
            "📚 Есть над чем поработать",
            "Рекомендуем перечитать материал и попробовать снова.",
        ),
    }
}

#[must_use]
pub fn map_summary(summary: &QuizSummary) -> SummaryVm {
    let band = summary.band();
    let (headline, message) = band_copy(band);
    SummaryVm {
        score_label: format!("{} / {}", summary.score, summary.total),
        band,
        headline,
        message,
        elapsed_label: format!(
            "Время прохождения: {}",
            format_elapsed(summary.started_at, summary.completed_at)
        ),
    }
}

fn map_question(engine: &QuizEngine, index: usize, revealed: bool) -> Option<QuestionVm> {
    let question = engine.questions().get(index)?;
    let progress = engine.progress();
    let picked = engine.selected_index();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let state = if !revealed {
                OptionState::Idle
            } else if question.is_correct(idx) {
                OptionState::Correct
            } else if picked == Some(idx) {
                OptionState::Incorrect
            } else {
                OptionState::Dimmed
            };
            OptionVm {
                index: idx,
                label: label.clone(),
                state,
                disabled: revealed,
            }
        })
        .collect();

    let is_last = index + 1 == progress.total;
    let next_label = revealed.then_some(if is_last {
        "Завершить тест"
    } else {
        "Следующий вопрос"
    });

    Some(QuestionVm {
        position_label: format!("Вопрос {} из {}", progress.position, progress.total),
        score_label: format!("Правильных ответов: {}", progress.score),
        progress_percent: progress.percent(),
        prompt: question.prompt().to_string(),
        options,
        explanation: revealed.then(|| question.explanation().to_string()),
        next_label,
    })
}

impl QuizScreenVm {
    #[must_use]
    pub fn from_engine(engine: &QuizEngine) -> Self {
        let intro = || QuizScreenVm::Intro {
            total_label: format!("Вопросов: {}", engine.total_questions()),
        };
        match engine.phase() {
            QuizPhase::NotStarted => intro(),
            QuizPhase::InProgress { index, revealed } => map_question(engine, index, revealed)
                .map_or_else(intro, QuizScreenVm::Question),
            QuizPhase::Completed => engine
                .summary()
                .map_or_else(|_| intro(), |summary| QuizScreenVm::Finished(map_summary(&summary))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::catalog::historiography;
    use quiz_core::time::fixed_clock;

    fn engine() -> QuizEngine {
        QuizEngine::new(historiography()).with_clock(fixed_clock())
    }

    fn question(screen: QuizScreenVm) -> QuestionVm {
        match screen {
            QuizScreenVm::Question(vm) => vm,
            other => panic!("expected question screen, got {other:?}"),
        }
    }

    #[test]
    fn intro_before_start() {
        let screen = QuizScreenVm::from_engine(&engine());
        assert_eq!(
            screen,
            QuizScreenVm::Intro {
                total_label: "Вопросов: 5".to_string()
            }
        );
    }

    #[test]
    fn unrevealed_question_has_idle_options() {
        let mut engine = engine();
        apply_intent(&mut engine, QuizIntent::Start).unwrap();

        let vm = question(QuizScreenVm::from_engine(&engine));

        assert_eq!(vm.position_label, "Вопрос 1 из 5");
        assert_eq!(vm.score_label, "Правильных ответов: 0");
        assert!((vm.progress_percent - 20.0).abs() < f64::EPSILON);
        assert!(vm.options.iter().all(|o| o.state == OptionState::Idle && !o.disabled));
        assert_eq!(vm.explanation, None);
        assert_eq!(vm.next_label, None);
    }

    #[test]
    fn wrong_pick_marks_correct_and_chosen() {
        let mut engine = engine();
        apply_intent(&mut engine, QuizIntent::Start).unwrap();
        apply_intent(&mut engine, QuizIntent::Pick(2)).unwrap();

        let vm = question(QuizScreenVm::from_engine(&engine));
        let states: Vec<_> = vm.options.iter().map(|o| o.state).collect();

        assert_eq!(
            states,
            [
                OptionState::Correct,
                OptionState::Dimmed,
                OptionState::Incorrect,
                OptionState::Dimmed
            ]
        );
        assert!(vm.options.iter().all(|o| o.disabled));
        assert!(vm.explanation.unwrap().contains("Нестор"));
        assert_eq!(vm.next_label, Some("Следующий вопрос"));
    }

    #[test]
    fn last_question_offers_finish() {
        let mut engine = engine();
        apply_intent(&mut engine, QuizIntent::Start).unwrap();
        for _ in 0..4 {
            apply_intent(&mut engine, QuizIntent::Pick(0)).unwrap();
            apply_intent(&mut engine, QuizIntent::Next).unwrap();
        }
        apply_intent(&mut engine, QuizIntent::Pick(0)).unwrap();

        let vm = question(QuizScreenVm::from_engine(&engine));
        assert_eq!(vm.position_label, "Вопрос 5 из 5");
        assert_eq!(vm.next_label, Some("Завершить тест"));
    }

    #[test]
    fn invalid_pick_is_reported() {
        let mut engine = engine();
        apply_intent(&mut engine, QuizIntent::Start).unwrap();

        let err = apply_intent(&mut engine, QuizIntent::Pick(9)).unwrap_err();
        assert!(matches!(err, QuizError::InvalidIndex { .. }));
    }

    #[test]
    fn finished_screen_uses_band_copy() {
        let mut engine = engine();
        apply_intent(&mut engine, QuizIntent::Start).unwrap();
        for _ in 0..5 {
            let correct = engine.current_question().unwrap().correct_index();
            apply_intent(&mut engine, QuizIntent::Pick(correct)).unwrap();
            apply_intent(&mut engine, QuizIntent::Next).unwrap();
        }

        let QuizScreenVm::Finished(summary) = QuizScreenVm::from_engine(&engine) else {
            panic!("expected finished screen");
        };
        assert_eq!(summary.score_label, "5 / 5");
        assert_eq!(summary.band, ScoreBand::Perfect);
        assert_eq!(summary.headline, "🎉 Превосходно!");
        assert_eq!(summary.elapsed_label, "Время прохождения: 0:00");

        apply_intent(&mut engine, QuizIntent::Restart).unwrap();
        let vm = question(QuizScreenVm::from_engine(&engine));
        assert_eq!(vm.position_label, "Вопрос 1 из 5");
    }

    #[test]
    fn band_copy_is_distinct_per_band() {
        let perfect = band_copy(ScoreBand::Perfect);
        let good = band_copy(ScoreBand::Good);
        let review = band_copy(ScoreBand::NeedsReview);
        assert_ne!(perfect, good);
        assert_ne!(good, review);
        assert!(review.1.contains("перечитать"));
    }
}
