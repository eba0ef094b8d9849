use dioxus::prelude::*;

use super::test_harness::{engine_after, quiz_engine, render_component, render_engine};
use crate::views::ReadingProgressBar;
use crate::vm::QuizIntent;

#[test]
fn quiz_intro_renders_start_button() {
    let html = render_engine(quiz_engine());

    assert!(html.contains("Проверьте свои знания"), "missing title in {html}");
    assert!(html.contains("Вопросов: 5"), "missing count in {html}");
    assert!(html.contains("Начать тест"), "missing start button in {html}");
}

#[test]
fn quiz_question_renders_prompt_and_options() {
    let html = render_engine(engine_after(&[QuizIntent::Start]));

    assert!(html.contains("Вопрос 1 из 5"), "missing position in {html}");
    assert!(html.contains("«Повесть временных лет»"), "missing prompt in {html}");
    assert!(html.contains("Иннокентий Гизель"), "missing option in {html}");
    assert!(!html.contains("Пояснение"), "explanation shown early in {html}");
    assert!(!html.contains("quiz-next"), "next button shown early in {html}");
}

#[test]
fn quiz_revealed_question_marks_options() {
    let html = render_engine(engine_after(&[QuizIntent::Start, QuizIntent::Pick(1)]));

    assert!(html.contains("quiz-option--correct"), "missing correct mark in {html}");
    assert!(html.contains("quiz-option--incorrect"), "missing wrong mark in {html}");
    assert!(html.contains("Пояснение"), "missing explanation in {html}");
    assert!(html.contains("Следующий вопрос"), "missing next button in {html}");
    assert!(html.contains("disabled"), "options still enabled in {html}");
}

#[test]
fn quiz_summary_renders_score_and_band() {
    let mut intents = vec![QuizIntent::Start];
    // Correct answers for the first three questions, then wrong ones.
    for pick in [0, 2, 1, 0, 0] {
        intents.push(QuizIntent::Pick(pick));
        intents.push(QuizIntent::Next);
    }
    let html = render_engine(engine_after(&intents));

    assert!(html.contains("3 / 5"), "missing score in {html}");
    assert!(html.contains("Хороший результат"), "missing band headline in {html}");
    assert!(html.contains("Пройти тест заново"), "missing restart in {html}");
}

#[component]
fn HalfwayProgress() -> Element {
    rsx! { ReadingProgressBar { percent: 42.5 } }
}

#[component]
fn OverflowProgress() -> Element {
    rsx! { ReadingProgressBar { percent: 180.0 } }
}

#[test]
fn reading_progress_bar_renders_width() {
    let html = render_component(HalfwayProgress);
    assert!(html.contains("width: 42.5%"), "missing width in {html}");

    let html = render_component(OverflowProgress);
    assert!(html.contains("width: 100.0%"), "width not clamped in {html}");
}
