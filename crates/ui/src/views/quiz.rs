use dioxus::prelude::*;
use log::warn;

use quiz_core::Clock;
use quiz_core::model::QuestionSet;
use services::QuizEngine;

use crate::vm::{OptionVm, QuestionVm, QuizIntent, QuizScreenVm, SummaryVm, apply_intent};

/// Quiz widget owning one engine for its lifetime.
#[component]
pub fn QuizView(questions: QuestionSet, clock: Clock) -> Element {
    let engine = use_signal(|| QuizEngine::new(questions).with_clock(clock));
    rsx! { QuizPanel { engine } }
}

/// Renders whatever screen the engine is on and routes clicks back into it.
#[component]
pub fn QuizPanel(engine: Signal<QuizEngine>) -> Element {
    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut engine = engine;
        if let Err(err) = apply_intent(&mut engine.write(), intent) {
            warn!("quiz intent {intent:?} rejected: {err}");
        }
    });

    let screen = QuizScreenVm::from_engine(&engine.read());

    rsx! {
        section { class: "quiz", id: "quiz",
            div { class: "quiz__header",
                h2 { class: "quiz__title", "Проверьте свои знания" }
                p { class: "quiz__subtitle",
                    "Пройдите интерактивный тест и узнайте, насколько хорошо вы усвоили материал"
                }
            }
            match screen {
                QuizScreenVm::Intro { total_label } => rsx! {
                    div { class: "quiz-intro",
                        p { class: "quiz-intro__count", "{total_label}" }
                        button {
                            class: "quiz-cta",
                            id: "quiz-start",
                            r#type: "button",
                            onclick: move |_| dispatch.call(QuizIntent::Start),
                            "Начать тест"
                        }
                    }
                },
                QuizScreenVm::Question(question) => rsx! {
                    QuestionCard { question, on_intent: dispatch }
                },
                QuizScreenVm::Finished(summary) => rsx! {
                    SummaryCard { summary, on_intent: dispatch }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let width = format!("width: {:.0}%", question.progress_percent);

    rsx! {
        div { class: "quiz-question",
            div { class: "quiz-question__meta",
                span { "{question.position_label}" }
                span { "{question.score_label}" }
            }
            div { class: "quiz-progress",
                div { class: "quiz-progress__fill", style: "{width}" }
            }
            h3 { class: "quiz-question__prompt", "{question.prompt}" }
            div { class: "quiz-question__options",
                for option in question.options.iter().cloned() {
                    OptionButton { key: "{option.index}", option, on_intent }
                }
            }
            if let Some(explanation) = question.explanation.as_ref() {
                div { class: "quiz-explanation",
                    h4 { "Пояснение" }
                    p { "{explanation}" }
                }
            }
            if let Some(label) = question.next_label {
                button {
                    class: "quiz-cta quiz-cta--wide",
                    id: "quiz-next",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "{label}"
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;
    let class = option.state.class();
    rsx! {
        button {
            class,
            r#type: "button",
            disabled: option.disabled,
            onclick: move |_| on_intent.call(QuizIntent::Pick(index)),
            "{option.label}"
        }
    }
}

#[component]
fn SummaryCard(summary: SummaryVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-summary",
            div { class: "quiz-summary__score", "{summary.score_label}" }
            h3 { class: "quiz-summary__headline", "{summary.headline}" }
            p { class: "quiz-summary__message", "{summary.message}" }
            p { class: "quiz-summary__elapsed", "{summary.elapsed_label}" }
            button {
                class: "quiz-cta",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Пройти тест заново"
            }
        }
    }
}
