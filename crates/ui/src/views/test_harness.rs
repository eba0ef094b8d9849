use dioxus::prelude::*;
use quiz_core::catalog::historiography;
use quiz_core::time::fixed_clock;
use services::QuizEngine;

use crate::views::QuizPanel;
use crate::vm::{QuizIntent, apply_intent};

#[derive(Props, Clone, PartialEq)]
struct EngineHarnessProps {
    engine: QuizEngine,
}

#[component]
fn EngineHarness(props: EngineHarnessProps) -> Element {
    let engine = use_signal(|| props.engine.clone());
    rsx! { QuizPanel { engine } }
}

/// Fresh historiography engine on a fixed clock.
pub fn quiz_engine() -> QuizEngine {
    QuizEngine::new(historiography()).with_clock(fixed_clock())
}

/// Engine after replaying `intents` from a fresh start.
pub fn engine_after(intents: &[QuizIntent]) -> QuizEngine {
    let mut engine = quiz_engine();
    for intent in intents {
        apply_intent(&mut engine, *intent).expect("intent should apply");
    }
    engine
}

pub fn render_engine(engine: QuizEngine) -> String {
    let mut dom = VirtualDom::new_with_props(EngineHarness, EngineHarnessProps { engine });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_component(component: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(component);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
