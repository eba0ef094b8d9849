use dioxus::prelude::*;

/// Thin bar pinned to the top of the window.
#[component]
pub fn ReadingProgressBar(percent: f64) -> Element {
    let width = format!("width: {:.1}%", percent.clamp(0.0, 100.0));
    rsx! {
        div { class: "reading-progress", role: "progressbar",
            div { class: "reading-progress__fill", style: "{width}" }
        }
    }
}
