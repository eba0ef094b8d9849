use dioxus::prelude::*;

use quiz_core::reading;

use crate::context::AppContext;
use crate::views::{QuizView, ReadingProgressBar};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let mut read_percent = use_signal(|| 0.0_f64);

    let title = ctx.title().to_string();
    let questions = ctx.questions().clone();
    let clock = ctx.clock();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ReadingProgressBar { percent: read_percent() }
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                main {
                    class: "article",
                    // The scroll readout only drives the bar; the quiz never sees it.
                    onscroll: move |evt| {
                        let height = reading::scrollable_height(
                            f64::from(evt.scroll_height()),
                            f64::from(evt.client_height()),
                        );
                        read_percent.set(reading::progress(f64::from(evt.scroll_top()), height));
                    },
                    header { class: "article__header",
                        h1 { "{title}" }
                    }
                    QuizView { questions, clock }
                    footer { class: "article__footer",
                        p { "Образовательный лонгрид о становлении российской исторической науки" }
                    }
                }
            }
        }
    }
}
