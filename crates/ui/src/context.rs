use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::QuestionSet;

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn question_set(&self) -> QuestionSet;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    questions: QuestionSet,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            questions: app.question_set(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
