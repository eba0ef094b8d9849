mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{
    OptionState, OptionVm, QuestionVm, QuizIntent, QuizScreenVm, SummaryVm, apply_intent,
    band_copy, map_summary,
};
pub use time_fmt::format_elapsed;
