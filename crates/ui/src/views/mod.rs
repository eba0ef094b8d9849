mod progress;
mod quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use progress::ReadingProgressBar;
pub use quiz::{QuizPanel, QuizView};
