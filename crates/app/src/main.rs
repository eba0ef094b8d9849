use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;
use quiz_core::Clock;
use quiz_core::model::QuestionSet;
use services::QuestionSource;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Становление российской исторической науки";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyQuestionsPath,
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyQuestionsPath => write!(f, "--questions path cannot be empty"),
            ArgsError::EmptyTitle => write!(f, "--title cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    title: String,
    questions: QuestionSet,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn question_set(&self) -> QuestionSet {
        self.questions.clone()
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--questions <file.json>] [--title <text>]");
    eprintln!("  cargo run -p app -- check [--questions <file.json>]");
    eprintln!();
    eprintln!("Without --questions the built-in historiography quiz is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_TITLE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    source: QuestionSource,
    title: String,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut source = env("QUIZ_QUESTIONS")
            .filter(|value| !value.trim().is_empty())
            .map_or(QuestionSource::BuiltIn, |value| {
                QuestionSource::File(PathBuf::from(value))
            });
        let mut title = env("QUIZ_TITLE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyQuestionsPath);
                    }
                    source = QuestionSource::File(PathBuf::from(value));
                }
                "--title" => {
                    let value = require_value(args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyTitle);
                    }
                    title = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { source, title })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter(), |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let questions = parsed.source.load()?;
    info!("loaded {} questions from {:?}", questions.len(), parsed.source);

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                title: parsed.title.clone(),
                questions,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(parsed.title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            println!("ok: {} questions", questions.len());
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter, |key| {
            env.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn defaults_to_built_in_questions() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.source, QuestionSource::BuiltIn);
        assert_eq!(args.title, DEFAULT_TITLE);
    }

    #[test]
    fn env_supplies_questions_and_title() {
        let args = parse(&[], &[("QUIZ_QUESTIONS", "q.json"), ("QUIZ_TITLE", "Тест")]).unwrap();
        assert_eq!(args.source, QuestionSource::File(PathBuf::from("q.json")));
        assert_eq!(args.title, "Тест");
    }

    #[test]
    fn flags_override_env() {
        let args = parse(
            &["--questions", "flag.json", "--title", "Flag"],
            &[("QUIZ_QUESTIONS", "env.json")],
        )
        .unwrap();
        assert_eq!(args.source, QuestionSource::File(PathBuf::from("flag.json")));
        assert_eq!(args.title, "Flag");
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            parse(&["--questions"], &[]).unwrap_err(),
            ArgsError::MissingValue { flag: "--questions" }
        );
        assert_eq!(
            parse(&["--title", " "], &[]).unwrap_err(),
            ArgsError::EmptyTitle
        );
        assert_eq!(
            parse(&["--verbose"], &[]).unwrap_err(),
            ArgsError::UnknownArg("--verbose".to_string())
        );
    }

    #[test]
    fn subcommands_parse() {
        assert_eq!(Command::from_arg("ui"), Some(Command::Ui));
        assert_eq!(Command::from_arg("check"), Some(Command::Check));
        assert_eq!(Command::from_arg("seed"), None);
    }
}
