//! Loading question sets from configuration.

use std::path::{Path, PathBuf};

use log::debug;
use quiz_core::catalog;
use quiz_core::model::{QuestionDraft, QuestionSet};

use crate::error::QuestionSourceError;

/// Where the quiz questions come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuestionSource {
    /// The historiography set compiled into the binary.
    #[default]
    BuiltIn,
    /// A JSON array of question drafts on disk.
    File(PathBuf),
}

impl QuestionSource {
    /// # Errors
    ///
    /// Returns `QuestionSourceError` if the file cannot be read, parsed or validated.
    pub fn load(&self) -> Result<QuestionSet, QuestionSourceError> {
        match self {
            QuestionSource::BuiltIn => Ok(catalog::historiography()),
            QuestionSource::File(path) => load_question_set(path),
        }
    }
}

/// Parse a JSON array of question drafts.
///
/// # Errors
///
/// Returns `QuestionSourceError::Parse` for malformed JSON and
/// `QuestionSourceError::Invalid` when a question breaks the model rules.
pub fn parse_question_set(json: &str) -> Result<QuestionSet, QuestionSourceError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
    Ok(QuestionSet::from_drafts(drafts)?)
}

/// Read and validate a question file.
///
/// # Errors
///
/// Returns `QuestionSourceError::Io` if the file cannot be read, otherwise as `parse_question_set`.
pub fn load_question_set(path: impl AsRef<Path>) -> Result<QuestionSet, QuestionSourceError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| QuestionSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_question_set(&raw)?;
    debug!("loaded {} questions from {}", set.len(), path.display());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionError, QuestionSetError};

    #[test]
    fn parses_valid_json() {
        let set = parse_question_set(
            r#"[{"prompt":"Q","options":["a","b"],"correct_index":1,"explanation":"b"}]"#,
        )
        .unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().correct_index(), 1);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_question_set("{ not json").unwrap_err();
        assert!(matches!(err, QuestionSourceError::Parse(_)));
    }

    #[test]
    fn invalid_question_is_reported_by_position() {
        let err = parse_question_set(
            r#"[
                {"prompt":"ok","options":["a","b"],"correct_index":0},
                {"prompt":"bad","options":["a"],"correct_index":0}
            ]"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            QuestionSourceError::Invalid(QuestionSetError::Question {
                position: 2,
                source: QuestionError::TooFewOptions { len: 1 },
            })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("quiz-services-missing-questions.json");
        let err = load_question_set(&path).unwrap_err();

        assert!(matches!(err, QuestionSourceError::Io { .. }));
        assert!(err.to_string().contains("quiz-services-missing-questions.json"));
    }

    #[test]
    fn built_in_source_is_historiography() {
        let set = QuestionSource::default().load().unwrap();
        assert_eq!(set.len(), 5);
    }
}
