use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::Question;

/// File name of the fixture looked up next to the executable.
pub const DEFAULT_FIXTURE_NAME: &str = "questions.json";

/// On-disk shape of a question fixture.
///
/// Other top-level keys (`schemaVersion`, `tags`, `source`, ...) are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FixtureDocument {
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Error loading a question fixture.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the fixture that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Default fixture location: `questions.json` in the executable's directory,
/// or in the working directory if the executable path is unknown.
pub fn default_fixture_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_FIXTURE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_NAME))
}

/// Load the `questions` list of a fixture file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: FixtureDocument =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %path.display(),
        count = document.questions.len(),
        "loaded question fixture"
    );

    Ok(document.questions)
}

/// Render questions in the fixture format.
pub fn to_fixture_json(questions: &[Question]) -> Result<String, serde_json::Error> {
    let document = FixtureDocument {
        questions: questions.to_vec(),
    };
    serde_json::to_string_pretty(&document)
}
