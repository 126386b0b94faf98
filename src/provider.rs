//! Question provider.
//!
//! Obtains the candidate bank from its source and cuts it down to the
//! requested number of questions.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::data::{embedded_questions, load_questions_from_json, LoadError};
use crate::models::Question;

/// Where the question bank comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The built-in bank. Never fails.
    Embedded,
    /// A JSON fixture shaped as `{"questions": [...]}`.
    Fixture(PathBuf),
}

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Error loading the backing question source.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
}

pub struct QuestionProvider {
    source: Source,
}

impl QuestionProvider {
    pub fn new(source: Source) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Load the full bank from the configured source.
    pub fn bank(&self) -> Result<Vec<Question>, ProviderError> {
        let bank = match &self.source {
            Source::Embedded => embedded_questions(),
            Source::Fixture(path) => load_questions_from_json(path)?,
        };

        for question in bank.iter().filter(|q| !q.is_well_formed()) {
            warn!(
                id = question.id,
                correct_answer = question.correct_answer,
                options = question.options.len(),
                "correct answer index is out of range"
            );
        }

        Ok(bank)
    }

    /// Return at most `count` questions from the front of the bank.
    ///
    /// `tags` is accepted for interface compatibility and does not affect
    /// the result.
    pub fn questions(&self, tags: &str, count: i64) -> Result<Vec<Question>, ProviderError> {
        debug!(tags, count, source = ?self.source, "providing questions");

        let mut bank = self.bank()?;
        let n = truncate(&bank, count).len();
        bank.truncate(n);
        Ok(bank)
    }
}

/// First `min(count, bank.len())` questions; a negative count yields none.
pub fn truncate(bank: &[Question], count: i64) -> &[Question] {
    let count = usize::try_from(count.max(0)).unwrap_or(usize::MAX);
    &bank[..count.min(bank.len())]
}
