//! # quiz-questions
//!
//! Emits a bounded list of quiz questions as JSON.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_questions::{write_questions, QuestionProvider, Source};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the bank from a fixture file
//!     let provider = QuestionProvider::new(Source::Fixture("questions.json".into()));
//!
//!     // Take up to five questions; tags are accepted but unused
//!     let questions = provider.questions("python", 5)?;
//!
//!     write_questions(std::io::stdout().lock(), &questions)?;
//!     Ok(())
//! }
//! ```

mod data;
pub mod logging;
mod models;
mod output;
mod provider;

pub use data::{
    default_fixture_path, embedded_questions, load_questions_from_json, to_fixture_json,
    FixtureDocument, LoadError, DEFAULT_FIXTURE_NAME,
};
pub use models::Question;
pub use output::{write_error, write_questions, ErrorPayload};
pub use provider::{truncate, ProviderError, QuestionProvider, Source};
