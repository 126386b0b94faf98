mod embedded;
mod loader;

pub use embedded::embedded_questions;
pub use loader::{
    default_fixture_path, load_questions_from_json, to_fixture_json, FixtureDocument, LoadError,
    DEFAULT_FIXTURE_NAME,
};
