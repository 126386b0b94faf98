//! JSON payloads written to standard output.

use std::io::{self, Write};

use serde::Serialize;

use crate::models::Question;

/// Payload emitted instead of the question array when the bank cannot be loaded.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl ErrorPayload {
    pub fn new(err: &dyn std::error::Error) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

pub fn write_questions<W: Write>(mut writer: W, questions: &[Question]) -> io::Result<()> {
    serde_json::to_writer(&mut writer, questions)?;
    writeln!(writer)?;
    writer.flush()
}

pub fn write_error<W: Write>(mut writer: W, err: &dyn std::error::Error) -> io::Result<()> {
    serde_json::to_writer(&mut writer, &ErrorPayload::new(err))?;
    writeln!(writer)?;
    writer.flush()
}
