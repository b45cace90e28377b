use std::io::BufRead;

use super::error::InputError;

/// Prompt emitted before a query is captured.
pub const LISTENING_PROMPT: &str = "Listening... Please speak your query.";

/// Supplies one free-text query per call.
pub trait QuerySource {
    fn read_query(&mut self) -> Result<String, InputError>;
}

/// Reads a query as one line of text, standing in for a speech recogniser.
///
/// End of input and blank lines count as silence, bytes that are not UTF-8 as
/// unrecognised speech, and read failures as an unavailable service.
pub struct LineQuerySource<R> {
    reader: R,
}

impl<R: BufRead> LineQuerySource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> QuerySource for LineQuerySource<R> {
    fn read_query(&mut self) -> Result<String, InputError> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(InputError::ServiceUnavailable)?;
        if read == 0 {
            return Err(InputError::NoInput);
        }

        let line = String::from_utf8(buf).map_err(|_| InputError::Unrecognized)?;
        non_blank(&line)
    }
}

/// A query handed over up front, e.g. from the command line. Yields it once.
pub struct FixedQuerySource {
    query: Option<String>,
}

impl FixedQuerySource {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}

impl QuerySource for FixedQuerySource {
    fn read_query(&mut self) -> Result<String, InputError> {
        let query = self.query.take().ok_or(InputError::NoInput)?;
        non_blank(&query)
    }
}

fn non_blank(text: &str) -> Result<String, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(InputError::NoInput)
    } else {
        Ok(trimmed.to_string())
    }
}
