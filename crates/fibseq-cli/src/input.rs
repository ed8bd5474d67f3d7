//! Reading the requested count from a prompt or a flag value.

use std::io::{self, BufRead, Read, Write};

/// Maximum accepted length of a trimmed input value, in bytes.
pub const MAX_INPUT_LEN: usize = 32;

/// Upper bound on bytes consumed from the reader for a single line.
const MAX_LINE_BYTES: u64 = 1024;

/// Error raised while obtaining N from the user.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading from the input stream failed.
    #[error("failed to read input")]
    Io(#[from] io::Error),

    /// Nothing was entered.
    #[error("no input provided")]
    Empty,

    /// The value is longer than [`MAX_INPUT_LEN`].
    #[error("input too long ({0} bytes)")]
    TooLong(usize),

    /// The value is not an integer.
    #[error("not an integer: {0:?}")]
    NotANumber(String),
}

impl InputError {
    /// Whether the user typed something that is not a usable integer.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// Parse a count from user-supplied text.
///
/// Surrounding whitespace is ignored. The sign is kept so that negative
/// values reach validation in the core and are rejected there.
pub fn parse_count(raw: &str) -> Result<i64, InputError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(InputError::Empty);
    }
    if s.len() > MAX_INPUT_LEN {
        return Err(InputError::TooLong(s.len()));
    }
    s.parse::<i64>()
        .map_err(|_| InputError::NotANumber(s.to_string()))
}

/// Write `prompt`, then read and parse one line from `reader`.
pub fn prompt_count<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<i64, InputError> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut buf = Vec::new();
    let read = reader
        .by_ref()
        .take(MAX_LINE_BYTES)
        .read_until(b'\n', &mut buf)?;
    tracing::debug!(bytes = read, "read count from prompt");
    if read == 0 {
        return Err(InputError::Empty);
    }
    let line = String::from_utf8(buf).map_err(|e| {
        InputError::NotANumber(String::from_utf8_lossy(e.as_bytes()).into_owned())
    })?;
    parse_count(&line)
}
