//! Error types.

use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Result type for trellis operations.
pub type Result<T> = StdResult<T, Error>;

/// Parse error marker type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
#[error("{message}")]
pub struct ParseError {
    /// Parse error message, optionally including location.
    message: String,
}

impl ParseError {
    /// Construct a parse error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Construct a parse error with optional line/column information.
    pub fn with_position(
        message: impl Into<String>,
        line: Option<usize>,
        column: Option<usize>,
    ) -> Self {
        let message = message.into();
        let message = match (line, column) {
            (Some(line), Some(column)) => format!("{message} (line {line}, column {column})"),
            (Some(line), None) => format!("{message} (line {line})"),
            (None, Some(column)) => format!("{message} (column {column})"),
            (None, None) => message,
        };
        Self { message }
    }
}

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    #[error("geometry: {0}")]
    /// Geometry failure.
    Geometry(String),
    #[error("config: {0}")]
    /// Configuration is well-formed but semantically invalid.
    Config(String),
    #[error("io: {0}")]
    /// I/O failure while reading config or writing a dump.
    Io(String),
    #[error("internal: {0}")]
    /// Internal error.
    Internal(String),

    #[error("parse error: {0}")]
    /// Parsing failure.
    Parse(#[source] ParseError),
}

impl From<geom::Error> for Error {
    fn from(e: geom::Error) -> Self {
        Self::Geometry(e.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
