//! Error types for flowterm.

use std::fmt;
use std::io;

/// Result type alias for flowterm operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for flowterm operations.
///
/// Only misuse and I/O are errors. Translation misses, content differences
/// between frames and viewport overflow are handled locally and never
/// surface here.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing to the terminal.
    Io(io::Error),
    /// Attribute lookup with an empty or whitespace-only key.
    InvalidAttributeKey,
    /// Unrecognized color specification.
    InvalidColor(String),
    /// Unrecognized style specification (e.g. unknown decoration word).
    InvalidStyle(String),
    /// Malformed markup text.
    InvalidMarkup { position: usize, reason: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidAttributeKey => {
                write!(f, "attribute key must not be empty or whitespace")
            }
            Self::InvalidColor(s) => write!(f, "invalid color: {s}"),
            Self::InvalidStyle(s) => write!(f, "invalid style: {s}"),
            Self::InvalidMarkup { position, reason } => {
                write!(f, "invalid markup at byte {position}: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
