//! Crate-wide error type and `Result` alias.

use thiserror::Error;

/// All error conditions surfaced by the Twitterverse pipeline.
#[derive(Debug, Error)]
pub enum TwitterverseError {
    /// Malformed graph or query file: missing sentinel, truncated record,
    /// unrecognized section. `line` is 1-based.
    #[error("malformed input at line {line}: {message}")]
    Format { line: usize, message: String },

    /// A pipeline stage needed profile fields for a username absent from
    /// the graph. Traversal tolerates dangling references; filters that
    /// read profiles and presentation do not.
    #[error("unknown user: {0}")]
    UnknownUser(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TwitterverseError {
    /// Shorthand for a [`TwitterverseError::Format`] at a 1-based line.
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T, E = TwitterverseError> = std::result::Result<T, E>;
