//! Error types for pattern compilation and matching

use thiserror::Error;

/// Errors produced while compiling or applying a path pattern
#[derive(Debug, Error)]
pub enum Error {
    /// The rewritten source is not a valid regular expression
    ///
    /// Raised for malformed explicit capture groups or unbalanced parentheses
    /// in a template, or for invalid raw pattern source.
    #[error("invalid pattern `{pattern}`: {message}")]
    Compile {
        /// Pattern source handed to the regex engine
        pattern: String,
        /// Engine diagnostic
        message: String,
    },

    /// The backtracking engine gave up while matching a path
    #[error("failed to match `{path}`: {message}")]
    Match {
        /// Candidate path
        path: String,
        /// Engine diagnostic
        message: String,
    },
}

impl Error {
    /// Create a compile error
    #[must_use]
    pub fn compile(pattern: impl Into<String>, message: impl ToString) -> Self {
        Self::Compile {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Create a match error
    #[must_use]
    pub fn matching(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Match {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
