//! Compilation options
//!
//! Options can be built in code or loaded from a TOML file. A file may hold
//! the fields at the top level or under an `[options]` table:
//!
//! ```toml
//! [options]
//! strict = true
//! end = false
//! ```
//!
//! Unrecognised fields are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading options
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Options file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Options file is not valid TOML or has mistyped fields
    #[error("invalid options: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options controlling how a path specification is compiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// When false, a trailing slash is tolerated at the end of a match
    pub strict: bool,
    /// When false, the pattern may match a prefix ending at a `/` boundary
    pub end: bool,
    /// When false, matching is case-insensitive
    pub sensitive: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict: false,
            end: true,
            sensitive: false,
        }
    }
}

impl Options {
    /// Create options with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strict trailing-slash handling
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set whether the pattern must match to the end of the path
    #[must_use]
    pub const fn with_end(mut self, end: bool) -> Self {
        self.end = end;
        self
    }

    /// Set case-sensitive matching
    #[must_use]
    pub const fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    /// Parse options from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut table: toml::Table = toml::from_str(content)?;
        let options = match table.remove("options") {
            Some(section) => section.try_into()?,
            None => toml::Value::Table(table).try_into()?,
        };
        Ok(options)
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_toml_str(&content)?;
        log::debug!("Loaded options from {}: {options:?}", path.display());
        Ok(options)
    }
}
