//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::key::{Key, KeyList, KeyName};
use crate::pattern::PathPattern;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a compile operation
#[derive(Debug, Serialize)]
pub struct CompileResult {
    /// Compiled regular-expression source
    pub source: String,
    /// Flags (`"i"` when case-insensitive)
    pub flags: String,
    /// Keys in capturing-group order
    pub keys: Vec<Key>,
}

impl CompileResult {
    /// Build a result from a compiled pattern and its keys
    #[must_use]
    pub fn new(pattern: &PathPattern, keys: &KeyList) -> Self {
        Self {
            source: pattern.source().to_string(),
            flags: pattern.flags().to_string(),
            keys: keys.as_slice().to_vec(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Pattern: /{}/{}", self.source, self.flags);

        if self.keys.is_empty() {
            println!("No keys.");
            return;
        }

        println!("Keys:");
        for key in &self.keys {
            let optional = if key.optional { " (optional)" } else { "" };
            println!("  [{}] {}{optional}", key.offset, key.name);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// A key paired with the text its group captured
#[derive(Debug, Serialize)]
pub struct CapturedParam {
    /// Key name or positional index
    pub name: KeyName,
    /// Captured text, `None` when the group did not participate
    pub value: Option<String>,
}

/// Outcome of matching one path
#[derive(Debug, Serialize)]
pub struct PathMatch {
    /// Candidate path
    pub path: String,
    /// Whether the pattern matched
    pub matched: bool,
    /// Captured parameters, empty when unmatched
    pub params: Vec<CapturedParam>,
}

impl PathMatch {
    /// Pair captured groups with their keys
    #[must_use]
    pub fn new(path: &str, keys: &KeyList, captures: Option<Vec<Option<String>>>) -> Self {
        let matched = captures.is_some();
        let params = captures
            .unwrap_or_default()
            .into_iter()
            .zip(keys)
            .map(|(value, key)| CapturedParam {
                name: key.name.clone(),
                value,
            })
            .collect();

        Self {
            path: path.to_string(),
            matched,
            params,
        }
    }
}

/// Result of a match operation
#[derive(Debug, Serialize)]
pub struct MatchResult {
    /// Compiled regular-expression source
    pub source: String,
    /// Per-path outcomes, in input order
    pub paths: Vec<PathMatch>,
}

impl MatchResult {
    /// Whether every path matched
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.paths.iter().all(|p| p.matched)
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for m in &self.paths {
            if !m.matched {
                println!("{}: no match", m.path);
                continue;
            }

            println!("{}: match", m.path);
            for param in &m.params {
                println!(
                    "  {} = {}",
                    param.name,
                    param.value.as_deref().unwrap_or("(none)")
                );
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
