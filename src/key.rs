//! Capture keys describing the groups of a compiled pattern
//!
//! Every capturing group in a compiled pattern gets exactly one [`Key`], in the
//! left-to-right order of the group openings. A [`KeyList`] is the accumulator
//! that callers own and hand to [`crate::compile`] by mutable reference, so
//! several compilations can share one continuous list.

use serde::Serialize;

/// Name of a capture key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum KeyName {
    /// Explicit parameter name (`:id`, `(?<id>...)`)
    Named(String),
    /// Zero-based positional index for unnamed groups
    Index(usize),
}

impl KeyName {
    /// Positional index, if this is an unnamed key
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Named(_) => None,
        }
    }

    /// Explicit name, if this is a named key
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Index(_) => None,
        }
    }
}

impl std::fmt::Display for KeyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for KeyName {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for KeyName {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<usize> for KeyName {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// One capturing group of a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Key {
    /// Parameter name or positional index
    pub name: KeyName,
    /// Whether the parameter was marked optional with a trailing `?`
    pub optional: bool,
    /// Byte offset in the source text the group originated from
    ///
    /// Only meaningful for ordering keys that came from the same source text.
    pub offset: usize,
}

impl Key {
    /// Create a required named key
    #[must_use]
    pub fn named(name: impl Into<String>, offset: usize) -> Self {
        Self {
            name: KeyName::Named(name.into()),
            optional: false,
            offset,
        }
    }

    /// Create a positional key
    #[must_use]
    pub const fn positional(index: usize, offset: usize) -> Self {
        Self {
            name: KeyName::Index(index),
            optional: false,
            offset,
        }
    }

    /// Mark the key optional
    #[must_use]
    pub const fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

/// Ordered accumulator of keys
///
/// Keys are only ever appended. Positional indices continue from the highest
/// index already present, so a pre-seeded list is never renumbered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyList {
    keys: Vec<Key>,
}

impl KeyList {
    /// Create an empty key list
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Next unused positional index
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.keys
            .iter()
            .filter_map(|k| k.name.index())
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Append a key
    pub fn push(&mut self, key: Key) {
        self.keys.push(key);
    }

    /// Number of keys
    #[must_use]
    pub const fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over keys in group order
    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    /// Keys as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Key] {
        &self.keys
    }

    /// Find the first key with the given explicit name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.name.as_str() == Some(name))
    }

    /// Consume the list into its keys
    #[must_use]
    pub fn into_vec(self) -> Vec<Key> {
        self.keys
    }
}

impl From<Vec<Key>> for KeyList {
    fn from(keys: Vec<Key>) -> Self {
        Self { keys }
    }
}

impl std::ops::Index<usize> for KeyList {
    type Output = Key;

    fn index(&self, index: usize) -> &Key {
        &self.keys[index]
    }
}

impl Extend<Key> for KeyList {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}

impl<'a> IntoIterator for &'a KeyList {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl IntoIterator for KeyList {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}
