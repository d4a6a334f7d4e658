//! Capturing-group scanner for regular-expression source text
//!
//! Walks pattern source once, left to right, and reports every opening
//! parenthesis that starts a capturing group. Escaped characters and
//! character classes are skipped, `(?<name>` and `(?P<name>` headers yield
//! named groups, and every other `(?` construct (non-capturing groups,
//! lookaround, inline flags) is not a capture.
//!
//! # Examples
//!
//! ```
//! use pathrex::scanner::capture_groups;
//!
//! let groups = capture_groups(r"(?<a>\w+)/(\d+)(?:x)\(");
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].name.as_deref(), Some("a"));
//! assert_eq!(groups[1].offset, 10);
//! ```

/// A capturing-group opening found in pattern source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOpening {
    /// Byte offset of the opening `(`
    pub offset: usize,
    /// Group name for named captures
    pub name: Option<String>,
}

impl GroupOpening {
    const fn positional(offset: usize) -> Self {
        Self { offset, name: None }
    }

    fn named(offset: usize, name: &str) -> Self {
        Self {
            offset,
            name: Some(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    Normal,
    /// After a backslash; `class` holds the enclosing character class start
    Escaped { class: Option<usize> },
    CharClass { start: usize },
    /// Just saw `(`
    GroupOpen { start: usize },
    /// Saw `(?`
    GroupQuery { start: usize },
    /// Saw `(?P`
    GroupPython { start: usize },
    /// Inside `(?<` or `(?P<`, reading the name
    GroupName { start: usize, name_start: usize },
}

/// Find every capturing-group opening in `source`, in order
#[must_use]
pub fn capture_groups(source: &str) -> Vec<GroupOpening> {
    let bytes = source.as_bytes();
    let mut groups = Vec::new();
    let mut state = State::Normal;

    for (i, &byte) in bytes.iter().enumerate() {
        state = match state {
            State::Normal => step_normal(byte, i),
            State::Escaped { class } => class.map_or(State::Normal, |start| State::CharClass { start }),
            State::CharClass { start } => match byte {
                b'\\' => State::Escaped { class: Some(start) },
                b']' if !is_leading_bracket(bytes, start, i) => State::Normal,
                _ => State::CharClass { start },
            },
            State::GroupOpen { start } if byte == b'?' => State::GroupQuery { start },
            State::GroupOpen { start } => {
                groups.push(GroupOpening::positional(start));
                step_normal(byte, i)
            },
            State::GroupQuery { start } => match byte {
                b'<' => State::GroupName {
                    start,
                    name_start: i + 1,
                },
                b'P' => State::GroupPython { start },
                _ => State::Normal,
            },
            State::GroupPython { start } if byte == b'<' => State::GroupName {
                start,
                name_start: i + 1,
            },
            State::GroupPython { .. } => State::Normal,
            State::GroupName { start, name_start } => match byte {
                // (?<= and (?<! are lookbehind
                b'=' | b'!' if i == name_start => State::Normal,
                b'>' => {
                    groups.push(GroupOpening::named(start, &source[name_start..i]));
                    State::Normal
                },
                _ => State::GroupName { start, name_start },
            },
        };
    }

    if let State::GroupOpen { start } = state {
        groups.push(GroupOpening::positional(start));
    }

    groups
}

const fn step_normal(byte: u8, i: usize) -> State {
    match byte {
        b'\\' => State::Escaped { class: None },
        b'[' => State::CharClass { start: i },
        b'(' => State::GroupOpen { start: i },
        _ => State::Normal,
    }
}

/// A `]` directly after `[` or `[^` is a literal member of the class
fn is_leading_bracket(bytes: &[u8], start: usize, i: usize) -> bool {
    i == start + 1 || (i == start + 2 && bytes[start + 1] == b'^')
}
