//! Path specification compiler
//!
//! [`compile`] accepts three shapes of input, see [`PathSpec`]:
//!
//! - a template string, rewritten token by token into an anchored pattern
//! - an already compiled [`PathPattern`], whose keys are extracted and which
//!   is returned unchanged
//! - a list of either, compiled one by one and joined by alternation
//!
//! # Examples
//!
//! ```
//! use pathrex::{compile, KeyList, KeyName, Options};
//!
//! let mut keys = KeyList::new();
//! let pattern = compile("/user/:id", &mut keys, &Options::default()).unwrap();
//!
//! assert_eq!(pattern.source(), "^/user(?:/([^/]+?))/?$");
//! assert_eq!(keys[0].name, KeyName::from("id"));
//! assert!(pattern.is_match("/USER/42").unwrap());
//! ```

use crate::config::Options;
use crate::error::Result;
use crate::key::{Key, KeyList, KeyName};
use crate::pattern::PathPattern;
use crate::scanner::capture_groups;
use crate::template::{self, Rewrite, Slot};

/// Input accepted by [`compile`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// Path template such as `/user/:id?`
    Template(String),
    /// Already compiled pattern, passed through unchanged
    Pattern(PathPattern),
    /// Alternatives compiled with a shared key list
    List(Vec<Self>),
}

impl From<&str> for PathSpec {
    fn from(template: &str) -> Self {
        Self::Template(template.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(template: String) -> Self {
        Self::Template(template)
    }
}

impl From<PathPattern> for PathSpec {
    fn from(pattern: PathPattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl<T: Into<Self>> From<Vec<T>> for PathSpec {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Compile a path specification into a pattern, appending its keys
///
/// `keys` is the caller's accumulator: keys for every capturing group of the
/// result are appended in group order, and positional indices continue from
/// those already present.
pub fn compile(
    spec: impl Into<PathSpec>,
    keys: &mut KeyList,
    options: &Options,
) -> Result<PathPattern> {
    compile_spec(spec.into(), keys, options)
}

/// Compile a single template with a fresh key list
///
/// # Examples
///
/// ```
/// use pathrex::{compile_template, Options};
///
/// let (pattern, keys) = compile_template("/files/*", &Options::default()).unwrap();
/// assert_eq!(keys.len(), 1);
/// assert_eq!(
///     pattern.captures("/files/a/b").unwrap(),
///     Some(vec![Some("a/b".to_string())])
/// );
/// ```
pub fn compile_template(template: &str, options: &Options) -> Result<(PathPattern, KeyList)> {
    let mut keys = KeyList::new();
    let pattern = compile_str(template, &mut keys, options)?;
    Ok((pattern, keys))
}

fn compile_spec(spec: PathSpec, keys: &mut KeyList, options: &Options) -> Result<PathPattern> {
    match spec {
        PathSpec::Template(template) => compile_str(&template, keys, options),
        PathSpec::Pattern(pattern) => {
            extract_keys(&pattern, keys);
            Ok(pattern)
        },
        PathSpec::List(items) => compile_list(items, keys, options),
    }
}

/// Append a key for every capturing group of an existing pattern
fn extract_keys(pattern: &PathPattern, keys: &mut KeyList) {
    let before = keys.len();
    let mut next = keys.next_index();

    for group in capture_groups(pattern.source()) {
        let name = group.name.map_or_else(
            || {
                next += 1;
                KeyName::Index(next - 1)
            },
            KeyName::Named,
        );
        keys.push(Key {
            name,
            optional: false,
            offset: group.offset,
        });
    }

    log::debug!(
        "Passthrough `{}`: {} key(s) extracted",
        pattern.source(),
        keys.len() - before
    );
}

fn compile_list(items: Vec<PathSpec>, keys: &mut KeyList, options: &Options) -> Result<PathPattern> {
    let sources = items
        .into_iter()
        .map(|item| compile_spec(item, keys, options).map(|p| p.source().to_string()))
        .collect::<Result<Vec<_>>>()?;

    let joined = sources.join("|");
    log::debug!("Alternation of {} element(s): {joined}", sources.len());
    PathPattern::new(joined, options.sensitive)
}

fn compile_str(template: &str, keys: &mut KeyList, options: &Options) -> Result<PathPattern> {
    let rewrite = template::rewrite(template);
    let before = keys.len();
    reconcile(&rewrite, keys);

    let source = finalize(rewrite.source, options);
    log::debug!(
        "Compiled `{template}` to `{source}` with {} key(s)",
        keys.len() - before
    );
    PathPattern::new(source, options.sensitive)
}

/// Give every capturing group of the rewritten source exactly one key
///
/// Parameter and wildcard captures recorded by the rewrite keep their own
/// metadata. Any other group (nested inside an explicit capture, a repeat
/// segment, or written in literal text) becomes an implicit key.
fn reconcile(rewrite: &Rewrite<'_>, keys: &mut KeyList) {
    let mut next = keys.next_index();
    let mut positional = |offset| {
        next += 1;
        Key::positional(next - 1, offset)
    };

    for group in capture_groups(&rewrite.source) {
        let key = match rewrite.slot_at(group.offset) {
            Some(Slot::Param {
                name,
                optional,
                offset,
            }) => Key::named(*name, *offset).with_optional(*optional),
            Some(Slot::Wildcard { offset }) => positional(*offset),
            None => {
                let offset = rewrite.template_offset(group.offset);
                log::trace!("Implicit group at {} (template offset {offset})", group.offset);
                match group.name {
                    Some(name) => Key::named(name, offset),
                    None => positional(offset),
                }
            },
        };
        keys.push(key);
    }
}

/// Apply trailing-slash tolerance and anchors
fn finalize(mut source: String, options: &Options) -> String {
    if !options.strict && !source.ends_with('/') {
        source.push_str("/?");
    }

    if options.end {
        source.push('$');
    } else if !source.ends_with('/') {
        source.push_str("(?:/|$)");
    }

    source.insert(0, '^');
    source
}
