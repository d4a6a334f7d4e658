//! Compiled path patterns
//!
//! A [`PathPattern`] owns the final regular-expression source, its
//! case-sensitivity flag and the compiled engine. Patterns are compiled with
//! the [`regex`] crate whenever the source allows it; sources that need
//! lookaround (parameters that guard against an adjacent literal) fall up to
//! [`fancy_regex`].

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
enum Engine {
    Basic(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl Engine {
    fn build(source: &str, sensitive: bool) -> Result<Self> {
        let basic = regex::RegexBuilder::new(source)
            .case_insensitive(!sensitive)
            .build();

        match basic {
            Ok(re) => Ok(Self::Basic(re)),
            Err(basic_err) => {
                log::trace!("regex rejected `{source}` ({basic_err}), trying fancy-regex");
                let flagged = if sensitive {
                    source.to_string()
                } else {
                    format!("(?i){source}")
                };
                fancy_regex::Regex::new(&flagged)
                    .map(Self::Fancy)
                    .map_err(|e| Error::compile(source, e))
            },
        }
    }
}

/// A compiled, immutable path pattern
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    sensitive: bool,
    engine: Engine,
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.sensitive == other.sensitive
    }
}

impl Eq for PathPattern {}

impl PathPattern {
    /// Compile raw regular-expression source
    ///
    /// Patterns built this way are the "already compiled" input accepted by
    /// [`crate::compile`], which only extracts their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathrex::PathPattern;
    ///
    /// let pattern = PathPattern::new(r"^/(?<a>\w+)/(?<b>\w+)$", true).unwrap();
    /// assert!(pattern.is_match("/x/y").unwrap());
    /// ```
    pub fn new(source: impl Into<String>, sensitive: bool) -> Result<Self> {
        let source = source.into();
        let engine = Engine::build(&source, sensitive)?;
        Ok(Self {
            source,
            sensitive,
            engine,
        })
    }

    /// Regular-expression source text
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether matching is case-sensitive
    #[must_use]
    pub const fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Flags in regular-expression literal notation: `"i"` or `""`
    #[must_use]
    pub const fn flags(&self) -> &'static str {
        if self.sensitive { "" } else { "i" }
    }

    /// Whether the pattern needed the backtracking engine
    #[must_use]
    pub const fn uses_backtracking(&self) -> bool {
        matches!(self.engine, Engine::Fancy(_))
    }

    /// Number of capturing groups
    #[must_use]
    pub fn group_count(&self) -> usize {
        match &self.engine {
            Engine::Basic(re) => re.captures_len() - 1,
            Engine::Fancy(re) => re.captures_len() - 1,
        }
    }

    /// Test a path against the pattern
    pub fn is_match(&self, path: &str) -> Result<bool> {
        match &self.engine {
            Engine::Basic(re) => Ok(re.is_match(path)),
            Engine::Fancy(re) => re.is_match(path).map_err(|e| Error::matching(path, e)),
        }
    }

    /// Match a path and return every capturing group, in group order
    ///
    /// Returns `Ok(None)` when the path does not match. Groups that did not
    /// participate in the match are `None`.
    pub fn captures(&self, path: &str) -> Result<Option<Vec<Option<String>>>> {
        let groups = match &self.engine {
            Engine::Basic(re) => re.captures(path).map(|caps| {
                caps.iter()
                    .skip(1)
                    .map(|m| m.map(|m| m.as_str().to_string()))
                    .collect()
            }),
            Engine::Fancy(re) => re
                .captures(path)
                .map_err(|e| Error::matching(path, e))?
                .map(|caps| {
                    (1..caps.len())
                        .map(|i| caps.get(i).map(|m| m.as_str().to_string()))
                        .collect()
                }),
        };
        Ok(groups)
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags())
    }
}

impl std::str::FromStr for PathPattern {
    type Err = Error;

    /// Parse raw source as a case-insensitive pattern
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s, false)
    }
}
