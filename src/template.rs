//! Template tokenizer and rewrite pass
//!
//! A template such as `/user/:id(\d+)?/*` is split into tokens and each token
//! is rewritten into a regular-expression fragment:
//!
//! | Token            | Example        | Fragment                           |
//! |------------------|----------------|------------------------------------|
//! | escape           | `\(`           | copied through                     |
//! | named parameter  | `/:id?`        | `(?:/([^/]+?))?`                   |
//! | literal dot      | `.`            | `\.`                               |
//! | wildcard         | `*`            | `(.*)`                             |
//! | open group       | `/(`           | `/(?:`                             |
//!
//! Everything else is literal text and is copied through unchanged. The pass
//! records which output positions hold parameter and wildcard captures so the
//! compiler can reconcile them with every other group in the rewritten source.

use crate::scanner::capture_groups;

/// A named parameter token: `[/][.]:name[(capture)][*][?]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Param<'t> {
    pub slash: bool,
    pub format: bool,
    pub name: &'t str,
    /// Explicit capture and its offset relative to the token start
    pub capture: Option<(usize, &'t str)>,
    pub repeat: bool,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    Literal(&'t str),
    Escape(&'t str),
    Param(Param<'t>),
    Dot,
    Wildcard,
    OpenGroup,
}

/// Splits a template into `(offset, token)` pairs
#[derive(Debug)]
pub(crate) struct Tokenizer<'t> {
    template: &'t str,
    pos: usize,
}

impl<'t> Tokenizer<'t> {
    pub const fn new(template: &'t str) -> Self {
        Self { template, pos: 0 }
    }

    /// Token starting exactly at `at`, with its byte length
    fn token_at(&self, at: usize) -> Option<(Token<'t>, usize)> {
        let rest = &self.template[at..];
        let mut chars = rest.chars();

        match chars.next()? {
            '\\' => {
                let len = 1 + chars.next().map_or(0, char::len_utf8);
                return Some((Token::Escape(&rest[..len]), len));
            },
            '/' | '.' | ':' => {
                if let Some((param, len)) = parse_param(rest) {
                    return Some((Token::Param(param), len));
                }
            },
            _ => {},
        }

        if rest.starts_with('.') {
            Some((Token::Dot, 1))
        } else if rest.starts_with('*') {
            Some((Token::Wildcard, 1))
        } else if rest.starts_with("/(") {
            Some((Token::OpenGroup, 2))
        } else {
            None
        }
    }
}

impl<'t> Iterator for Tokenizer<'t> {
    type Item = (usize, Token<'t>);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        if start >= self.template.len() {
            return None;
        }

        if let Some((token, len)) = self.token_at(start) {
            self.pos += len;
            return Some((start, token));
        }

        // Literal run up to the next token
        let mut end = start;
        for (i, c) in self.template[start..].char_indices() {
            if i > 0 && self.token_at(start + i).is_some() {
                break;
            }
            end = start + i + c.len_utf8();
        }
        self.pos = end;
        Some((start, Token::Literal(&self.template[start..end])))
    }
}

const fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn parse_param(input: &str) -> Option<(Param<'_>, usize)> {
    let mut rest = input;

    let slash = rest.starts_with('/');
    if slash {
        rest = &rest[1..];
    }
    let format = rest.starts_with('.');
    if format {
        rest = &rest[1..];
    }
    rest = rest.strip_prefix(':')?;

    let name_len = rest.bytes().take_while(|&b| is_word(b)).count();
    if name_len == 0 {
        return None;
    }
    let name = &rest[..name_len];
    rest = &rest[name_len..];

    let capture = match balanced_group(rest) {
        Some(len) => {
            let offset = input.len() - rest.len();
            let (capture, tail) = rest.split_at(len);
            rest = tail;
            Some((offset, capture))
        },
        None => None,
    };

    let repeat = rest.starts_with('*');
    if repeat {
        rest = &rest[1..];
    }
    let optional = rest.starts_with('?');
    if optional {
        rest = &rest[1..];
    }

    let param = Param {
        slash,
        format,
        name,
        capture,
        repeat,
        optional,
    };
    Some((param, input.len() - rest.len()))
}

/// Length of the parenthesised group at the start of `input`, if balanced
fn balanced_group(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'(') {
        return None;
    }

    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            },
            _ => {},
        }
        i += 1;
    }
    None
}

/// What a recorded capture stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot<'t> {
    Param {
        name: &'t str,
        optional: bool,
        offset: usize,
    },
    Wildcard {
        offset: usize,
    },
}

/// Where a piece of output came from in the template
#[derive(Debug, Clone, Copy)]
struct Origin {
    out: usize,
    template: usize,
    verbatim: bool,
}

/// Result of rewriting a template
#[derive(Debug)]
pub(crate) struct Rewrite<'t> {
    pub source: String,
    slots: Vec<(usize, Slot<'t>)>,
    origins: Vec<Origin>,
}

impl<'t> Rewrite<'t> {
    /// Recorded capture whose `(` sits at output position `out`
    pub fn slot_at(&self, out: usize) -> Option<&Slot<'t>> {
        self.slots
            .iter()
            .find(|(pos, _)| *pos == out)
            .map(|(_, slot)| slot)
    }

    /// Template offset that produced output position `out`
    pub fn template_offset(&self, out: usize) -> usize {
        let idx = self.origins.partition_point(|o| o.out <= out);
        idx.checked_sub(1)
            .and_then(|i| self.origins.get(i))
            .map_or(0, |o| {
                if o.verbatim {
                    o.template + (out - o.out)
                } else {
                    o.template
                }
            })
    }
}

/// Characters that end the text a backtrack capture guards against
const BACKTRACK_BOUNDARY: &[char] = &[
    '/', '(', ')', '[', ']', '{', '}', '|', '+', '*', '?', '^', '$',
];

#[derive(Debug)]
struct Rewriter<'t> {
    out: String,
    slots: Vec<(usize, Slot<'t>)>,
    origins: Vec<Origin>,
    backtrack: String,
}

impl<'t> Rewriter<'t> {
    const fn new() -> Self {
        Self {
            out: String::new(),
            slots: Vec::new(),
            origins: Vec::new(),
            backtrack: String::new(),
        }
    }

    fn emit(&mut self, text: &str, template: usize, verbatim: bool) {
        if text.is_empty() {
            return;
        }
        self.origins.push(Origin {
            out: self.out.len(),
            template,
            verbatim,
        });
        self.out.push_str(text);
    }

    fn literal(&mut self, text: &'t str, at: usize) {
        self.emit(text, at, true);
        // Only plain text after the last slash or regex metacharacter may
        // reach a lookahead
        match text.rfind(BACKTRACK_BOUNDARY) {
            Some(slash) => {
                self.backtrack.clear();
                self.backtrack.push_str(&text[slash + 1..]);
            },
            None => self.backtrack.push_str(text),
        }
    }

    fn wildcard(&mut self, at: usize) {
        self.slots.push((self.out.len(), Slot::Wildcard { offset: at }));
        self.emit("(.*)", at, false);
        self.backtrack.clear();
    }

    fn param(&mut self, param: &Param<'t>, at: usize) {
        if param.slash || param.format {
            self.backtrack.clear();
        }
        let format = if param.format { "\\." } else { "" };

        let mut prefix = String::from("(?:");
        if param.slash {
            prefix.push('/');
        }
        prefix.push_str(format);
        self.emit(&prefix, at, false);

        self.slots.push((
            self.out.len(),
            Slot::Param {
                name: param.name,
                optional: param.optional,
                offset: at,
            },
        ));
        match param.capture {
            Some((rel, capture)) => self.explicit_capture(capture, at + rel),
            None if !self.backtrack.is_empty() => {
                let capture = format!("((?:(?!/|{}).)+?)", self.backtrack);
                self.emit(&capture, at, false);
            },
            None => self.emit(&format!("([^/{format}]+?)"), at, false),
        }

        if param.repeat {
            self.emit(&format!("((?:[/{format}].+?)?)"), at, false);
        }
        self.emit(if param.optional { ")?" } else { ")" }, at, false);
        self.backtrack.clear();
    }

    /// Copy a user capture, rewriting every unescaped `*` into a wildcard group
    fn explicit_capture(&mut self, capture: &str, at: usize) {
        let wrap = capture_groups(capture).first().map(|g| g.offset) != Some(0);
        if wrap {
            self.emit("(", at, false);
        }

        let bytes = capture.as_bytes();
        let mut copied = 0;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 1,
                b'*' => {
                    self.emit(&capture[copied..i], at + copied, true);
                    self.emit("(.*)", at + i, false);
                    copied = i + 1;
                },
                _ => {},
            }
            i += 1;
        }
        self.emit(&capture[copied..], at + copied, true);

        if wrap {
            self.emit(")", at, false);
        }
    }

    fn finish(self) -> Rewrite<'t> {
        Rewrite {
            source: self.out,
            slots: self.slots,
            origins: self.origins,
        }
    }
}

/// Rewrite a template into unanchored pattern source
pub(crate) fn rewrite(template: &str) -> Rewrite<'_> {
    let mut rewriter = Rewriter::new();

    for (at, token) in Tokenizer::new(template) {
        log::trace!("token at {at}: {token:?}");
        match token {
            Token::Literal(text) => rewriter.literal(text, at),
            // A dangling `\` matches a literal backslash
            Token::Escape("\\") => {
                rewriter.emit("\\\\", at, false);
                rewriter.backtrack.push_str("\\\\");
            },
            Token::Escape(text) => {
                rewriter.emit(text, at, true);
                rewriter.backtrack.push_str(text);
            },
            Token::Dot => {
                rewriter.emit("\\.", at, false);
                rewriter.backtrack.push_str("\\.");
            },
            Token::Wildcard => rewriter.wildcard(at),
            Token::OpenGroup => {
                rewriter.emit("/(?:", at, false);
                rewriter.backtrack.clear();
            },
            Token::Param(param) => rewriter.param(&param, at),
        }
    }

    rewriter.finish()
}
