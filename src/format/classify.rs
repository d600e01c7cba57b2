//! Heuristic line classification for literal reflow.
//!
//! Classification is shape-based: each line of a multi-line object or
//! array literal is matched against a fixed priority ladder of patterns
//! instead of a grammar. All patterns are compiled once at startup using
//! `LazyLock` and avoid look-around so they stay inside the `regex`
//! crate's supported syntax.

use std::sync::LazyLock;

use regex::Regex;

/// Build a regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. This is acceptable because all
/// patterns in this module are compile-time constants that are verified
/// by tests. The panic occurs at first access of the `LazyLock` static.
fn build_re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

/// `key: {` with the brace left open at end of line; captures the key
/// prefix and whatever trailed the brace.
static OBJECT_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^(.*?:)\s*\{([^}]*)$"));

/// `key: [` with nothing after the bracket.
static ARRAY_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^(.*?:)\s*\[\s*$"));

/// `key: [first, second,` still open at end of line.
static ARRAY_INLINE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^.*?:\s*\[[^\]]*$"));

/// `],` at end of line with content before it.
static ARRAY_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^.+\],\s*$"));

/// Block delimiter pair being tracked by a reflow frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Brace,
    Bracket,
}

impl Delimiter {
    /// Character that closes this delimiter pair.
    #[must_use]
    pub fn closer(self) -> char {
        match self {
            Self::Brace => '}',
            Self::Bracket => ']',
        }
    }
}

/// Structural shape of one line inside a multi-line literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `key: {` opening a nested object, brace unbalanced on this line.
    ObjectOpenTrailing {
        key_prefix: String,
        /// Content that followed the brace on the same line, if any.
        inline_remainder: Option<String>,
    },
    /// `key: [` opening a nested array with nothing after the bracket.
    ArrayOpenTrailing { key_prefix: String },
    /// `key: [first,` opening an array whose elements continue on the
    /// next lines, aligned under the bracket.
    ArrayOpenInline {
        /// Absolute column the continuation lines align to.
        column: usize,
    },
    /// `],` terminating a bracket-aligned array run.
    ArrayCloseAligned,
    /// Line starting with a bare opening delimiter.
    BlockOpenBare(Delimiter),
    /// Line starting with the closer the current frame is waiting for.
    BlockCloseBare,
    /// Anything else; echoed at the current column.
    Plain,
}

/// Classifies one literal line against the pattern ladder, most specific
/// first. `level` feeds the inline-array column computation and `closing`
/// is the delimiter the active frame is waiting for, when any.
#[must_use]
pub fn classify(line: &str, level: usize, closing: Option<char>) -> LineKind {
    if let Some(caps) = OBJECT_OPEN_RE.captures(line) {
        let remainder = caps[2].trim();
        return LineKind::ObjectOpenTrailing {
            key_prefix: caps[1].to_string(),
            inline_remainder: (!remainder.is_empty()).then(|| remainder.to_string()),
        };
    }

    if let Some(caps) = ARRAY_OPEN_RE.captures(line) {
        return LineKind::ArrayOpenTrailing {
            key_prefix: caps[1].to_string(),
        };
    }

    if ARRAY_INLINE_RE.is_match(line) {
        // find cannot fail once the pattern matched
        let bracket = line.find('[').unwrap_or(0);
        return LineKind::ArrayOpenInline {
            column: level * super::INDENT_WIDTH + bracket,
        };
    }

    if ARRAY_CLOSE_RE.is_match(line) {
        return LineKind::ArrayCloseAligned;
    }

    if line.starts_with('[') {
        return LineKind::BlockOpenBare(Delimiter::Bracket);
    }

    if line.starts_with('{') {
        return LineKind::BlockOpenBare(Delimiter::Brace);
    }

    if let Some(closer) = closing {
        if line.starts_with(closer) {
            return LineKind::BlockCloseBare;
        }
    }

    LineKind::Plain
}
