//! Finite, forward-only line sequences.

use crate::text::Eol;

/// Single-pass sequence of lines from one span's text.
///
/// Splits on the file's detected end-of-line sequence. Built fresh per
/// operation and never rewound; `None` is the end-of-input sentinel that
/// terminates an active reindent frame.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: std::str::Split<'a, &'static str>,
}

impl<'a> LineCursor<'a> {
    #[must_use]
    pub fn new(text: &'a str, eol: Eol) -> Self {
        Self {
            lines: text.split(eol.as_str()),
        }
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.lines.next()
    }
}
