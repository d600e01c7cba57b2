//! Per-file end-of-line detection.

use std::fmt;

/// End-of-line mode of one source file.
///
/// Detected once per file and threaded through every component that emits
/// text, so CRLF sources come back CRLF without a separate restore pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Eol {
    #[default]
    Lf,
    CrLf,
}

impl Eol {
    /// Detect the mode from the first matching sequence in `text`.
    ///
    /// A carriage return anywhere selects CRLF; everything else, including
    /// text without any line break, is LF.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains('\r') {
            Eol::CrLf
        } else {
            Eol::Lf
        }
    }

    /// The literal character sequence for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Eol::Lf => "\n",
            Eol::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for Eol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Eol::Lf => "LF",
            Eol::CrLf => "CRLF",
        };
        write!(f, "{name}")
    }
}
