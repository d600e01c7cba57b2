//! Error types and result aliases for tsreflow.
//!
//! The failure modes form a closed set the embedding collaborator can match
//! on. A literal whose closer never shows up is deliberately absent here:
//! the reindenter is a best-effort heuristic, not a parser, and terminates
//! quietly with whatever was already written.

use thiserror::Error;

/// Failure modes surfaced to the embedding collaborator.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Target file or span absent, or node offsets that do not line up with
    /// the supplied text. The offending item is skipped and the batch
    /// continues.
    #[error("input not found: {0}")]
    InputNotFound(String),

    /// Input outside the supported source-file-kind family.
    #[error("unsupported source kind: {0}")]
    UnsupportedKind(String),

    /// The input could not be loaded or parsed at all. Fatal for that file
    /// only; its on-disk content stays untouched.
    #[error("source construction failed: {0}")]
    Construction(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
