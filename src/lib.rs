//! tsreflow - Span-based reflow engine for TypeScript sources
//!
//! Reindents block literals, aligns call and decorator arguments,
//! reflows constructor parameters and normalizes import statements.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::struct_excessive_bools)]

pub mod ast;
pub mod config;
pub mod error;
pub mod format;
pub mod passes;
pub mod text;

// Re-export commonly used types
pub use ast::{
    apply_edits, ArgumentRecord, CallSite, ConstructorSite, Edit, ImportStatement, ParsedFile,
    SourceSpan,
};
pub use config::FormatterOptions;
pub use error::{FormatError, Result};
pub use format::{align_arguments, reformat_literal};
pub use passes::{ensure_supported_source, FileFormatter, Formatter};
pub use text::Eol;
