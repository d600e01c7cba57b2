//! Span reflow primitives.
//!
//! This module contains the layout engine organized into submodules:
//! - [`classify`]: Heuristic shape classification of literal body lines
//! - [`writer`]: Column-stack writer that pads each emitted line
//! - [`reindent`]: Recursive-descent reflow of multi-line literals
//! - [`align`]: Column alignment of call and annotation argument lists

pub mod align;
pub mod classify;
pub mod reindent;
pub mod writer;

pub use align::align_arguments;
pub use classify::{classify, Delimiter, LineKind};
pub use reindent::reformat_literal;
pub use writer::{hanging_block, BlockWriter, INDENT_WIDTH};
