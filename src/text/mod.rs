//! Text-level primitives shared by every formatting component.
//!
//! - [`eol`]: per-file end-of-line detection
//! - [`cursor`]: finite, forward-only line sequences
//! - [`span`]: offset-based slicing around a sub-region of interest

pub mod cursor;
pub mod eol;
pub mod span;

pub use cursor::LineCursor;
pub use eol::Eol;
pub use span::{split_source, SplitSource};
