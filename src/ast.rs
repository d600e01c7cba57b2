//! Parser-facing data model.
//!
//! The engine never parses the source language itself. An external
//! parser/AST provider locates imports, decorators, constructors, and
//! call expressions and hands them over as the plain-data records in
//! this module: immutable [`SourceSpan`] snapshots plus per-kind
//! metadata. The engine answers with [`Edit`]s; [`apply_edits`] splices
//! them into the original text.

use crate::error::{FormatError, Result};

/// Immutable snapshot of one source region.
///
/// Offsets are byte offsets into the whole file; `text` is the exact
/// slice between them. `indent_level` is the region's indentation level
/// as reported by the parser, not a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub indent_level: usize,
}

impl SourceSpan {
    #[must_use]
    pub fn new(start: usize, end: usize, text: impl Into<String>, indent_level: usize) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            indent_level,
        }
    }
}

/// One call or annotation argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentRecord {
    pub text: String,
    /// Whether the argument is an object or array literal, and thereby
    /// eligible for literal reflow.
    pub is_block_literal: bool,
}

/// A call expression or annotation whose argument list can be aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub span: SourceSpan,
    /// Absolute offset of the first argument; `None` for an empty list.
    pub arguments_start: Option<usize>,
    /// Absolute end offset of the last argument; unused when empty.
    pub arguments_end: usize,
    pub arguments: Vec<ArgumentRecord>,
    /// Text of the enclosing statement from its first visible character
    /// up to the first argument, e.g. `const x = this.service.load(`.
    pub statement_prefix: String,
}

/// A constructor declaration with its parameter texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorSite {
    pub span: SourceSpan,
    pub parameters: Vec<String>,
}

/// One import statement as located by the parser.
///
/// `module_specifier` carries no quote characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub span: SourceSpan,
    pub has_named_bindings: bool,
    pub module_specifier: String,
}

/// Transient sort record for import reordering; discarded once the
/// reordered run has been rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub source_text: String,
    pub has_named_bindings: bool,
    pub module_specifier: String,
}

impl From<&ImportStatement> for ImportRecord {
    fn from(statement: &ImportStatement) -> Self {
        Self {
            source_text: statement.span.text.clone(),
            has_named_bindings: statement.has_named_bindings,
            module_specifier: statement.module_specifier.clone(),
        }
    }
}

/// Everything the external parser extracted from one file.
#[derive(Debug, Clone, Default)]
pub struct ParsedFile {
    pub imports: Vec<ImportStatement>,
    pub decorators: Vec<CallSite>,
    pub constructors: Vec<ConstructorSite>,
    /// Outermost call expressions inside variable, return, and
    /// expression statements. Nested calls are the parser's concern;
    /// overlapping spans here are rejected when edits are applied.
    pub calls: Vec<CallSite>,
}

/// Replacement of one span with new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Splices a batch of edits into `source`.
///
/// Edits are applied back to front so earlier offsets stay valid.
/// Overlapping edits and edits whose offsets fall outside the source
/// (or off a UTF-8 boundary) are rejected with
/// [`FormatError::InputNotFound`]; nothing is applied partially in the
/// overlap case because validation happens before the first splice.
pub fn apply_edits(source: &str, edits: Vec<Edit>) -> Result<String> {
    let mut edits = edits;
    edits.sort_by_key(|edit| edit.start);

    for pair in edits.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(FormatError::InputNotFound(format!(
                "overlapping edits at {}..{} and {}..{}",
                pair[0].start, pair[0].end, pair[1].start, pair[1].end
            )));
        }
    }

    for edit in &edits {
        if source.get(edit.start..edit.end).is_none() {
            return Err(FormatError::InputNotFound(format!(
                "edit span {}..{} outside source of length {}",
                edit.start,
                edit.end,
                source.len()
            )));
        }
    }

    let mut out = source.to_string();

    for edit in edits.iter().rev() {
        out.replace_range(edit.start..edit.end, &edit.text);
    }

    Ok(out)
}
