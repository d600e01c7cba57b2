//! Recursive-descent reflow of multi-line object and array literals.
//!
//! Layout is rebuilt from structure alone: every line is stripped of its
//! surrounding whitespace, classified by shape, and re-emitted at the
//! column dictated by the writer's frame stack. Input indentation never
//! survives into the output.

use tracing::debug;

use crate::format::classify::{classify, LineKind};
use crate::format::writer::BlockWriter;
use crate::text::{Eol, LineCursor};

/// Frames beyond this depth are not opened; their lines stay in the
/// current frame.
const MAX_NESTING_DEPTH: usize = 64;

/// Reflows a multi-line object or array literal into canonical layout.
///
/// Single-line input is returned trimmed and otherwise untouched. The
/// result carries no trailing whitespace and no trailing line break, so
/// callers can splice it mid-expression.
#[must_use]
pub fn reformat_literal(text: &str, eol: Eol) -> String {
    let text = text.trim();

    if !text.contains(eol.as_str()) {
        return text.to_string();
    }

    let mut writer = BlockWriter::new(eol);
    let mut cursor = LineCursor::new(text, eol);

    reindent(0, &mut writer, &mut cursor, None);

    writer.finish().trim_end().to_string()
}

/// Consumes lines from `cursor` until the frame's closer, an aligned
/// array terminator, or end of input. The caller owns the frame push;
/// every exit path of this function owns the matching pop.
fn reindent(
    level: usize,
    writer: &mut BlockWriter,
    cursor: &mut LineCursor<'_>,
    closing: Option<char>,
) {
    while let Some(line) = cursor.next() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match classify(line, level, closing) {
            LineKind::ObjectOpenTrailing {
                key_prefix,
                inline_remainder,
            } => {
                writer.write_line(&key_prefix);
                writer.write_line("{");
                descend(level, None, writer, cursor, '}', inline_remainder.as_deref());
            }
            LineKind::ArrayOpenTrailing { key_prefix } => {
                writer.write_line(&key_prefix);
                writer.write_line("[");
                descend(level, None, writer, cursor, ']', None);
            }
            LineKind::ArrayOpenInline { column } => {
                writer.write_line(line);
                descend(level, Some(column), writer, cursor, ']', None);
            }
            LineKind::ArrayCloseAligned => {
                writer.write_line(line);
                writer.pop();
                return;
            }
            LineKind::BlockOpenBare(delimiter) => {
                writer.write_line(line);
                descend(level, None, writer, cursor, delimiter.closer(), None);
            }
            LineKind::BlockCloseBare => {
                writer.pop();
                writer.write_line(line);
                return;
            }
            LineKind::Plain => writer.write_line(line),
        }
    }

    // ran out of lines inside an open block
    if closing.is_some() {
        debug!(level, "literal ended before its closing delimiter");
        writer.pop();
    }
}

/// Opens a child frame and recurses. A level-based frame sits one level
/// deeper than the caller; a column frame sits at the exact column an
/// inline array dictates. `lead` is content that trailed an opener on
/// its source line and belongs at the top of the new frame.
fn descend(
    level: usize,
    column: Option<usize>,
    writer: &mut BlockWriter,
    cursor: &mut LineCursor<'_>,
    closing: char,
    lead: Option<&str>,
) {
    if writer.depth() >= MAX_NESTING_DEPTH {
        debug!(depth = writer.depth(), "nesting cap reached, keeping current frame");
        return;
    }

    match column {
        Some(column) => writer.push_column(column),
        None => writer.push_level(level + 1),
    }

    if let Some(lead) = lead {
        writer.write_line(lead);
    }

    reindent(level + 1, writer, cursor, Some(closing));
}
