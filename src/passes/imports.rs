//! Import collapsing and priority reordering.
//!
//! Normalization rewrites each import statement onto one line with
//! single-quoted specifiers and `, `-separated named bindings.
//! Reordering assigns every statement a priority bucket keyed on its
//! module specifier and sorts the run stably, inserting one blank line
//! before the first relative import.

use crate::ast::{Edit, ImportRecord, ParsedFile};
use crate::config::FormatterOptions;
use crate::error::Result;
use crate::passes::Formatter;
use crate::text::Eol;

/// Specifier sorted ahead of everything else.
const PRIMARY_FRAMEWORK: &str = "@angular/core";
/// Scope grouped directly after the primary specifier.
const FRAMEWORK_SCOPE: &str = "@angular";
/// First-party scope, third in priority.
const ORG_SCOPE: &str = "@anglr";
/// Shared-commons scope, fourth in priority.
const COMMON_SCOPE: &str = "@jscrpt";

/// Collapses one import statement to a single line.
///
/// Named bindings become `{A, B, C}` with exactly one space after each
/// comma and none inside the braces; a dangling trailing comma survives
/// the collapse. The head and tail keep single spaces between their
/// tokens; double quotes become single quotes.
#[must_use]
pub fn normalize_import(text: &str) -> String {
    let collapsed = match (text.find('{'), text.rfind('}')) {
        (Some(open), Some(close)) if open < close => {
            let head = collapse_ws(&text[..open]);
            let bindings = &text[open + 1..close];
            let mut names = bindings
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if bindings.trim_end().ends_with(',') {
                names.push(',');
            }
            let tail = collapse_ws(&text[close + 1..]);

            [head, format!("{{{names}}}"), tail]
                .into_iter()
                .filter(|piece| !piece.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        }
        _ => collapse_ws(text),
    };

    collapsed.replace('"', "'")
}

fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Priority bucket for one import; lower sorts earlier.
fn sort_bucket(record: &ImportRecord) -> u8 {
    let specifier = record.module_specifier.as_str();
    let named = record.has_named_bindings;

    if specifier == PRIMARY_FRAMEWORK {
        1
    } else if specifier.starts_with(FRAMEWORK_SCOPE) {
        2
    } else if specifier.starts_with(ORG_SCOPE) {
        3
    } else if specifier.starts_with(COMMON_SCOPE) {
        4
    } else if specifier.starts_with('@') && named {
        5
    } else if !specifier.starts_with('.') && named {
        6
    } else if named {
        // relative specifier with named bindings
        7
    } else {
        // default, namespace, and side-effect imports
        8
    }
}

/// Normalizes every record's text and, when `reorder` is set, sorts the
/// run by priority bucket. The sort is stable, so records inside one
/// bucket keep their original order.
#[must_use]
pub fn normalize_and_reorder_imports(
    records: Vec<ImportRecord>,
    reorder: bool,
) -> Vec<ImportRecord> {
    let mut records = records;

    for record in &mut records {
        record.source_text = normalize_import(&record.source_text);
    }

    if reorder {
        records.sort_by_key(sort_bucket);
    }

    records
}

/// Renders an ordered import run, one statement per line, with a blank
/// line ahead of the first relative import.
#[must_use]
pub fn render_import_run(records: &[ImportRecord], eol: Eol) -> String {
    let first_relative = records
        .iter()
        .position(|record| record.module_specifier.starts_with('.'));

    let mut out = String::new();

    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            out.push_str(eol.as_str());
        }
        if first_relative == Some(index) {
            out.push_str(eol.as_str());
        }
        out.push_str(&record.source_text);
    }

    out
}

/// Pass collapsing the file's imports and, optionally, reordering the
/// whole run.
pub struct ImportsFormatter {
    eol: Eol,
    reorder: bool,
}

impl ImportsFormatter {
    #[must_use]
    pub fn new(eol: Eol, reorder: bool) -> Self {
        Self { eol, reorder }
    }
}

impl Formatter for ImportsFormatter {
    fn enabled(&self, options: &FormatterOptions) -> bool {
        options.import_formatter
    }

    fn format(&self, file: &ParsedFile) -> Result<Vec<Edit>> {
        if !self.reorder {
            // collapse each statement in place, keeping the author's layout
            return Ok(file
                .imports
                .iter()
                .map(|import| Edit {
                    start: import.span.start,
                    end: import.span.end,
                    text: normalize_import(&import.span.text),
                })
                .collect());
        }

        let (Some(start), Some(end)) = (
            file.imports.iter().map(|import| import.span.start).min(),
            file.imports.iter().map(|import| import.span.end).max(),
        ) else {
            return Ok(Vec::new());
        };

        let records: Vec<ImportRecord> = file.imports.iter().map(ImportRecord::from).collect();
        let ordered = normalize_and_reorder_imports(records, true);

        Ok(vec![Edit {
            start,
            end,
            text: render_import_run(&ordered, self.eol),
        }])
    }
}
