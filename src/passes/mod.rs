//! Formatting passes and the per-file driver.
//!
//! Each pass implements [`Formatter`]: a gate deciding whether it runs
//! under the current [`FormatterOptions`] plus one format operation
//! turning a [`ParsedFile`] into edits. [`FileFormatter`] runs the
//! passes in a fixed order and splices their edits into the source:
//! - [`imports`]: Import collapsing and priority reordering
//! - [`decorator_args`]: Decorator argument reflow
//! - [`ctor_params`]: Constructor parameter reflow
//! - [`call_args`]: Statement-level call argument alignment

use crate::ast::{apply_edits, CallSite, Edit, ParsedFile};
use crate::config::FormatterOptions;
use crate::error::{FormatError, Result};
use crate::format::reformat_literal;
use crate::text::{split_source, Eol};

pub mod call_args;
pub mod ctor_params;
pub mod decorator_args;
pub mod imports;

pub use call_args::CallArgumentsFormatter;
pub use ctor_params::ConstructorParametersFormatter;
pub use decorator_args::DecoratorArgumentsFormatter;
pub use imports::ImportsFormatter;

/// Source file extensions the engine accepts
const SUPPORTED_EXTENSIONS: &[&str] = &["ts"];

/// Rejects inputs outside the supported source-file kind.
pub fn ensure_supported_source(name: &str) -> Result<()> {
    let supported = name
        .rsplit_once('.')
        .is_some_and(|(_, extension)| SUPPORTED_EXTENSIONS.contains(&extension));

    if supported {
        Ok(())
    } else {
        Err(FormatError::UnsupportedKind(name.to_string()))
    }
}

/// One selectable formatting pass.
pub trait Formatter {
    /// Whether this pass runs under `options`.
    fn enabled(&self, options: &FormatterOptions) -> bool;

    /// Edits this pass wants applied to the file. Items the pass cannot
    /// handle are skipped, not errors; a failure here aborts the file.
    fn format(&self, file: &ParsedFile) -> Result<Vec<Edit>>;
}

/// Driver formatting one file: detects the line-break style once and
/// runs every enabled pass over the parsed records.
pub struct FileFormatter {
    eol: Eol,
    options: FormatterOptions,
}

impl FileFormatter {
    #[must_use]
    pub fn new(source: &str, options: FormatterOptions) -> Self {
        Self {
            eol: Eol::detect(source),
            options,
        }
    }

    /// Line-break style detected from the source.
    #[must_use]
    pub fn eol(&self) -> Eol {
        self.eol
    }

    fn passes(&self) -> Vec<Box<dyn Formatter>> {
        vec![
            Box::new(ImportsFormatter::new(self.eol, self.options.reorder_imports)),
            Box::new(DecoratorArgumentsFormatter::new(self.eol)),
            Box::new(ConstructorParametersFormatter::new(self.eol)),
            Box::new(CallArgumentsFormatter::new(self.eol)),
        ]
    }

    /// Collects the edits of every enabled pass, in pass order.
    pub fn edits(&self, file: &ParsedFile) -> Result<Vec<Edit>> {
        let mut edits = Vec::new();

        for pass in self.passes() {
            if pass.enabled(&self.options) {
                edits.extend(pass.format(file)?);
            }
        }

        Ok(edits)
    }

    /// Formats `source` in one shot, returning the rewritten text.
    pub fn format_text(&self, source: &str, file: &ParsedFile) -> Result<String> {
        let edits = self.edits(file)?;
        apply_edits(source, edits)
    }
}

/// Prefix and raw argument region of a call, recovered from the span's
/// own text via the recorded argument offsets. `None` when the offsets
/// do not land inside the span.
pub(crate) struct ArgumentWindow<'a> {
    pub prefix: String,
    pub region: &'a str,
}

pub(crate) fn argument_window(site: &CallSite) -> Option<ArgumentWindow<'_>> {
    let arguments_start = site.arguments_start?;
    let rel_start = arguments_start.checked_sub(site.span.start)?;
    let rel_end = site.arguments_end.checked_sub(site.span.start)?;

    let split = split_source(
        &site.span.text,
        0,
        site.span.text.len(),
        Some(rel_start),
        rel_end,
    )?;
    let region = site.span.text.get(rel_start..rel_end)?;

    Some(ArgumentWindow {
        prefix: split.before,
        region,
    })
}

/// Argument texts ready for alignment: block literals reflowed, the
/// rest trimmed.
pub(crate) fn reformatted_arguments(site: &CallSite, eol: Eol) -> Vec<String> {
    site.arguments
        .iter()
        .map(|argument| {
            if argument.is_block_literal {
                reformat_literal(&argument.text, eol)
            } else {
                argument.text.trim().to_string()
            }
        })
        .collect()
}

pub(crate) fn is_single_line(text: &str, eol: Eol) -> bool {
    !text.contains(eol.as_str())
}
