//! Statement-level call argument alignment.
//!
//! Rewrites calls that sit directly inside variable, return, and
//! expression statements: block-literal arguments are reflowed and the
//! argument list is aligned so continuation lines sit exactly under
//! the first argument's on-screen column. That column is recovered
//! from the statement text ahead of the call, not from the call span
//! alone, because the call usually starts mid-line.

use tracing::warn;

use crate::ast::{CallSite, Edit, ParsedFile};
use crate::config::FormatterOptions;
use crate::error::Result;
use crate::format::{align_arguments, INDENT_WIDTH};
use crate::passes::{argument_window, is_single_line, reformatted_arguments, Formatter};
use crate::text::Eol;

/// Pass aligning the argument lists of statement-level calls.
pub struct CallArgumentsFormatter {
    eol: Eol,
}

impl CallArgumentsFormatter {
    #[must_use]
    pub fn new(eol: Eol) -> Self {
        Self { eol }
    }

    fn align_call(&self, site: &CallSite) -> Option<Edit> {
        if site.arguments.is_empty() {
            return None;
        }

        let Some(window) = argument_window(site) else {
            warn!(
                start = site.span.start,
                "call span does not contain its argument offsets, skipping"
            );
            return None;
        };

        // arguments already fit on one line
        if is_single_line(window.region, self.eol) {
            return None;
        }

        let arguments = reformatted_arguments(site, self.eol);
        let level = site.span.indent_level;

        // the first argument's on-screen column is the statement's
        // indentation plus the statement text ahead of it
        let prefix_line_len = last_line_len(site.statement_prefix.trim_end());
        let base_column = (level * INDENT_WIDTH + prefix_line_len)
            .saturating_sub(window.prefix.chars().count());

        let text = align_arguments(
            &window.prefix,
            &arguments,
            base_column,
            level * INDENT_WIDTH,
            self.eol,
        );

        Some(Edit {
            start: site.span.start,
            end: site.span.end,
            text,
        })
    }
}

impl Formatter for CallArgumentsFormatter {
    fn enabled(&self, options: &FormatterOptions) -> bool {
        options.call_expression_arguments_formatter
    }

    fn format(&self, file: &ParsedFile) -> Result<Vec<Edit>> {
        Ok(file
            .calls
            .iter()
            .filter_map(|site| self.align_call(site))
            .collect())
    }
}

// character count, not byte length, since the result is a screen column
fn last_line_len(text: &str) -> usize {
    text.rsplit('\n').next().unwrap_or("").chars().count()
}
