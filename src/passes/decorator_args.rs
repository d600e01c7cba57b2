//! Decorator argument reflow.
//!
//! Rewrites the call expression inside a class, method, or property
//! decorator: block-literal arguments are reflowed to canonical layout
//! and the argument list is aligned one column past the decorator's
//! sigil. The spans handed over by the parser start after the `@`, so
//! the sigil itself is never rewritten.

use tracing::warn;

use crate::ast::{CallSite, Edit, ParsedFile};
use crate::config::FormatterOptions;
use crate::error::Result;
use crate::format::{align_arguments, INDENT_WIDTH};
use crate::passes::{argument_window, is_single_line, reformatted_arguments, Formatter};
use crate::text::Eol;

/// Pass aligning decorator argument lists.
pub struct DecoratorArgumentsFormatter {
    eol: Eol,
}

impl DecoratorArgumentsFormatter {
    #[must_use]
    pub fn new(eol: Eol) -> Self {
        Self { eol }
    }

    fn reflow_decorator(&self, site: &CallSite) -> Option<Edit> {
        if site.arguments.is_empty() {
            return None;
        }

        // single-line decorators stay as they are
        if is_single_line(&site.span.text, self.eol) {
            return None;
        }

        let Some(window) = argument_window(site) else {
            warn!(
                start = site.span.start,
                "decorator span does not contain its argument offsets, skipping"
            );
            return None;
        };

        let arguments = reformatted_arguments(site, self.eol);
        let level = site.span.indent_level;
        let text = align_arguments(
            &window.prefix,
            &arguments,
            1 + level * INDENT_WIDTH,
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

impl Formatter for DecoratorArgumentsFormatter {
    fn enabled(&self, options: &FormatterOptions) -> bool {
        options.decorator_arguments_formatter
    }

    fn format(&self, file: &ParsedFile) -> Result<Vec<Edit>> {
        Ok(file
            .decorators
            .iter()
            .filter_map(|site| self.reflow_decorator(site))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ast::{ArgumentRecord, SourceSpan};

    use super::*;

    fn decorator_site(text: &str, level: usize, arguments: &[(&str, bool)]) -> CallSite {
        // the argument region runs from the char after '(' to the ')'
        let open = text.find('(').map_or(0, |at| at + 1);
        let close = text.rfind(')').unwrap_or(text.len());
        CallSite {
            span: SourceSpan::new(0, text.len(), text, level),
            arguments_start: Some(open),
            arguments_end: close,
            arguments: arguments
                .iter()
                .map(|(argument, is_block_literal)| ArgumentRecord {
                    text: (*argument).to_string(),
                    is_block_literal: *is_block_literal,
                })
                .collect(),
            statement_prefix: String::new(),
        }
    }

    #[test]
    fn test_lone_object_argument_becomes_hanging_block() {
        let text = "Component({\n    selector: 'app-test',\n    flag: true\n})";
        let site = decorator_site(text, 0, &[("{\n    selector: 'app-test',\n    flag: true\n}", true)]);

        let pass = DecoratorArgumentsFormatter::new(Eol::Lf);
        let edits = pass.format(&ParsedFile {
            decorators: vec![site],
            ..ParsedFile::default()
        })
        .unwrap();

        assert_eq!(edits.len(), 1);
        assert_eq!(
            edits[0].text,
            "Component(\n{\n    selector: 'app-test',\n    flag: true\n})"
        );
    }

    #[test]
    fn test_nested_literal_is_reflowed_inside_decorator() {
        let literal = "{\n    selector: 'app-test',\n    options: {\n        strict: true\n    }\n}";
        let text = format!("Component({literal})");
        let site = decorator_site(&text, 0, &[(literal, true)]);

        let pass = DecoratorArgumentsFormatter::new(Eol::Lf);
        let edits = pass.format(&ParsedFile {
            decorators: vec![site],
            ..ParsedFile::default()
        })
        .unwrap();

        assert_eq!(
            edits[0].text,
            "Component(\n{\n    selector: 'app-test',\n    options:\n    {\n        strict: true\n    }\n})"
        );
    }

    #[test]
    fn test_indented_decorator_hangs_at_its_level() {
        let text = "HostListener({\n    passive: true\n})";
        let site = decorator_site(text, 1, &[("{\n    passive: true\n}", true)]);

        let pass = DecoratorArgumentsFormatter::new(Eol::Lf);
        let edits = pass.format(&ParsedFile {
            decorators: vec![site],
            ..ParsedFile::default()
        })
        .unwrap();

        assert_eq!(
            edits[0].text,
            "HostListener(\n    {\n        passive: true\n    })"
        );
    }

    #[test]
    fn test_multi_argument_decorator_aligns_past_sigil() {
        let text = "HostListener('document:click',\n    ['$event'])";
        let site = decorator_site(text, 0, &[("'document:click'", false), ("['$event']", false)]);

        let pass = DecoratorArgumentsFormatter::new(Eol::Lf);
        let edits = pass.format(&ParsedFile {
            decorators: vec![site],
            ..ParsedFile::default()
        })
        .unwrap();

        // column = len("HostListener(") + 1 for the sigil
        assert_eq!(
            edits[0].text,
            "HostListener('document:click',\n              ['$event'])"
        );
    }

    #[test]
    fn test_single_line_decorator_is_skipped() {
        let text = "Input('name')";
        let site = decorator_site(text, 0, &[("'name'", false)]);

        let pass = DecoratorArgumentsFormatter::new(Eol::Lf);
        assert!(pass
            .format(&ParsedFile {
                decorators: vec![site],
                ..ParsedFile::default()
            })
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_argumentless_decorator_is_skipped() {
        let text = "Injectable(\n)";
        let site = decorator_site(text, 0, &[]);

        let pass = DecoratorArgumentsFormatter::new(Eol::Lf);
        assert!(pass
            .format(&ParsedFile {
                decorators: vec![site],
                ..ParsedFile::default()
            })
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_inconsistent_offsets_are_skipped() {
        let mut site = decorator_site("Component({\n    a: 1\n})", 0, &[("{\n    a: 1\n}", true)]);
        site.arguments_end = 999;

        let pass = DecoratorArgumentsFormatter::new(Eol::Lf);
        assert!(pass
            .format(&ParsedFile {
                decorators: vec![site],
                ..ParsedFile::default()
            })
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_pass_gating() {
        let pass = DecoratorArgumentsFormatter::new(Eol::Lf);
        assert!(pass.enabled(&FormatterOptions::all_enabled()));
        assert!(!pass.enabled(&FormatterOptions::default()));
    }
}
