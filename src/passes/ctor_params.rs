//! Constructor parameter reflow.
//!
//! Rewrites a constructor declaration so that every parameter sits on
//! its own line, aligned directly under the first one just past
//! `constructor(`. The source lines of the original parameter list are
//! discarded and the parser-provided parameter texts are rendered in
//! their place; everything before the opener and the whole body are
//! echoed unchanged.

use tracing::warn;

use crate::ast::{ConstructorSite, Edit, ParsedFile};
use crate::config::FormatterOptions;
use crate::error::Result;
use crate::format::{hanging_block, BlockWriter, INDENT_WIDTH};
use crate::passes::{is_single_line, Formatter};
use crate::text::{Eol, LineCursor};

const OPENER: &str = "constructor(";

/// Pass reflowing constructor parameter lists.
pub struct ConstructorParametersFormatter {
    eol: Eol,
}

impl ConstructorParametersFormatter {
    #[must_use]
    pub fn new(eol: Eol) -> Self {
        Self { eol }
    }

    /// Rebuilds one constructor's text, or `None` when the declaration
    /// is already in a shape this pass leaves alone.
    fn reflow_constructor(&self, site: &ConstructorSite) -> Option<String> {
        if site.parameters.is_empty() {
            return None;
        }

        if is_single_line(&site.span.text, self.eol) {
            return None;
        }

        let mut writer = BlockWriter::new(self.eol);
        let mut cursor = LineCursor::new(&site.span.text, self.eol);
        let mut balance = 0i32;
        let mut opened = false;

        // echo everything ahead of the opener, then truncate the opener
        // line right after `constructor(`
        for line in cursor.by_ref() {
            if line.contains("constructor()") {
                return None;
            }

            if let Some(at) = line.find(OPENER) {
                balance += paren_balance(line);
                writer.write(&line[..at + OPENER.len()]);
                opened = true;
                break;
            }

            writer.write(line);
            writer.newline();
        }

        if !opened {
            return None;
        }

        // parameters already close on the opener line; nothing to reflow
        if balance <= 0 {
            return None;
        }

        // drop the original parameter lines up to their closer
        let mut closed = false;
        for line in cursor.by_ref() {
            balance += paren_balance(line);

            if balance <= 0 {
                closed = true;
                break;
            }
        }

        if !closed {
            warn!(
                start = site.span.start,
                "constructor parameter list never closes, skipping"
            );
            return None;
        }

        let column = OPENER.len() + site.span.indent_level * INDENT_WIDTH;

        for (index, parameter) in site.parameters.iter().enumerate() {
            writer.write(&hanging_block(parameter.trim(), column, index == 0, self.eol));

            if index < site.parameters.len() - 1 {
                writer.write(",");
                writer.newline();
            }
        }

        writer.write(")");

        // echo the body, last line without a trailing break
        let rest: Vec<&str> = cursor.collect();

        if let Some((last, head)) = rest.split_last() {
            writer.newline();

            for line in head {
                writer.write(line);
                writer.newline();
            }

            writer.write(last);
        }

        Some(writer.finish())
    }
}

impl Formatter for ConstructorParametersFormatter {
    fn enabled(&self, options: &FormatterOptions) -> bool {
        options.constructor_parameter_formatter
    }

    fn format(&self, file: &ParsedFile) -> Result<Vec<Edit>> {
        Ok(file
            .constructors
            .iter()
            .filter_map(|site| {
                self.reflow_constructor(site).map(|text| Edit {
                    start: site.span.start,
                    end: site.span.end,
                    text,
                })
            })
            .collect())
    }
}

fn paren_balance(line: &str) -> i32 {
    let mut balance = 0;

    for ch in line.chars() {
        match ch {
            '(' => balance += 1,
            ')' => balance -= 1,
            _ => {}
        }
    }

    balance
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ast::SourceSpan;

    use super::*;

    fn constructor_site(text: &str, level: usize, parameters: &[&str]) -> ConstructorSite {
        ConstructorSite {
            span: SourceSpan::new(0, text.len(), text, level),
            parameters: parameters.iter().map(ToString::to_string).collect(),
        }
    }

    fn reflow(site: &ConstructorSite) -> Option<String> {
        ConstructorParametersFormatter::new(Eol::Lf).reflow_constructor(site)
    }

    #[test]
    fn test_parameters_align_under_the_opener() {
        let text = "constructor(private service: Service,\n    private other: Other)\n{\n    this.ready = true;\n}";
        let site = constructor_site(
            text,
            1,
            &["private service: Service", "private other: Other"],
        );

        assert_eq!(
            reflow(&site).unwrap(),
            "constructor(private service: Service,\n                private other: Other)\n{\n    this.ready = true;\n}"
        );
    }

    #[test]
    fn test_top_level_constructor_column() {
        let text = "constructor(a: A,\n  b: B)\n{\n}";
        let site = constructor_site(text, 0, &["a: A", "b: B"]);

        assert_eq!(
            reflow(&site).unwrap(),
            "constructor(a: A,\n            b: B)\n{\n}"
        );
    }

    #[test]
    fn test_multi_line_parameter_keeps_relative_shape() {
        let text = "constructor(@Inject(TOKEN)\n    config: Config,\n    other: Other)\n{\n}";
        let site = constructor_site(text, 0, &["@Inject(TOKEN)\n    config: Config", "other: Other"]);

        assert_eq!(
            reflow(&site).unwrap(),
            "constructor(@Inject(TOKEN)\n                config: Config,\n            other: Other)\n{\n}"
        );
    }

    #[test]
    fn test_body_is_echoed_verbatim() {
        let text = "constructor(a: A,\n    b: B)\n{\n    this.x = new Map();\n\n    this.y = a;\n}";
        let site = constructor_site(text, 0, &["a: A", "b: B"]);

        let reflowed = reflow(&site).unwrap();
        assert!(reflowed.ends_with("{\n    this.x = new Map();\n\n    this.y = a;\n}"));
    }

    #[test]
    fn test_parameterless_constructor_is_skipped() {
        let text = "constructor()\n{\n    this.init();\n}";
        assert_eq!(reflow(&constructor_site(text, 0, &[])), None);
    }

    #[test]
    fn test_single_line_constructor_is_skipped() {
        let text = "constructor(a: A) { this.a = a; }";
        assert_eq!(reflow(&constructor_site(text, 0, &["a: A"])), None);
    }

    #[test]
    fn test_parameters_closing_on_opener_line_are_skipped() {
        let text = "constructor(a: A, b: B)\n{\n    this.a = a;\n}";
        assert_eq!(reflow(&constructor_site(text, 0, &["a: A", "b: B"])), None);
    }

    #[test]
    fn test_unclosed_parameter_list_is_skipped() {
        let text = "constructor(a: A,\n    b: B\n";
        assert_eq!(reflow(&constructor_site(text, 0, &["a: A", "b: B"])), None);
    }

    #[test]
    fn test_doc_lines_ahead_of_opener_are_echoed() {
        let text = "// keep me\nconstructor(a: A,\n    b: B)\n{\n}";
        let site = constructor_site(text, 0, &["a: A", "b: B"]);

        assert_eq!(
            reflow(&site).unwrap(),
            "// keep me\nconstructor(a: A,\n            b: B)\n{\n}"
        );
    }

    #[test]
    fn test_pass_emits_edit_spanning_the_declaration() {
        let text = "constructor(a: A,\n    b: B)\n{\n}";
        let mut file = ParsedFile::default();
        file.constructors.push(constructor_site(text, 0, &["a: A", "b: B"]));

        let pass = ConstructorParametersFormatter::new(Eol::Lf);
        let edits = pass.format(&file).unwrap();

        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].start, 0);
        assert_eq!(edits[0].end, text.len());
    }

    #[test]
    fn test_pass_gating() {
        let pass = ConstructorParametersFormatter::new(Eol::Lf);
        assert!(pass.enabled(&FormatterOptions::all_enabled()));
        assert!(!pass.enabled(&FormatterOptions::default()));
    }
}
