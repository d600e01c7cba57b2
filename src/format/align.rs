//! Column alignment of call and annotation argument lists.

use crate::format::writer::hanging_block;
use crate::text::Eol;

/// Rebuilds a call's full text so its arguments align to a fixed column.
///
/// `prefix` is the text up to and including the opening parenthesis.
/// With more than one argument, continuation lines land at the prefix's
/// character count plus `base_column`, directly under the first
/// argument. A lone argument instead becomes a hanging block at
/// `indent_column`, the call's own indentation, with the closing
/// parenthesis appended straight after its last line.
///
/// Callers skip alignment for zero arguments and single-line spans;
/// an empty slice degrades to `prefix` plus the closing parenthesis.
#[must_use]
pub fn align_arguments(
    prefix: &str,
    arguments: &[String],
    base_column: usize,
    indent_column: usize,
    eol: Eol,
) -> String {
    let prefix = normalize_prefix(prefix);
    let mut out = String::new();

    if arguments.len() > 1 {
        out.push_str(&prefix);
        // columns are visual positions, so measure characters not bytes
        let column = prefix.chars().count() + base_column;

        for (index, argument) in arguments.iter().enumerate() {
            out.push_str(&hanging_block(argument.trim(), column, index == 0, eol));

            if index < arguments.len() - 1 {
                out.push(',');
                out.push_str(eol.as_str());
            }
        }
    } else if let Some(argument) = arguments.first() {
        out.push_str(&prefix);
        out.push_str(eol.as_str());
        out.push_str(&hanging_block(argument.trim(), indent_column, false, eol));
    } else {
        out.push_str(&prefix);
    }

    out.push(')');
    out
}

/// Drops a trailing closing parenthesis and squeezes the whitespace
/// after the first opening parenthesis, so the prefix ends cleanly at
/// the call's `(`.
fn normalize_prefix(prefix: &str) -> String {
    let head = prefix.trim_end();
    let head = head.strip_suffix(')').unwrap_or(head);

    match head.find('(') {
        Some(at) => {
            let (before, after) = head.split_at(at + 1);
            format!("{before}{}", after.trim_start())
        }
        None => head.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(texts: &[&str]) -> Vec<String> {
        texts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_multi_argument_alignment_column() {
        let out = align_arguments(
            "this.helper.process(",
            &args(&["first", "second", "third"]),
            0,
            0,
            Eol::Lf,
        );
        assert_eq!(
            out,
            "this.helper.process(first,\n                    second,\n                    third)"
        );
    }

    #[test]
    fn test_base_column_shifts_continuations() {
        let out = align_arguments("call(", &args(&["a", "b"]), 4, 0, Eol::Lf);
        // column = len("call(") + 4 = 9
        assert_eq!(out, "call(a,\n         b)");
    }

    #[test]
    fn test_column_counts_characters_not_bytes() {
        // "méthode(" is 8 characters but 9 bytes
        let out = align_arguments("méthode(", &args(&["a", "b"]), 0, 0, Eol::Lf);
        assert_eq!(out, "méthode(a,\n        b)");
    }

    #[test]
    fn test_multi_line_argument_keeps_relative_shape() {
        let out = align_arguments(
            "run(",
            &args(&["first", "{\n    a: 1\n}"]),
            0,
            0,
            Eol::Lf,
        );
        assert_eq!(out, "run(first,\n    {\n        a: 1\n    })");
    }

    #[test]
    fn test_lone_argument_hangs_at_call_indentation() {
        let out = align_arguments("foo(", &args(&["{\n    a: 1\n}"]), 0, 0, Eol::Lf);
        assert_eq!(out, "foo(\n{\n    a: 1\n})");
    }

    #[test]
    fn test_lone_argument_indent_column() {
        let out = align_arguments("this.init(", &args(&["{\n    a: 1\n}"]), 0, 4, Eol::Lf);
        assert_eq!(out, "this.init(\n    {\n        a: 1\n    })");
    }

    #[test]
    fn test_prefix_whitespace_after_paren_is_squeezed() {
        let out = align_arguments("call(   ", &args(&["a", "b"]), 0, 0, Eol::Lf);
        assert_eq!(out, "call(a,\n     b)");
    }

    #[test]
    fn test_trailing_close_paren_is_stripped_from_prefix() {
        let out = align_arguments("call()", &args(&["a", "b"]), 0, 0, Eol::Lf);
        assert_eq!(out, "call(a,\n     b)");
    }

    #[test]
    fn test_no_arguments_degrades_to_bare_call() {
        assert_eq!(align_arguments("noop(", &[], 0, 0, Eol::Lf), "noop()");
    }

    #[test]
    fn test_crlf_alignment() {
        let out = align_arguments("call(", &args(&["a", "b"]), 0, 0, Eol::CrLf);
        assert_eq!(out, "call(a,\r\n     b)");
    }
}
