//! Offset-based carving of a source region into before/cut/after parts.

/// Result of carving a region out of a larger text.
///
/// `before` holds the expression head up to the cut window, or the
/// whole expression when no window was requested; `cut` and `after`
/// are present only alongside a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSource {
    pub before: String,
    pub cut: Option<String>,
    pub after: Option<String>,
}

/// Slices the expression at `expr_start..expr_end` out of `text`,
/// optionally carving an interior `cut_start..cut_end` window from it.
///
/// With no cut window the whole expression text is returned alone. All
/// pieces are trimmed of surrounding whitespace. Returns `None` when
/// any offset falls outside `text` or off a UTF-8 boundary, or when
/// the windows are inverted; callers treat that as a span that cannot
/// be carved and skip the edit.
#[must_use]
pub fn split_source(
    text: &str,
    expr_start: usize,
    expr_end: usize,
    cut_start: Option<usize>,
    cut_end: usize,
) -> Option<SplitSource> {
    let Some(cut_start) = cut_start else {
        let expression = text.get(expr_start..expr_end)?;
        return Some(SplitSource {
            before: expression.trim().to_string(),
            cut: None,
            after: None,
        });
    };

    let before = text.get(expr_start..cut_start)?;
    let cut = text.get(cut_start..cut_end)?;
    let after = text.get(cut_end..expr_end)?;
    Some(SplitSource {
        before: before.trim().to_string(),
        cut: Some(cut.trim().to_string()),
        after: Some(after.trim().to_string()),
    })
}
