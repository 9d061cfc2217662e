use std::{fmt::Display, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    HtmlDiffError, Side, Token,
    operations::operation::{Action, Operation},
    utils::string_builder::StringBuilder,
};

/// The element used to highlight changed text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Insert,
    Delete,
}

impl Marker {
    #[must_use]
    pub fn element_name(self) -> &'static str {
        match self {
            Marker::Insert => "ins",
            Marker::Delete => "del",
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.element_name())
    }
}

/// Wraps each maximal run of non-tag tokens in a `marker` element and leaves
/// runs of tags as they are, so the markers never cut across the document's
/// own tags.
///
/// A run that consists only of tags gets no marker at all.
///
/// ## Example
///
/// ```not_rust
/// Insert, ["<p>", "new", " ", "text", "</p>"] -> "<p><ins>new text</ins></p>"
/// ```
#[must_use]
pub fn wrap(marker: Marker, tokens: &[Token<'_>]) -> String {
    let mut builder = StringBuilder::default();
    wrap_into(&mut builder, marker, tokens);
    builder.take()
}

fn wrap_into(builder: &mut StringBuilder, marker: Marker, tokens: &[Token<'_>]) {
    for run in tokens.chunk_by(|left, right| left.is_tag() == right.is_tag()) {
        if run[0].is_tag() {
            builder.retain(run);
        } else {
            builder.wrap(marker, run);
        }
    }
}

/// Renders `operations` calculated for `before` and `after` into a single
/// HTML string. Equal runs are copied from `before`, deletions are wrapped in
/// `<del>` and insertions in `<ins>`. A replacement renders its deletion
/// first.
#[must_use]
pub fn render_operations(
    before: &[Token<'_>],
    after: &[Token<'_>],
    operations: &[Operation],
) -> String {
    let capacity = before.iter().chain(after).map(|token| token.text().len()).sum();
    let mut builder = StringBuilder::with_capacity(capacity);

    for operation in operations {
        let deleted = &before[operation.before.clone()];
        let inserted = &after[operation.after.clone()];

        match operation.action {
            Action::Equal => builder.retain(deleted),
            Action::Insert => wrap_into(&mut builder, Marker::Insert, inserted),
            Action::Delete => wrap_into(&mut builder, Marker::Delete, deleted),
            Action::Replace => {
                wrap_into(&mut builder, Marker::Delete, deleted);
                wrap_into(&mut builder, Marker::Insert, inserted);
            }
        }
    }

    builder.take()
}

/// Like `render_operations` but for operations that might not have been
/// calculated for `before` and `after`.
///
/// # Errors
///
/// `OperationOutOfBounds` for the first operation whose range is reversed
/// or reaches past the end of its token sequence.
pub fn try_render_operations(
    before: &[Token<'_>],
    after: &[Token<'_>],
    operations: &[Operation],
) -> Result<String, HtmlDiffError> {
    for (index, operation) in operations.iter().enumerate() {
        check_bounds(index, Side::Before, &operation.before, before.len())?;
        check_bounds(index, Side::After, &operation.after, after.len())?;
    }

    Ok(render_operations(before, after, operations))
}

fn check_bounds(
    index: usize,
    side: Side,
    range: &Range<usize>,
    length: usize,
) -> Result<(), HtmlDiffError> {
    if range.start <= range.end && range.end <= length {
        Ok(())
    } else {
        Err(HtmlDiffError::OperationOutOfBounds {
            index,
            side,
            start: range.start,
            end: range.end,
            length,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{calculate_operations, tokenize};

    #[test_case(Marker::Insert, "", ""; "nothing")]
    #[test_case(Marker::Insert, "new text", "<ins>new text</ins>"; "text only")]
    #[test_case(Marker::Delete, "<p>old</p>", "<p><del>old</del></p>"; "text inside tags")]
    #[test_case(Marker::Insert, "<br><hr>", "<br><hr>"; "tags only")]
    #[test_case(Marker::Delete, "a<b>c</b> d", "<del>a</del><b><del>c</del></b><del> d</del>"; "alternating")]
    #[test_case(Marker::Insert, "x <img src=", "<ins>x <img src=</ins>"; "unterminated tag is wrapped")]
    fn test_wrap(marker: Marker, html: &str, expected: &str) {
        assert_eq!(wrap(marker, &tokenize(html)), expected);
    }

    #[test]
    fn test_marker_names() {
        assert_eq!(Marker::Insert.to_string(), "ins");
        assert_eq!(Marker::Delete.to_string(), "del");
    }

    #[test]
    fn test_render_operations() {
        let before = tokenize("<p>hello world</p>");
        let after = tokenize("<p>hello there world</p>");
        let operations = calculate_operations(&before, &after);

        assert_eq!(
            render_operations(&before, &after, &operations),
            "<p>hello <ins>there </ins>world</p>"
        );
    }

    #[test]
    fn test_replace_renders_deletion_first() {
        let before = tokenize("<p>abc</p>");
        let after = tokenize("<p>xyz</p>");
        let operations = vec![
            Operation::new(Action::Equal, 0..1, 0..1),
            Operation::new(Action::Replace, 1..2, 1..2),
            Operation::new(Action::Equal, 2..3, 2..3),
        ];

        assert_eq!(
            render_operations(&before, &after, &operations),
            "<p><del>abc</del><ins>xyz</ins></p>"
        );
    }

    #[test]
    fn test_no_operations() {
        assert_eq!(render_operations(&[], &[], &[]), "");
    }

    #[test]
    fn test_try_render_operations() {
        let before = tokenize("<p>hello world</p>");
        let after = tokenize("<p>hello there world</p>");
        let operations = calculate_operations(&before, &after);

        assert_eq!(
            try_render_operations(&before, &after, &operations),
            Ok(render_operations(&before, &after, &operations))
        );
    }

    #[test]
    fn test_operations_of_other_tokens_are_rejected() {
        // calculated for seven tokens on each side, rendered against three
        let operations = calculate_operations(&tokenize("<p>a b c</p>"), &tokenize("<p>a x c</p>"));
        let before = tokenize("<p>a</p>");
        let after = tokenize("<p>b</p>");

        assert_eq!(
            try_render_operations(&before, &after, &operations),
            Err(HtmlDiffError::OperationOutOfBounds {
                index: 1,
                side: Side::Before,
                start: 3,
                end: 4,
                length: 3,
            })
        );
    }

    #[test_case(vec![Operation::new(Action::Insert, 0..0, 0..4)], Side::After; "past the end of after")]
    #[test_case(vec![Operation::new(Action::Delete, 2..9, 0..0)], Side::Before; "past the end of before")]
    #[test_case(vec![Operation { action: Action::Replace, before: Range { start: 2, end: 1 }, after: 0..1 }], Side::Before; "reversed range")]
    fn test_out_of_bounds_side(operations: Vec<Operation>, expected: Side) {
        let before = tokenize("<p>a</p>");
        let after = tokenize("<p>b</p>");

        let side = match try_render_operations(&before, &after, &operations) {
            Err(HtmlDiffError::OperationOutOfBounds { side, .. }) => Some(side),
            _ => None,
        };
        assert_eq!(side, Some(expected));
    }
}
