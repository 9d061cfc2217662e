use crate::{
    calculate_operations, render_operations, tokenize,
    tracing_macros::debug,
};

/// Compare two versions of an HTML fragment and return `after` annotated
/// with the changes: removed text wrapped in `<del>`, added text wrapped in
/// `<ins>`, and the tags of both versions left intact.
///
/// The inputs are split into tags, words, whitespace and symbols, and the
/// longest common runs of these tokens are kept. Tags are never parsed, so
/// a tag whose attributes changed is simply rendered twice, old one first.
///
/// ```
/// use htmldiff::diff;
///
/// assert_eq!(
///     diff("<p>hello world</p>", "<p>hello there world</p>"),
///     "<p>hello <ins>there </ins>world</p>"
/// );
/// assert_eq!(
///     diff("<p>abc</p>", "<p>xyz</p>"),
///     "<p><del>abc</del><ins>xyz</ins></p>"
/// );
/// ```
#[must_use]
pub fn diff(before: &str, after: &str) -> String {
    if before == after {
        debug!("inputs are identical");
        return before.to_owned();
    }

    let before_tokens = tokenize(before);
    let after_tokens = tokenize(after);

    debug!(
        before = before_tokens.len(),
        after = after_tokens.len(),
        "diffing tokens"
    );

    let operations = calculate_operations(&before_tokens, &after_tokens);

    render_operations(&before_tokens, &after_tokens, &operations)
}
