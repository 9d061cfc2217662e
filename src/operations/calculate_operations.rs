use super::operation::{Action, Operation};
use crate::{
    HtmlDiffError, Side, Token,
    diffs::matching_blocks::{Match, find_matching_blocks},
    tracing_macros::debug,
};

/// Turns the matching blocks of `before` and `after` into a sequence of
/// operations covering both sequences from start to end without gaps or
/// overlaps.
#[must_use]
pub fn calculate_operations(before: &[Token<'_>], after: &[Token<'_>]) -> Vec<Operation> {
    let mut position_in_before = 0;
    let mut position_in_after = 0;
    let mut operations = Vec::new();

    let blocks = find_matching_blocks(before, after)
        .into_iter()
        .chain(std::iter::once(Match::sentinel(before.len(), after.len())));

    for block in blocks {
        operations.extend(Operation::for_gap(
            position_in_before..block.start_in_before,
            position_in_after..block.start_in_after,
        ));

        if block.length > 0 {
            operations.push(Operation::new(
                Action::Equal,
                block.before_range(),
                block.after_range(),
            ));
        }

        position_in_before = block.end_in_before();
        position_in_after = block.end_in_after();
    }

    debug!(count = operations.len(), "calculated operations");

    let operations = merge_replacements(operations, before);

    debug!(count = operations.len(), "merged replacements");

    operations
}

/// Like `calculate_operations` but for token sequences that might be absent.
///
/// # Errors
///
/// `MissingTokens` naming the first absent sequence.
pub fn try_calculate_operations(
    before: Option<&[Token<'_>]>,
    after: Option<&[Token<'_>]>,
) -> Result<Vec<Operation>, HtmlDiffError> {
    let before = before.ok_or(HtmlDiffError::MissingTokens { side: Side::Before })?;
    let after = after.ok_or(HtmlDiffError::MissingTokens { side: Side::After })?;

    Ok(calculate_operations(before, after))
}

/// Folds a replacement followed by another replacement, or by a lone
/// whitespace token that's equal on both sides, into a single replacement.
/// Otherwise a change of several words would render as one `<del>`/`<ins>`
/// pair per word.
fn merge_replacements(operations: Vec<Operation>, before: &[Token<'_>]) -> Vec<Operation> {
    let mut result: Vec<Operation> = Vec::with_capacity(operations.len());

    for operation in operations {
        match result.last_mut() {
            Some(previous)
                if previous.action == Action::Replace
                    && (operation.action == Action::Replace
                        || operation.is_single_whitespace(before)) =>
            {
                previous.extend(&operation);
            }
            _ => result.push(operation),
        }
    }

    result
}
