use std::{collections::HashMap, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use super::index::{Index, build_index};
use crate::{
    Token,
    tracing_macros::{debug, trace},
};

/// A run of `length` equal tokens starting at `start_in_before` in the
/// before sequence and at `start_in_after` in the after sequence.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = startInBefore))]
    pub start_in_before: usize,

    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = startInAfter))]
    pub start_in_after: usize,

    pub length: usize,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl Match {
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    #[must_use]
    pub fn new(start_in_before: usize, start_in_after: usize, length: usize) -> Self {
        Self {
            start_in_before,
            start_in_after,
            length,
        }
    }

    /// The zero-length match marking the end of both sequences.
    #[must_use]
    pub fn sentinel(before_length: usize, after_length: usize) -> Self {
        Self::new(before_length, after_length, 0)
    }

    /// One past the last matched position in the before sequence.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = endInBefore))]
    #[must_use]
    pub fn end_in_before(&self) -> usize { self.start_in_before + self.length }

    /// One past the last matched position in the after sequence.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = endInAfter))]
    #[must_use]
    pub fn end_in_after(&self) -> usize { self.start_in_after + self.length }
}

impl Match {
    #[must_use]
    pub fn before_range(&self) -> Range<usize> { self.start_in_before..self.end_in_before() }

    #[must_use]
    pub fn after_range(&self) -> Range<usize> { self.start_in_after..self.end_in_after() }
}

/// Finds the longest run of equal tokens within `before[before_range]` and
/// `after[after_range]`. When several runs share the maximum length, the one
/// ending first in `before` wins.
///
/// `index` must map the tokens of `before` to their positions in `after`.
///
/// Runs are extended row by row: for each position in `before`, the length
/// of the run ending at each candidate position in `after` is one more than
/// the length ending at the previous positions of both. Only the previous row
/// is kept, so the cost is proportional to the number of candidate positions
/// rather than to the size of the whole table.
#[must_use]
pub fn find_longest_match(
    before: &[Token<'_>],
    after: &[Token<'_>],
    index: &Index<'_>,
    before_range: Range<usize>,
    after_range: Range<usize>,
) -> Option<Match> {
    debug_assert!(before_range.end <= before.len(), "Before range out of bounds");
    debug_assert!(after_range.end <= after.len(), "After range out of bounds");

    let mut best = Match::new(before_range.start, after_range.start, 0);

    // run length ending at an after position, for the previous before position
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    let mut next_run_lengths: HashMap<usize, usize> = HashMap::new();

    for index_in_before in before_range {
        let positions = index.positions(&before[index_in_before]);
        let first_candidate = positions.partition_point(|&position| position < after_range.start);

        for &index_in_after in &positions[first_candidate..] {
            if index_in_after >= after_range.end {
                break;
            }

            let run_length = index_in_after
                .checked_sub(1)
                .and_then(|previous| run_lengths.get(&previous))
                .copied()
                .unwrap_or(0)
                + 1;
            next_run_lengths.insert(index_in_after, run_length);

            if run_length > best.length {
                best = Match::new(
                    index_in_before + 1 - run_length,
                    index_in_after + 1 - run_length,
                    run_length,
                );
            }
        }

        std::mem::swap(&mut run_lengths, &mut next_run_lengths);
        next_run_lengths.clear();
    }

    (best.length > 0).then_some(best)
}

/// Returns the ordered, non-overlapping runs of equal tokens shared by
/// `before` and `after`.
///
/// The longest run of the whole range is picked first, then the ranges on
/// either side of it are searched the same way. The result is deterministic
/// but it's not guaranteed to be a minimal edit script.
#[must_use]
pub fn find_matching_blocks(before: &[Token<'_>], after: &[Token<'_>]) -> Vec<Match> {
    let index = build_index(before, after);
    find_matching_blocks_with_index(before, after, &index)
}

enum Work {
    Search {
        before_range: Range<usize>,
        after_range: Range<usize>,
    },
    Emit(Match),
}

/// Walks the ranges depth-first with an explicit stack so that pathological
/// inputs can't overflow the call stack. A range is replaced by its left
/// remainder, the match itself and its right remainder, in that order.
fn find_matching_blocks_with_index(
    before: &[Token<'_>],
    after: &[Token<'_>],
    index: &Index<'_>,
) -> Vec<Match> {
    let mut blocks = Vec::new();
    let mut stack = vec![Work::Search {
        before_range: 0..before.len(),
        after_range: 0..after.len(),
    }];

    while let Some(work) = stack.pop() {
        let (before_range, after_range) = match work {
            Work::Emit(block) => {
                blocks.push(block);
                continue;
            }
            Work::Search {
                before_range,
                after_range,
            } => (before_range, after_range),
        };

        let Some(block) =
            find_longest_match(before, after, index, before_range.clone(), after_range.clone())
        else {
            continue;
        };

        trace!(?block, "found matching block");

        // pushed in reverse so that the left side is handled first
        let right_before = block.end_in_before()..before_range.end;
        let right_after = block.end_in_after()..after_range.end;
        if !right_before.is_empty() && !right_after.is_empty() {
            stack.push(Work::Search {
                before_range: right_before,
                after_range: right_after,
            });
        }

        stack.push(Work::Emit(block));

        let left_before = before_range.start..block.start_in_before;
        let left_after = after_range.start..block.start_in_after;
        if !left_before.is_empty() && !left_after.is_empty() {
            stack.push(Work::Search {
                before_range: left_before,
                after_range: left_after,
            });
        }
    }

    debug!(count = blocks.len(), "found matching blocks");

    blocks
}
