use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Token;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Equal,
    Insert,
    Delete,
    Replace,
}

/// One edit step over a contiguous range of tokens in each sequence.
///
/// Ranges are half-open. An `Insert` has an empty `before` range positioned
/// where the inserted tokens go, and a `Delete` has an empty `after` range.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub action: Action,
    pub before: Range<usize>,
    pub after: Range<usize>,
}

impl Operation {
    #[must_use]
    pub fn new(action: Action, before: Range<usize>, after: Range<usize>) -> Self {
        debug_assert!(
            action != Action::Insert || before.is_empty(),
            "Insert operations can't span tokens of the before sequence"
        );
        debug_assert!(
            action != Action::Delete || after.is_empty(),
            "Delete operations can't span tokens of the after sequence"
        );

        Self {
            action,
            before,
            after,
        }
    }

    /// Returns the operation needed to get from `before[before]` to
    /// `after[after]` when neither contains equal tokens, or `None` if both
    /// ranges are empty.
    #[must_use]
    pub fn for_gap(before: Range<usize>, after: Range<usize>) -> Option<Self> {
        let action = match (before.is_empty(), after.is_empty()) {
            (true, true) => return None,
            (true, false) => Action::Insert,
            (false, true) => Action::Delete,
            (false, false) => Action::Replace,
        };

        Some(Self::new(action, before, after))
    }

    /// Whether this is an `Equal` over exactly one whitespace token.
    #[must_use]
    pub fn is_single_whitespace(&self, before: &[Token<'_>]) -> bool {
        self.action == Action::Equal
            && self.before.len() == 1
            && before[self.before.start].is_whitespace()
    }

    /// Extends the operation to also cover `other`, which must directly follow
    /// it in both sequences.
    pub fn extend(&mut self, other: &Operation) {
        debug_assert_eq!(
            self.before.end, other.before.start,
            "Only adjacent operations can be joined"
        );
        debug_assert_eq!(
            self.after.end, other.after.start,
            "Only adjacent operations can be joined"
        );

        self.before.end = other.before.end;
        self.after.end = other.after.end;
    }
}
