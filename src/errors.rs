use thiserror::Error;

use crate::Side;

/// Errors raised when a diffing stage is invoked with missing or
/// inconsistent inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HtmlDiffError {
    /// The index was built without the tokens whose positions it records
    #[error("Cannot build an index without the tokens to search for")]
    MissingSearchSet,

    /// The index was built without the tokens to search within
    #[error("Cannot build an index without the tokens to search within")]
    MissingReferenceSet,

    /// One of the two token sequences to compare was absent
    #[error("Cannot calculate operations without the {side} tokens")]
    MissingTokens {
        /// The absent sequence
        side: Side,
    },

    /// An operation's range doesn't fit the token sequence it refers to
    #[error("Operation {index} spans {start}..{end}, which doesn't fit the {length} {side} tokens")]
    OperationOutOfBounds {
        /// Position of the operation in the list
        index: usize,
        /// The sequence the range doesn't fit
        side: Side,
        start: usize,
        end: usize,
        length: usize,
    },

    /// An operation's action isn't one of `equal`, `insert`, `delete` or
    /// `replace`
    #[error("Unknown operation action {action:?}")]
    UnknownAction { action: String },
}
