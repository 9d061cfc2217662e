//! Inline diffing of HTML fragments.
//!
//! [`diff`] compares two versions of a fragment and returns a single HTML
//! string where removed text is wrapped in `<del>` and added text in `<ins>`,
//! while the fragment's own tags are left unwrapped so the markup stays
//! well-formed. Each stage of the pipeline is exposed on its own:
//! [`tokenize`], [`build_index`], [`find_matching_blocks`],
//! [`calculate_operations`] and [`render_operations`].

mod diffs;
mod errors;
mod html_diff;
mod operations;
mod rendering;
mod tokenizer;
mod tracing_macros;
mod utils;

pub use diffs::{
    index::{Index, IndexBuilder, build_index},
    matching_blocks::{Match, find_longest_match, find_matching_blocks},
};
pub use errors::HtmlDiffError;
pub use html_diff::diff;
pub use operations::{
    calculate_operations::{calculate_operations, try_calculate_operations},
    operation::{Action, Operation},
};
pub use rendering::{Marker, render_operations, try_render_operations, wrap};
pub use tokenizer::{
    html_tokenizer::tokenize,
    token::{Token, TokenKind},
};
pub use utils::side::Side;

#[cfg(feature = "wasm")]
pub mod wasm;
