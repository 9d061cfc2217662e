use std::collections::HashMap;

use crate::{HtmlDiffError, Token};

/// Maps every distinct token text of a search sequence to the ascending
/// positions at which it occurs in a reference sequence.
///
/// ## Example
///
/// ```not_rust
/// search:    ["a", " ", "b"]
/// reference: ["b", " ", "a", " "]
/// -> { "a": [2], " ": [1, 3], "b": [0] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Index<'a> {
    positions: HashMap<&'a str, Vec<usize>>,
}

impl<'a> Index<'a> {
    /// Positions of `token` in the reference sequence. Empty if `token` didn't
    /// appear in the search sequence or has no occurrences.
    #[must_use]
    pub fn positions(&self, token: &Token<'_>) -> &[usize] {
        self.positions.get(token.text()).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.positions.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.positions.is_empty() }
}

/// Builds the index of `search_tokens` occurrences within `reference_tokens`.
#[must_use]
pub fn build_index<'a>(search_tokens: &[Token<'a>], reference_tokens: &[Token<'a>]) -> Index<'a> {
    let mut positions: HashMap<&'a str, Vec<usize>> = search_tokens
        .iter()
        .map(|token| (token.text(), Vec::new()))
        .collect();

    for (i, token) in reference_tokens.iter().enumerate() {
        if let Some(occurrences) = positions.get_mut(token.text()) {
            occurrences.push(i);
        }
    }

    Index { positions }
}

/// Builds an `Index` from parts that may be missing, for callers that can't
/// guarantee both sequences are present (e.g. values coming from JavaScript).
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder<'s, 'a> {
    find_these: Option<&'s [Token<'a>]>,
    in_these: Option<&'s [Token<'a>]>,
}

impl<'s, 'a> IndexBuilder<'s, 'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            find_these: None,
            in_these: None,
        }
    }

    /// The tokens whose positions should be recorded.
    #[must_use]
    pub fn find_these(mut self, tokens: &'s [Token<'a>]) -> Self {
        self.find_these = Some(tokens);
        self
    }

    /// The tokens to search within.
    #[must_use]
    pub fn in_these(mut self, tokens: &'s [Token<'a>]) -> Self {
        self.in_these = Some(tokens);
        self
    }

    /// # Errors
    ///
    /// `MissingSearchSet` if `find_these` was never given, otherwise
    /// `MissingReferenceSet` if `in_these` was never given.
    pub fn build(self) -> Result<Index<'a>, HtmlDiffError> {
        let search_tokens = self.find_these.ok_or(HtmlDiffError::MissingSearchSet)?;
        let reference_tokens = self.in_these.ok_or(HtmlDiffError::MissingReferenceSet)?;

        Ok(build_index(search_tokens, reference_tokens))
    }
}
