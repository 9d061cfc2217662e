use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The lexical class of a `Token`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A complete `<...>` run, optionally surrounded by whitespace.
    Tag,

    /// A maximal run of whitespace.
    Whitespace,

    /// A maximal run of ASCII letters, digits, `_`, `#` and `@`.
    Word,

    /// Any other single character.
    Symbol,

    /// Text opened with `<` that never forms a complete tag, e.g. an
    /// unterminated `<a href=` at the end of the input or an empty `<>`.
    Malformed,
}

/// A token is an immutable slice of the HTML it was produced from.
///
/// Tokens are compared (and hashed) by their text alone, so the same tag
/// with its attributes in a different order is a different token.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    text: &'a str,
    kind: TokenKind,
}

/// Classify arbitrary text, for tokens that weren't produced by the
/// tokenizer.
impl<'a> From<&'a str> for Token<'a> {
    fn from(text: &'a str) -> Self {
        let kind = if is_tag(text) {
            TokenKind::Tag
        } else if !text.is_empty() && text.chars().all(is_whitespace) {
            TokenKind::Whitespace
        } else if !text.is_empty() && text.chars().all(is_word_char) {
            TokenKind::Word
        } else if text.trim_start_matches(is_whitespace).starts_with('<') {
            TokenKind::Malformed
        } else {
            TokenKind::Symbol
        };

        Token { text, kind }
    }
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self { Self::from(text) }

    #[must_use]
    pub fn text(&self) -> &'a str { self.text }

    #[must_use]
    pub fn kind(&self) -> TokenKind { self.kind }

    /// Tags are never wrapped in `<ins>`/`<del>` when rendering.
    #[must_use]
    pub fn is_tag(&self) -> bool { self.kind == TokenKind::Tag }

    #[must_use]
    pub fn is_whitespace(&self) -> bool { self.kind == TokenKind::Whitespace }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool { self.text == other.text }
}

impl Eq for Token<'_> {}

impl Hash for Token<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.text.hash(state); }
}

/// Whitespace as understood by ECMAScript's `\s`: Unicode `White_Space`
/// without NEL, plus the byte order mark.
pub(crate) fn is_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '#' | '@')
}

/// Matches `^\s*<[^>]+>\s*$`.
fn is_tag(text: &str) -> bool {
    text.trim_matches(is_whitespace)
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .is_some_and(|inner| !inner.is_empty() && !inner.contains('>'))
}
