use super::token::{Token, is_whitespace, is_word_char};
use crate::tracing_macros::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexerState {
    Char,
    Tag,
    Whitespace,
}

/// Splits HTML into tags, whitespace runs, word runs and single-character
/// symbols. Joining the returned tokens reproduces `html` exactly.
///
/// Tags are not parsed: the first `>` after a `<` closes the tag, and a `<`
/// that is never closed swallows the rest of the input.
///
/// ## Example
///
/// ```not_rust
/// "<p>Hi, there!</p>" -> ["<p>", "Hi", ",", " ", "there", "!", "</p>"]
/// ```
#[must_use]
pub fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer {
        html,
        tokens: Vec::new(),
        token_start: 0,
        state: LexerState::Char,
    };

    for (i, c) in html.char_indices() {
        lexer.step(i, c);
    }
    lexer.flush(html.len());

    trace!(count = lexer.tokens.len(), "tokenized html");

    lexer.tokens
}

struct Lexer<'a> {
    html: &'a str,
    tokens: Vec<Token<'a>>,

    /// Byte offset where the token currently being accumulated starts.
    token_start: usize,
    state: LexerState,
}

impl<'a> Lexer<'a> {
    fn step(&mut self, i: usize, c: char) {
        match self.state {
            LexerState::Tag => {
                if c == '>' {
                    self.flush(i + c.len_utf8());
                    self.state = LexerState::Char;
                }
            }
            LexerState::Char => {
                if c == '<' {
                    self.flush(i);
                    self.state = LexerState::Tag;
                } else if is_whitespace(c) {
                    self.flush(i);
                    self.state = LexerState::Whitespace;
                } else if !(is_word_char(c) && self.is_accumulating_word(i)) {
                    // symbols never accumulate, and a word can't grow out of one
                    self.flush(i);
                }
            }
            LexerState::Whitespace => {
                if c == '<' {
                    self.flush(i);
                    self.state = LexerState::Tag;
                } else if !is_whitespace(c) {
                    self.flush(i);
                    self.state = LexerState::Char;
                }
            }
        }
    }

    fn is_accumulating_word(&self, i: usize) -> bool {
        self.html[self.token_start..i]
            .chars()
            .next()
            .is_some_and(is_word_char)
    }

    /// Ends the current token at byte offset `end` and starts the next one
    /// there.
    fn flush(&mut self, end: usize) {
        if self.token_start < end {
            self.tokens.push(self.current(end));
        }
        self.token_start = end;
    }

    fn current(&self, end: usize) -> Token<'a> { Token::from(&self.html[self.token_start..end]) }
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::TokenKind;

    fn texts(html: &str) -> Vec<&str> { tokenize(html).iter().map(Token::text).collect() }

    #[test]
    fn test_with_snapshots() {
        assert_debug_snapshot!(texts("<p>Hi, there!</p>"), @r#"
        [
            "<p>",
            "Hi",
            ",",
            " ",
            "there",
            "!",
            "</p>",
        ]
        "#);

        assert_debug_snapshot!(texts("  <a href=\"#top\">top</a>\n\n"), @r##"
        [
            "  ",
            "<a href=\"#top\">",
            "top",
            "</a>",
            "\n\n",
        ]
        "##);
    }

    #[test_case("", &[]; "empty input")]
    #[test_case("hello", &["hello"]; "single word")]
    #[test_case("a.b", &["a", ".", "b"]; "symbol between words")]
    #[test_case("...", &[".", ".", "."]; "symbols never accumulate")]
    #[test_case("(foo)", &["(", "foo", ")"]; "parentheses")]
    #[test_case("#tag @user", &["#tag", " ", "@user"]; "hash and at are word characters")]
    #[test_case("x \t\ny", &["x", " \t\n", "y"]; "whitespace run")]
    #[test_case("a<br>b", &["a", "<br>", "b"]; "tag between words")]
    #[test_case("<b><i>", &["<b>", "<i>"]; "adjacent tags")]
    #[test_case(" <b>", &[" ", "<b>"]; "whitespace then tag")]
    #[test_case("<a title='x<y'>", &["<a title='x<y'>"]; "no nested tags")]
    #[test_case("<a title='x>y'>", &["<a title='x>", "y", "'", ">"]; "first closing bracket ends the tag")]
    #[test_case("café", &["caf", "é"]; "non-ascii letters are symbols")]
    fn test_tokenize(html: &str, expected: &[&str]) { assert_eq!(texts(html), expected); }

    #[test]
    fn test_unterminated_tag_swallows_rest() {
        let tokens = tokenize("text <a href=\"x\">link</a> <img src=");

        assert_eq!(
            tokens.iter().map(Token::text).collect::<Vec<_>>(),
            vec!["text", " ", "<a href=\"x\">", "link", "</a>", " ", "<img src="]
        );
        assert_eq!(tokens.last().map(Token::kind), Some(TokenKind::Malformed));
    }

    #[test]
    fn test_kinds() {
        let kinds = tokenize("<p>a, b</p>")
            .iter()
            .map(Token::kind)
            .collect::<Vec<_>>();

        assert_eq!(
            kinds,
            vec![
                TokenKind::Tag,
                TokenKind::Word,
                TokenKind::Symbol,
                TokenKind::Whitespace,
                TokenKind::Word,
                TokenKind::Tag,
            ]
        );
    }

    #[test_case("<div class=\"a\">\n  <p>Hello,   world!</p>\n</div>")]
    #[test_case("こんにちは <b>世界</b>")]
    #[test_case("<<>>< >")]
    #[test_case("a\u{a0}b\u{feff}c\u{85}d")]
    fn test_tokens_reproduce_input(html: &str) {
        assert_eq!(tokenize(html).iter().map(Token::text).collect::<String>(), html);
    }
}
