use crate::{Token, rendering::Marker};

/// A helper for building the rendered diff in-order from runs of tokens.
/// The methods must be called in the order the output should appear.
#[derive(Debug, Default)]
pub struct StringBuilder {
    buffer: String,
}

impl StringBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        StringBuilder {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Copy the tokens' text verbatim to the end of the buffer.
    pub fn retain(&mut self, tokens: &[Token<'_>]) {
        self.buffer.extend(tokens.iter().map(Token::text));
    }

    /// Copy the tokens' text to the end of the buffer inside a single
    /// `marker` element. Nothing is written for an empty run.
    pub fn wrap(&mut self, marker: Marker, tokens: &[Token<'_>]) {
        if tokens.is_empty() {
            return;
        }

        let name = marker.element_name();
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.buffer.push('>');
        self.retain(tokens);
        self.buffer.push_str("</");
        self.buffer.push_str(name);
        self.buffer.push('>');
    }

    /// Returns the currently built buffer and clears it to allow consuming
    /// the result incrementally.
    pub fn take(&mut self) -> String { std::mem::take(&mut self.buffer) }
}
