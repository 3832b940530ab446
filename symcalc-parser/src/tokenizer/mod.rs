pub mod token;

use logos::{Lexer, Logos};
use std::ops::Range;
pub use token::{Token, TokenKind};

/// Source code with all whitespace removed, along with a map from each byte of the stripped text
/// back to its byte offset in the original source.
#[derive(Debug, Clone, PartialEq)]
pub struct Stripped {
    /// The stripped text.
    pub text: String,

    /// `offsets[i]` is the offset in the original source of byte `i` of [`Stripped::text`].
    offsets: Vec<usize>,
}

impl Stripped {
    /// Removes all whitespace from the given source.
    pub fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut offsets = Vec::with_capacity(source.len());

        for (idx, c) in source.char_indices() {
            if c.is_whitespace() {
                continue;
            }
            text.push(c);
            offsets.extend(idx..idx + c.len_utf8());
        }

        Self { text, offsets }
    }

    /// Maps a span in the stripped text to the corresponding span in the original source.
    ///
    /// The mapped span covers any whitespace that was removed from inside the span.
    pub fn map_span(&self, span: Range<usize>) -> Range<usize> {
        if span.is_empty() {
            let offset = self.offsets
                .get(span.start)
                .copied()
                .unwrap_or_else(|| self.offsets.last().map_or(0, |last| last + 1));
            return offset..offset;
        }

        self.offsets[span.start]..self.offsets[span.end - 1] + 1
    }
}

/// Returns an iterator over the token kinds produced by the tokenizer.
///
/// The input is tokenized as-is; use [`tokenize_complete`] to strip whitespace first.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Strips whitespace from the source, then returns an owned array containing all of the tokens
/// produced by the tokenizer. The spans of the tokens point into the original source.
pub fn tokenize_complete(source: &str) -> Box<[Token]> {
    let stripped = Stripped::new(source);
    let mut lexer = tokenize(&stripped.text);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: stripped.map_span(lexer.span()),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice().to_string(),
        });
    }

    tokens.into_boxed_slice()
}
