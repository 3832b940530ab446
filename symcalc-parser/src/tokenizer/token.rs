use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Whitespace is removed from the source before tokenizing, so there is no whitespace token.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[a-zA-Z]+")]
    Name,

    /// A run of digits and dots. The run is not guaranteed to be a valid number; that is checked
    /// when the literal is parsed.
    #[regex(r"[0-9.]+")]
    Number,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token is a sign that can prefix an operand (`+` or `-`).
    pub fn is_sign(self) -> bool {
        matches!(self, TokenKind::Add | TokenKind::Sub)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The region of the **original** source code that this token originated from, including any
    /// whitespace that was stripped from inside the token.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The lexeme that was parsed into this token, with whitespace removed.
    pub lexeme: String,
}

impl Token {
    /// Returns the first character of the lexeme. Every token has at least one character.
    pub fn first_char(&self) -> char {
        self.lexeme.chars().next().unwrap_or_default()
    }
}
