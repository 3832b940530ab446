pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use ast::expr::Expr;
use error::{Error, kind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use symcalc_error::ErrorKind;
use token::op::BinOp;

/// The default maximum number of nested parentheses and function calls the parser accepts.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parses the given source into an [`Expr`], requiring that the entire source is consumed.
///
/// This is shorthand for `Parser::new(source).try_parse_full::<Expr>()`.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(source).try_parse_full()
}

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// text into an abstract syntax tree.
///
/// Whitespace is removed from the source before tokenizing, so `1 2` is the number `12`. The
/// spans of any errors still point into the original source.
#[derive(Debug, Clone)]
pub struct Parser {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The current nesting depth of parentheses and function calls.
    depth: usize,

    /// The maximum allowed nesting depth.
    max_depth: usize,
}

impl Parser {
    /// Create a new parser for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth of parentheses and function calls. Exceeding the depth is
    /// an error.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Advances past the current token if it matches `predicate`, returning it.
    pub fn next_token_if(&mut self, predicate: impl FnOnce(&Token) -> bool) -> Option<Token> {
        let token = self.current_token().filter(|token| predicate(*token))?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Advances past the current token if it is one of the given binary operators, returning the
    /// operator.
    pub fn next_op(&mut self, ops: &[BinOp]) -> Option<BinOp> {
        let op = self.current_token()
            .and_then(|token| BinOp::from_token(token.kind))
            .filter(|op| ops.contains(op))?;
        self.cursor += 1;
        Some(op)
    }

    /// Advances past the current token if it is of the given kind. Otherwise, returns an error
    /// of the given kind pointing at the current token.
    pub fn expect(&mut self, expected: TokenKind, err: impl ErrorKind + 'static) -> Result<Token, Error> {
        self.next_token_if(|token| token.kind == expected)
            .ok_or_else(|| self.error(err))
    }

    /// Advances past a closing parenthesis that matches the opening parenthesis at `open`.
    pub fn expect_close_paren(&mut self, open: Range<usize>) -> Result<Token, Error> {
        self.next_token_if(|token| token.kind == TokenKind::CloseParen)
            .ok_or_else(|| Error::new(vec![open, self.span()], kind::UnclosedParenthesis))
    }

    /// Runs `f` one nesting level deeper. `span` is the region of the source code that opened the
    /// new level, and is reported if the maximum depth is exceeded.
    pub fn nested<T>(
        &mut self,
        span: Range<usize>,
        f: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.max_depth {
            return Err(Error::new(vec![span], kind::NestingTooDeep { max_depth: self.max_depth }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Parses a chain of binary operations that folds to the left, such as `a+b-c`, starting
    /// from the already parsed `lhs`.
    ///
    /// Every link of the chain makes the resulting tree one level taller, so each link counts as
    /// a nesting level until the chain ends.
    pub fn fold_chain(
        &mut self,
        mut lhs: Expr,
        ops: &[BinOp],
        mut parse_rhs: impl FnMut(&mut Self) -> Result<Expr, Error>,
    ) -> Result<Expr, Error> {
        let depth = self.depth;
        let result = loop {
            let span = self.span();
            let Some(op) = self.next_op(ops) else {
                break Ok(lhs);
            };

            if self.depth >= self.max_depth {
                break Err(Error::new(vec![span], kind::NestingTooDeep { max_depth: self.max_depth }));
            }

            self.depth += 1;
            match parse_rhs(self) {
                Ok(rhs) => lhs = Expr::binary(op, lhs, rhs),
                Err(err) => break Err(err),
            }
        };
        self.depth = depth;
        result
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For unary operations, this means `op op a` is evaluated as `op (op a)` (the operators
    /// appear to the left of the operand).
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of the unary signs (`+` and `-`), and of negative literals.
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of expressions that never need parentheses: non-negative literals, the
    /// variable, and function calls.
    Atom,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::expr::Expr;
    use error::kind::{
        ExpectedEof,
        InvalidNumber,
        LogPart,
        MalformedLog,
        NestingTooDeep,
        UnclosedParenthesis,
        UnexpectedCharacter,
        UnexpectedEof,
    };
    use token::op::{BinOp, UnaryOp};

    fn x() -> Expr {
        Expr::Variable
    }

    fn num(value: f64) -> Expr {
        Expr::Constant(value)
    }

    fn bin(lhs: Expr, op: BinOp, rhs: Expr) -> Expr {
        Expr::binary(op, lhs, rhs)
    }

    fn neg(operand: Expr) -> Expr {
        Expr::unary(UnaryOp::Neg, operand)
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16").unwrap(), num(16.0));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse("3.14").unwrap(), num(3.14));
        assert_eq!(parse(".5").unwrap(), num(0.5));
    }

    #[test]
    fn variable() {
        assert_eq!(parse("x").unwrap(), x());
    }

    #[test]
    fn whitespace_is_stripped() {
        assert_eq!(parse(" 1 2 *\tx ").unwrap(), bin(num(12.0), BinOp::Mul, x()));
    }

    #[test]
    fn precedence() {
        // 1+2*x^3 = 1+(2*(x^3))
        assert_eq!(parse("1+2*x^3").unwrap(), bin(
            num(1.0),
            BinOp::Add,
            bin(num(2.0), BinOp::Mul, bin(x(), BinOp::Exp, num(3.0))),
        ));
    }

    #[test]
    fn left_associative_sub_div() {
        assert_eq!(parse("8-4-2").unwrap(), bin(
            bin(num(8.0), BinOp::Sub, num(4.0)),
            BinOp::Sub,
            num(2.0),
        ));
        assert_eq!(parse("8/4/2").unwrap(), bin(
            bin(num(8.0), BinOp::Div, num(4.0)),
            BinOp::Div,
            num(2.0),
        ));
    }

    #[test]
    fn left_associative_power() {
        assert_eq!(parse("2^3^2").unwrap(), bin(
            bin(num(2.0), BinOp::Exp, num(3.0)),
            BinOp::Exp,
            num(2.0),
        ));
    }

    #[test]
    fn parenthesized() {
        assert_eq!(parse("(1+x)*2").unwrap(), bin(
            bin(num(1.0), BinOp::Add, x()),
            BinOp::Mul,
            num(2.0),
        ));
        assert_eq!(parse("((x))").unwrap(), x());
    }

    #[test]
    fn leading_sign_wraps_term() {
        assert_eq!(parse("-x*2").unwrap(), neg(bin(x(), BinOp::Mul, num(2.0))));
        assert_eq!(parse("-x^2").unwrap(), neg(bin(x(), BinOp::Exp, num(2.0))));
        assert_eq!(
            parse("+x").unwrap(),
            Expr::unary(UnaryOp::Pos, x()),
        );
    }

    #[test]
    fn double_leading_sign() {
        assert_eq!(parse("--x").unwrap(), neg(neg(x())));
        assert_eq!(parse("-+2").unwrap(), neg(Expr::unary(UnaryOp::Pos, num(2.0))));
    }

    #[test]
    fn infix_sign() {
        assert_eq!(parse("1--2").unwrap(), bin(num(1.0), BinOp::Sub, neg(num(2.0))));
        assert_eq!(parse("2*-x").unwrap(), bin(num(2.0), BinOp::Mul, neg(x())));
        assert_eq!(parse("x^-1").unwrap(), bin(x(), BinOp::Exp, neg(num(1.0))));
    }

    #[test]
    fn sign_chain_too_long() {
        let err = parse("---x").unwrap_err();
        assert_eq!(err.downcast_ref::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { found: '-' }));
        assert_eq!(err.spans, vec![2..3]);

        let err = parse("1 - - -2").unwrap_err();
        assert_eq!(err.downcast_ref::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { found: '-' }));
        assert_eq!(err.spans, vec![6..7]);

        assert!(parse("2*--x").unwrap_err().is::<UnexpectedCharacter>());
        assert!(parse("x^--1").unwrap_err().is::<UnexpectedCharacter>());
    }

    #[test]
    fn function_call() {
        assert_eq!(parse("sin(x)*2+1").unwrap(), bin(
            bin(Expr::call("sin", x()), BinOp::Mul, num(2.0)),
            BinOp::Add,
            num(1.0),
        ));
    }

    #[test]
    fn unknown_call_parses() {
        assert_eq!(parse("foo(x)").unwrap(), Expr::call("foo", x()));
    }

    #[test]
    fn log_call() {
        assert_eq!(parse("log(2,8)").unwrap(), Expr::log(2, num(8.0)));
        assert_eq!(
            parse("log(10, x+1)").unwrap(),
            Expr::log(10, bin(x(), BinOp::Add, num(1.0))),
        );
    }

    #[test]
    fn name_without_paren() {
        let err = parse("sin x").unwrap_err();
        assert_eq!(err.downcast_ref::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { found: 's' }));
        assert_eq!(err.spans, vec![0..5]);
    }

    #[test]
    fn unclosed_paren() {
        let err = parse("(1+2").unwrap_err();
        assert!(err.is::<UnclosedParenthesis>());
        assert_eq!(err.spans, vec![0..1, 4..4]);

        let err = parse("sin(x").unwrap_err();
        assert!(err.is::<UnclosedParenthesis>());
        assert_eq!(err.spans, vec![3..4, 5..5]);
    }

    #[test]
    fn malformed_log() {
        let missing = |src: &str| parse(src).unwrap_err().downcast_ref::<MalformedLog>().map(|err| err.missing);
        assert_eq!(missing("log(x,2)"), Some(LogPart::Base));
        assert_eq!(missing("log(2.5,2)"), Some(LogPart::Base));
        assert_eq!(missing("log(2 x)"), Some(LogPart::Comma));
        assert_eq!(missing("log(2,x"), Some(LogPart::CloseParen));
    }

    #[test]
    fn unexpected_eof() {
        let err = parse("1+").unwrap_err();
        assert!(err.is::<UnexpectedEof>());
        assert_eq!(err.spans, vec![2..2]);

        assert!(parse("").unwrap_err().is::<UnexpectedEof>());
        assert!(parse("   ").unwrap_err().is::<UnexpectedEof>());
    }

    #[test]
    fn expected_eof() {
        let err = parse("1+2)").unwrap_err();
        assert!(err.is::<ExpectedEof>());
        assert_eq!(err.spans, vec![3..4]);

        assert!(parse("2x").unwrap_err().is::<ExpectedEof>());
    }

    #[test]
    fn unexpected_character() {
        let err = parse("1 + $").unwrap_err();
        assert_eq!(err.downcast_ref::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { found: '$' }));
        assert_eq!(err.spans, vec![4..5]);

        assert!(parse("y").unwrap_err().is::<UnexpectedCharacter>());
        assert!(parse("*2").unwrap_err().is::<UnexpectedCharacter>());
    }

    #[test]
    fn invalid_number() {
        let err = parse("1.2.3+x").unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidNumber>(), Some(&InvalidNumber { lexeme: "1.2.3".to_string() }));
        assert_eq!(err.spans, vec![0..5]);
    }

    #[test]
    fn literal_out_of_range() {
        let source = "9".repeat(400);
        let err = parse(&source).unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidNumber>(), Some(&InvalidNumber { lexeme: source.clone() }));
        assert_eq!(err.spans, vec![0..400]);

        assert_eq!(parse(&"9".repeat(300)).unwrap().as_constant().map(f64::is_finite), Some(true));
    }

    #[test]
    fn nesting_limit() {
        let source = format!("{}x{}", "(".repeat(4), ")".repeat(4));
        assert_eq!(Parser::new(&source).with_max_depth(4).try_parse_full::<Expr>().unwrap(), x());

        let err = Parser::new(&source).with_max_depth(3).try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.downcast_ref::<NestingTooDeep>(), Some(&NestingTooDeep { max_depth: 3 }));
        assert_eq!(err.spans, vec![3..4]);

        let calls = "sin(sin(sin(x)))";
        assert!(Parser::new(calls).with_max_depth(2).try_parse_full::<Expr>().unwrap_err().is::<NestingTooDeep>());
    }

    #[test]
    fn chain_counts_toward_nesting_limit() {
        // three links
        let source = "x+x*x-x";
        assert!(Parser::new(source).with_max_depth(3).try_parse_full::<Expr>().is_ok());

        let err = Parser::new("x+x+x+x+x").with_max_depth(3).try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.downcast_ref::<NestingTooDeep>(), Some(&NestingTooDeep { max_depth: 3 }));
        assert_eq!(err.spans, vec![7..8]);

        // parentheses and links add up
        assert!(Parser::new("(x+x+x)").with_max_depth(3).try_parse_full::<Expr>().is_ok());
        assert!(Parser::new("(x+x+x)").with_max_depth(2).try_parse_full::<Expr>().unwrap_err().is::<NestingTooDeep>());

        // the depth is restored once a chain ends
        assert!(Parser::new("sin(x+x)+sin(x+x)").with_max_depth(3).try_parse_full::<Expr>().is_ok());
    }

    #[test]
    fn long_flat_chain() {
        for op in ["+", "*", "^"] {
            let source = vec!["x"; 200_000].join(op);
            let err = parse(&source).unwrap_err();
            assert!(err.is::<NestingTooDeep>(), "chain of `{}`", op);
        }

        let source = vec!["x"; DEFAULT_MAX_DEPTH + 1].join("+");
        assert!(parse(&source).is_ok());
        let source = vec!["x"; DEFAULT_MAX_DEPTH + 2].join("+");
        assert!(parse(&source).unwrap_err().is::<NestingTooDeep>());
    }

    #[test]
    fn default_nesting_limit() {
        let source = format!("{}x{}", "(".repeat(DEFAULT_MAX_DEPTH + 1), ")".repeat(DEFAULT_MAX_DEPTH + 1));
        assert!(parse(&source).unwrap_err().is::<NestingTooDeep>());
    }
}
