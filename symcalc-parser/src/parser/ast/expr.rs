use crate::{
    parser::{
        ast::{binary::Binary, call::Call, unary::Unary},
        error::{kind, Error},
        fmt::Latex,
        token::op::{BinOp, UnaryOp},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::fmt;

/// The name of the only variable an expression can refer to.
pub const VARIABLE: &str = "x";

/// An expression in a single variable.
///
/// Expressions are trees that own their children. Nothing mutates an expression after it is
/// built; operations that transform an expression, such as differentiation, build a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, such as `2.5`.
    Constant(f64),

    /// The variable `x`.
    Variable,

    /// A unary sign applied to an operand, such as `-x`.
    Unary(Unary),

    /// A binary operation, such as `x*2`.
    Binary(Binary),

    /// A function call, such as `sin(x)` or `log(2, x)`.
    Call(Call),
}

impl Expr {
    /// Creates a unary expression.
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary(Unary { op, operand: Box::new(operand) })
    }

    /// Creates a binary expression.
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(Binary { lhs: Box::new(lhs), op, rhs: Box::new(rhs) })
    }

    /// Creates a call to the function with the given name.
    pub fn call(name: impl Into<String>, arg: Expr) -> Self {
        Self::Call(Call { name: name.into(), arg: Box::new(arg), base: None })
    }

    /// Creates a call to `log` with the given base.
    pub fn log(base: u32, arg: Expr) -> Self {
        Self::Call(Call { name: "log".to_string(), arg: Box::new(arg), base: Some(base) })
    }

    /// Returns the value of the expression if it is a [`Expr::Constant`].
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the precedence of the expression, used to decide where parentheses are needed
    /// when rendering it.
    pub fn precedence(&self) -> Precedence {
        match self {
            // a negative literal renders with a leading `-`, so it binds like a unary sign
            Self::Constant(value) if value.is_sign_negative() => Precedence::Neg,
            Self::Constant(_) | Self::Variable | Self::Call(_) => Precedence::Atom,
            // the operand is rendered without parentheses, so a sign applied to a looser
            // operand binds only as tightly as that operand
            Self::Unary(unary) => {
                let sign = unary.op.precedence();
                let operand = unary.operand.precedence();
                if operand < sign { operand } else { sign }
            },
            Self::Binary(binary) => binary.op.precedence(),
        }
    }

    /// Parses a primary expression, consuming up to `signs` leading sign tokens.
    ///
    /// ```text
    /// primary := sign primary
    ///          | number | 'x' | '(' expr ')' | name '(' callBody ')'
    /// ```
    pub(crate) fn parse_primary(input: &mut Parser, signs: usize) -> Result<Self, Error> {
        Unary::parse_signed(input, signs, |input, _| Self::parse_atom(input))
    }

    /// Parses a primary expression that does not start with a sign.
    fn parse_atom(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            // literals too large for an `f64` would become infinite and render as `inf`
            TokenKind::Number => token.lexeme
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Self::Constant)
                .ok_or_else(|| Error::new(vec![token.span.clone()], kind::InvalidNumber {
                    lexeme: token.lexeme.clone(),
                })),
            TokenKind::Name if token.lexeme == VARIABLE => Ok(Self::Variable),
            TokenKind::Name => {
                let is_call = input.current_token()
                    .map_or(false, |next| next.kind == TokenKind::OpenParen);
                if is_call {
                    Call::parse_rest(input, token).map(Self::Call)
                } else {
                    Err(Error::new(vec![token.span.clone()], kind::UnexpectedCharacter {
                        found: token.first_char(),
                    }))
                }
            },
            TokenKind::OpenParen => input.nested(token.span.clone(), |input| {
                let inner = Binary::parse_sum(input)?;
                input.expect_close_paren(token.span.clone())?;
                Ok(inner)
            }),
            _ => Err(Error::new(vec![token.span.clone()], kind::UnexpectedCharacter {
                found: token.first_char(),
            })),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        Binary::parse_sum(input)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable => write!(f, "{}", VARIABLE),
            Self::Unary(unary) => unary.fmt(f),
            Self::Binary(binary) => binary.fmt(f),
            Self::Call(call) => call.fmt(f),
        }
    }
}

impl Latex for Expr {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable => write!(f, "{}", VARIABLE),
            Self::Unary(unary) => unary.fmt_latex(f),
            Self::Binary(binary) => binary.fmt_latex(f),
            Self::Call(call) => call.fmt_latex(f),
        }
    }
}
