use crate::parser::{
    ast::expr::Expr,
    error::Error,
    fmt::{fmt_paren, Latex},
    token::op::UnaryOp,
    Parser,
    Precedence,
};
use std::fmt;

/// A unary sign applied to an operand, such as `-x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The operand of the unary expression.
    pub operand: Box<Expr>,
}

impl Unary {
    /// Parses an operand with `parse_operand`, optionally prefixed with a sign.
    ///
    /// `signs` is the number of sign tokens that may still prefix the operand. If a sign is
    /// consumed here, `parse_operand` is given one fewer. With no signs left, a sign token is left
    /// in the stream for `parse_operand` to reject.
    pub(crate) fn parse_signed(
        input: &mut Parser,
        signs: usize,
        parse_operand: impl FnOnce(&mut Parser, usize) -> Result<Expr, Error>,
    ) -> Result<Expr, Error> {
        if signs > 0 {
            let op = input.current_token().and_then(|token| UnaryOp::from_token(token.kind));
            if let Some(op) = op {
                input.next_token()?;
                let operand = parse_operand(input, signs - 1)?;
                return Ok(Expr::unary(op, operand));
            }
        }

        parse_operand(input, signs)
    }
}

impl fmt::Display for Unary {
    // the operand is never parenthesized, so `-(x+1)` renders as `-x+1`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.op, self.operand)
    }
}

impl Latex for Unary {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.op)?;
        fmt_paren(f, &self.operand, self.operand.precedence() < Precedence::Neg)
    }
}
