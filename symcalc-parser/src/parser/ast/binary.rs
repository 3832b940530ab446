use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::Error,
    fmt::{fmt_paren, fmt_pow, Latex},
    token::op::BinOp,
    Parser,
};
use std::fmt;

/// The number of signs that may lead an expression, as in `--x`.
const LEADING_SIGNS: usize = 2;

/// The number of signs that may follow a binary operator, as in `1 - -2`.
const INFIX_SIGNS: usize = 1;

/// A binary operation, such as `x*2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,
}

impl Binary {
    /// Returns true if the left and right operands need to be parenthesized when rendered,
    /// respectively.
    ///
    /// The left operand is parenthesized if it binds more loosely than this operator, or equally
    /// loosely when this operator is not associative. The right operand is parenthesized whenever
    /// it binds no more tightly than this operator.
    pub fn needs_parens(&self) -> (bool, bool) {
        let precedence = self.op.precedence();
        let lhs = self.lhs.precedence();
        let rhs = self.rhs.precedence();
        (
            lhs < precedence || (lhs == precedence && !self.op.is_associative()),
            rhs <= precedence,
        )
    }

    /// Parses a sum of terms.
    ///
    /// ```text
    /// expr := [sign] term (('+'|'-') [sign] term)*
    /// ```
    pub(crate) fn parse_sum(input: &mut Parser) -> Result<Expr, Error> {
        let lhs = Unary::parse_signed(input, LEADING_SIGNS, Self::parse_term)?;
        input.fold_chain(lhs, &[BinOp::Add, BinOp::Sub], |input| {
            Unary::parse_signed(input, INFIX_SIGNS, Self::parse_term)
        })
    }

    /// Parses a product of powers. `signs` is passed through to the first power.
    ///
    /// ```text
    /// term := power (('*'|'/') [sign] power)*
    /// ```
    fn parse_term(input: &mut Parser, signs: usize) -> Result<Expr, Error> {
        let lhs = Self::parse_power(input, signs)?;
        input.fold_chain(lhs, &[BinOp::Mul, BinOp::Div], |input| {
            Unary::parse_signed(input, INFIX_SIGNS, Self::parse_power)
        })
    }

    /// Parses a chain of exponentiations, folding to the left. `signs` is passed through to the
    /// first primary.
    ///
    /// ```text
    /// power := primary ('^' [sign] primary)*
    /// ```
    fn parse_power(input: &mut Parser, signs: usize) -> Result<Expr, Error> {
        let lhs = Expr::parse_primary(input, signs)?;
        input.fold_chain(lhs, &[BinOp::Exp], |input| Expr::parse_primary(input, INFIX_SIGNS))
    }
}

/// Formats the operand, surrounding it with parentheses if `paren` is true.
fn fmt_operand(f: &mut fmt::Formatter, operand: &Expr, paren: bool) -> fmt::Result {
    if paren {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (lhs_paren, rhs_paren) = self.needs_parens();
        fmt_operand(f, &self.lhs, lhs_paren)?;
        write!(f, "{}", self.op)?;
        fmt_operand(f, &self.rhs, rhs_paren)
    }
}

impl Latex for Binary {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op {
            BinOp::Div => {
                write!(f, "\\frac{{")?;
                self.lhs.fmt_latex(f)?;
                write!(f, "}}{{")?;
                self.rhs.fmt_latex(f)?;
                write!(f, "}}")
            },
            BinOp::Exp => fmt_pow(f, &self.lhs, &self.rhs),
            BinOp::Add | BinOp::Sub | BinOp::Mul => {
                let (lhs_paren, rhs_paren) = self.needs_parens();
                fmt_paren(f, &self.lhs, lhs_paren)?;
                match self.op {
                    BinOp::Mul => write!(f, " \\cdot ")?,
                    op => write!(f, "{}", op)?,
                }
                fmt_paren(f, &self.rhs, rhs_paren)
            },
        }
    }
}
