//! Symbolic differentiation with respect to `x`.

mod function;

use crate::numerical::error::Error;
use symcalc_parser::parser::{
    ast::{Binary, Expr, Unary},
    token::op::{BinOp, UnaryOp},
};
use tracing::debug;

/// `(f + g)' = f' + g'`
/// `(f - g)' = f' - g'`
fn sum_rule(op: BinOp, f: &Expr, g: &Expr) -> Result<Expr, Error> {
    Ok(Expr::binary(op, derive(f)?, derive(g)?))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(f: &Expr, g: &Expr) -> Result<Expr, Error> {
    Ok(Expr::binary(
        BinOp::Add,
        Expr::binary(BinOp::Mul, derive(f)?, g.clone()),
        Expr::binary(BinOp::Mul, f.clone(), derive(g)?),
    ))
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(f: &Expr, g: &Expr) -> Result<Expr, Error> {
    let numerator = Expr::binary(
        BinOp::Sub,
        Expr::binary(BinOp::Mul, derive(f)?, g.clone()),
        Expr::binary(BinOp::Mul, f.clone(), derive(g)?),
    );
    let denominator = Expr::binary(BinOp::Exp, g.clone(), Expr::Constant(2.0));
    Ok(Expr::binary(BinOp::Div, numerator, denominator))
}

/// `(f ^ g)' = f^g * (g' * ln(f) + g * f' / f)`
///
/// Both the base and the exponent may depend on `x`. When the exponent is a constant, `g'` is
/// zero, but the `ln(f)` term is still present until the result is simplified.
fn power_rule(f: &Expr, g: &Expr) -> Result<Expr, Error> {
    let exponent_term = Expr::binary(BinOp::Mul, derive(g)?, Expr::call("ln", f.clone()));
    let base_term = Expr::binary(
        BinOp::Div,
        Expr::binary(BinOp::Mul, g.clone(), derive(f)?),
        f.clone(),
    );
    Ok(Expr::binary(
        BinOp::Mul,
        Expr::binary(BinOp::Exp, f.clone(), g.clone()),
        Expr::binary(BinOp::Add, exponent_term, base_term),
    ))
}

/// Differentiates a node, recursing into its children.
fn derive(expr: &Expr) -> Result<Expr, Error> {
    match expr {
        Expr::Constant(_) => Ok(Expr::Constant(0.0)),
        Expr::Variable => Ok(Expr::Constant(1.0)),
        Expr::Unary(Unary { op: UnaryOp::Neg, operand }) => {
            Ok(Expr::unary(UnaryOp::Neg, derive(operand)?))
        },
        Expr::Unary(Unary { op: UnaryOp::Pos, operand }) => derive(operand),
        Expr::Binary(Binary { lhs, op, rhs }) => match op {
            BinOp::Add | BinOp::Sub => sum_rule(*op, lhs, rhs),
            BinOp::Mul => product_rule(lhs, rhs),
            BinOp::Div => quotient_rule(lhs, rhs),
            BinOp::Exp => power_rule(lhs, rhs),
        },
        Expr::Call(call) => function::call_derivative(call),
    }
}

/// Computes the derivative of the given expression with respect to `x`.
///
/// The result is not simplified. Returns [`Err`] if the expression calls a function that is not
/// supported, or a `log` without a base.
pub fn derivative(expr: &Expr) -> Result<Expr, Error> {
    debug!(%expr, "computing derivative");
    derive(expr)
}
