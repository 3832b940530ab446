mod binary;
mod call;
mod unary;

use super::error::Error;
use symcalc_parser::parser::ast::Expr;

/// Divisors with an absolute value below this threshold are treated as zero.
pub const DIVISION_EPSILON: f64 = 1e-10;

/// Any type that can be evaluated to produce a number, given the value of `x`.
pub trait Eval {
    /// Evaluate the expression with the variable set to `x`.
    fn eval(&self, x: f64) -> Result<f64, Error>;
}

impl Eval for Expr {
    fn eval(&self, x: f64) -> Result<f64, Error> {
        match self {
            Self::Constant(value) => Ok(*value),
            Self::Variable => Ok(x),
            Self::Unary(unary) => unary.eval(x),
            Self::Binary(binary) => binary.eval(x),
            Self::Call(call) => call.eval(x),
        }
    }
}

/// Evaluates the expression with the variable set to `x`.
pub fn evaluate(expr: &Expr, x: f64) -> Result<f64, Error> {
    expr.eval(x)
}
