//! Derivatives of the supported functions, with the chain rule applied.

use crate::numerical::{
    builtin::unsupported,
    error::{kind::MissingLogBase, Error},
};
use super::derive;
use symcalc_parser::parser::{
    ast::{Call, Expr},
    token::op::BinOp,
};

/// Computes the derivative of a call to a supported function and applies the chain rule.
pub(super) fn call_derivative(call: &Call) -> Result<Expr, Error> {
    let arg = &*call.arg;
    let outer = match call.name.as_str() {
        // sin(a)' = cos(a)
        "sin" => Expr::call("cos", arg.clone()),
        // cos(a)' = -1 * sin(a)
        "cos" => Expr::binary(BinOp::Mul, Expr::Constant(-1.0), Expr::call("sin", arg.clone())),
        // tan(a)' = 1 + tan(a)^2
        "tan" => Expr::binary(
            BinOp::Add,
            Expr::Constant(1.0),
            Expr::binary(BinOp::Exp, Expr::call("tan", arg.clone()), Expr::Constant(2.0)),
        ),
        // ln(a)' = 1 / a
        "ln" => Expr::binary(BinOp::Div, Expr::Constant(1.0), arg.clone()),
        // log(b, a)' = 1 / (a * ln(b)); the base is a literal and is not differentiated
        "log" => {
            let base = call.base.ok_or_else(|| Error::unspanned(MissingLogBase))?;
            Expr::binary(
                BinOp::Div,
                Expr::Constant(1.0),
                Expr::binary(
                    BinOp::Mul,
                    arg.clone(),
                    Expr::call("ln", Expr::Constant(f64::from(base))),
                ),
            )
        },
        name => return Err(unsupported(name)),
    };

    Ok(Expr::binary(BinOp::Mul, outer, derive(arg)?))
}
