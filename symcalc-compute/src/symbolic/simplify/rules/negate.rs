//! Simplification rules for unary signs.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use symcalc_parser::parser::{ast::{Expr, Unary}, token::op::UnaryOp};

/// `--a = a`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Unary(Unary { op: UnaryOp::Neg, operand }) = expr else {
        return None;
    };
    let Expr::Unary(Unary { op: UnaryOp::Neg, operand: inner }) = &**operand else {
        return None;
    };

    step_collector.push(Step::DoubleNegation);
    Some((**inner).clone())
}

/// Applies all sign rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    double_negation(expr, step_collector)
}
