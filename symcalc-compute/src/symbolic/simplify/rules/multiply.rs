//! Simplification rules for expressions involving multiplication.

use crate::symbolic::{
    simplify::{rules::{do_binary, is_constant}, step::Step},
    step_collector::StepCollector,
};
use symcalc_parser::parser::{ast::Expr, token::op::BinOp};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOp::Mul, |lhs, rhs| {
        if is_constant(lhs, 0.0) || is_constant(rhs, 0.0) {
            Some(Expr::Constant(0.0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOp::Mul, |lhs, rhs| {
        if is_constant(lhs, 1.0) {
            Some(rhs.clone())
        } else if is_constant(rhs, 1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
}
