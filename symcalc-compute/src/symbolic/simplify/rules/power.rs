//! Simplification rules for powers.

use crate::symbolic::{
    simplify::{rules::{do_binary, is_constant}, step::Step},
    step_collector::StepCollector,
};
use symcalc_parser::parser::{ast::Expr, token::op::BinOp};

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOp::Exp, |_, rhs| {
        is_constant(rhs, 0.0).then_some(Expr::Constant(1.0))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOp::Exp, |lhs, rhs| {
        is_constant(rhs, 1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
}
