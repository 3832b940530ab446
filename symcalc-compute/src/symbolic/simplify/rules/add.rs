//! Simplification rules for expressions involving addition.

use crate::symbolic::{
    simplify::{rules::{do_binary, is_constant}, step::Step},
    step_collector::StepCollector,
};
use symcalc_parser::parser::{ast::Expr, token::op::BinOp};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOp::Add, |lhs, rhs| {
        if is_constant(lhs, 0.0) {
            Some(rhs.clone())
        } else if is_constant(rhs, 0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
}
