//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given; the children are expected to
//! be simplified already.

pub mod add;
pub mod fold;
pub mod multiply;
pub mod negate;
pub mod power;

use crate::symbolic::step_collector::StepCollector;
use super::step::Step;
use symcalc_parser::parser::{
    ast::{Binary, Expr},
    token::op::BinOp,
};
use tracing::trace;

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right-hand-side.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    op: BinOp,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Binary(Binary { lhs, op: target_op, rhs }) if *target_op == op => f(lhs, rhs),
        _ => None,
    }
}

/// Returns true if the expression is the constant `value`.
pub(crate) fn is_constant(expr: &Expr, value: f64) -> bool {
    expr.as_constant() == Some(value)
}

/// Forwards steps to another collector, logging each one along with the node it rewrote.
struct Traced<'a, C: ?Sized> {
    expr: &'a Expr,
    inner: &'a mut C,
}

impl<C> StepCollector<Step> for Traced<'_, C>
where
    C: StepCollector<Step> + ?Sized,
{
    fn push(&mut self, step: Step) {
        trace!(?step, expr = %self.expr, "applied simplification rule");
        self.inner.push(step);
    }
}

/// Applies the first rule that matches.
///
/// Constant folding is tried first; the identities only apply to nodes that could not be folded.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let step_collector = &mut Traced { expr, inner: step_collector };
    fold::fold_constants(expr, step_collector)
        .or_else(|| add::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| negate::all(expr, step_collector))
}
