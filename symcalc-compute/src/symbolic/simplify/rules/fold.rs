//! Constant folding.

use crate::{
    numerical::eval::Eval,
    symbolic::{simplify::step::Step, step_collector::StepCollector},
};
use symcalc_parser::parser::ast::{Binary, Call, Expr, Unary};

/// Returns true if every child of the node is a constant. Leaves have no children to fold, so
/// this is false for them.
fn children_are_constant(expr: &Expr) -> bool {
    match expr {
        Expr::Constant(_) | Expr::Variable => false,
        Expr::Unary(Unary { operand, .. }) => operand.as_constant().is_some(),
        Expr::Binary(Binary { lhs, rhs, .. }) => {
            lhs.as_constant().is_some() && rhs.as_constant().is_some()
        },
        Expr::Call(Call { arg, .. }) => arg.as_constant().is_some(),
    }
}

/// Replaces a node whose children are all constants with its value.
///
/// The value does not depend on `x`, so it is evaluated at `x = 0`. If evaluation fails, such as
/// for `1/0` or a call to an unsupported function, the node is left as is so that the failure is
/// still reported when the simplified expression is evaluated.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !children_are_constant(expr) {
        return None;
    }

    let value = expr.eval(0.0).ok()?;
    step_collector.push(Step::FoldConstants);
    Some(Expr::Constant(value))
}
