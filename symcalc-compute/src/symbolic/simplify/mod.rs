//! Simplification of expressions.
//!
//! The simplifier works from the leaves of the tree up. Each node's children are simplified
//! first, then the first applicable rule from [`rules`] is applied to the node:
//!
//! 1. If every child is a constant, the node is replaced with its value.
//! 2. Otherwise, the identities `0+a = a`, `a*0 = 0`, `a*1 = a`, `a^0 = 1`, and `a^1 = a` are
//!    tried (in either operand order where it applies).
//! 3. `--a` is replaced with `a`.
//!
//! If no rule applies, the node is rebuilt from its simplified children. A rule only ever
//! produces a constant or one of the (already simplified) children, so simplifying a simplified
//! expression returns it unchanged.

pub mod rules;
pub mod step;

use super::step_collector::StepCollector;
use symcalc_parser::parser::ast::{Binary, Call, Expr, Unary};
use step::Step;
use tracing::debug;

/// Simplifies the children of the node, then the node itself.
fn simplify_node(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let expr = match expr {
        Expr::Constant(_) | Expr::Variable => return expr.clone(),
        Expr::Unary(Unary { op, operand }) => {
            Expr::unary(*op, simplify_node(operand, step_collector))
        },
        Expr::Binary(Binary { lhs, op, rhs }) => Expr::binary(
            *op,
            simplify_node(lhs, step_collector),
            simplify_node(rhs, step_collector),
        ),
        Expr::Call(Call { name, arg, base }) => Expr::Call(Call {
            name: name.clone(),
            arg: Box::new(simplify_node(arg, step_collector)),
            base: *base,
        }),
    };

    rules::all(&expr, step_collector).unwrap_or(expr)
}

/// Simplifies the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, reporting each rewrite to the given step collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    debug!(%expr, "simplifying");
    let simplified = simplify_node(expr, step_collector);
    debug!(%simplified, "simplified");
    simplified
}

/// Simplifies the given expression, returning the steps taken to simplify it.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps);
    (simplified, steps)
}

#[cfg(test)]
mod tests {
    use crate::numerical::eval::evaluate;
    use pretty_assertions::assert_eq;
    use super::*;
    use symcalc_parser::{
        parse,
        parser::token::op::{BinOp, UnaryOp},
    };

    /// Parses, simplifies, and renders the source.
    fn simplified(source: &str) -> String {
        simplify(&parse(source).unwrap()).to_string()
    }

    /// Returns true if both expressions evaluate to the same value (or both fail) at `x`.
    fn same_value(a: &Expr, b: &Expr, x: f64) -> bool {
        match (evaluate(a, x), evaluate(b, x)) {
            (Ok(a), Ok(b)) => (a.is_nan() && b.is_nan()) || (a - b).abs() <= 1e-9 * a.abs().max(1.0),
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }

    #[test]
    fn zero_plus_x_times_one() {
        assert_eq!(simplified("0+x*1"), "x");
    }

    #[test]
    fn identities() {
        assert_eq!(simplified("x+0"), "x");
        assert_eq!(simplified("1*x"), "x");
        assert_eq!(simplified("sin(x)*0"), "0");
        assert_eq!(simplified("0*sin(x)"), "0");
        assert_eq!(simplified("(x+1)^0"), "1");
        assert_eq!(simplified("(x+1)^1"), "x+1");
        assert_eq!(simplified("--x"), "x");
    }

    #[test]
    fn identities_not_applied() {
        // subtraction and division have no identities
        assert_eq!(simplified("x-0"), "x-0");
        assert_eq!(simplified("x/1"), "x/1");
        assert_eq!(simplified("0^x"), "0^x");
        assert_eq!(simplified("-+x"), "-+x");
    }

    #[test]
    fn fold_constants() {
        assert_eq!(simplified("1+2*3"), "7");
        assert_eq!(simplified("x*(2+3)"), "x*5");
        assert_eq!(simplified("ln(1)+x"), "x");
        assert_eq!(simplified("-(2)"), "-2");
        assert_eq!(simplified("2^3^2"), "64");
    }

    #[test]
    fn fold_skips_failures() {
        assert_eq!(simplified("x+1/0"), "x+1/0");
        assert_eq!(simplified("foo(2)"), "foo(2)");
    }

    #[test]
    fn simplifies_derivative() {
        let d = crate::symbolic::derivative(&parse("x^2").unwrap()).unwrap();
        // x^2*(0*ln(x)+(2*1)/x) -> x^2*(2/x)
        assert_eq!(simplify(&d).to_string(), "x^2*(2/x)");
    }

    #[test]
    fn steps() {
        let (expr, steps) = simplify_with_steps(&parse("0+x*1").unwrap());
        assert_eq!(expr, Expr::Variable);
        assert_eq!(steps, vec![Step::MultiplyOne, Step::AddZero]);

        let (_, steps) = simplify_with_steps(&parse("--(1+1)*x^1").unwrap());
        assert_eq!(steps, vec![Step::FoldConstants, Step::FoldConstants, Step::PowerOne]);
    }

    #[test]
    fn double_negation_of_variable_steps() {
        let expr = Expr::unary(UnaryOp::Neg, Expr::unary(UnaryOp::Neg, Expr::Variable));
        let (simplified, steps) = simplify_with_steps(&expr);
        assert_eq!(simplified, Expr::Variable);
        assert_eq!(steps, vec![Step::DoubleNegation]);
    }

    #[test]
    fn input_is_untouched() {
        let expr = Expr::binary(BinOp::Add, Expr::Constant(0.0), Expr::Variable);
        let copy = expr.clone();
        let _ = simplify(&expr);
        assert_eq!(expr, copy);
    }

    #[test]
    fn idempotent() {
        let sources = [
            "0+x*1",
            "(x+0)*(1*x)^1",
            "sin(x*1)^2 + --x",
            "log(2, x+0)/(1+1)",
            "x^2+x+1",
            "1/(x-2)",
        ];

        for source in sources {
            let expr = parse(source).unwrap();
            let once = simplify(&expr);
            let twice = simplify(&once);
            assert_eq!(twice, once, "simplifying {} twice", source);

            let d = crate::symbolic::derivative(&expr).unwrap();
            let d_once = simplify(&d);
            assert_eq!(simplify(&d_once), d_once, "simplifying the derivative of {} twice", source);
        }
    }

    #[test]
    fn preserves_value() {
        let sources = [
            "0+x*1",
            "(x+0)*(1*x)^1",
            "sin(x*1)^2 + --x",
            "log(2, x+0)/(1+1)",
            "(2+3)*x - 4/2",
        ];

        for source in sources {
            let expr = parse(source).unwrap();
            let simplified = simplify(&expr);
            for x in [0.5, 1.0, 2.0, 3.5] {
                assert!(same_value(&expr, &simplified, x), "{} changed value at x={}", source, x);
            }
        }
    }
}
