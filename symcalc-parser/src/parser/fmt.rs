use std::fmt::{Display, Formatter, Result};
use super::{ast::expr::Expr, Precedence};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Helper to format an expression as LaTeX, surrounded with `\left(` and `\right)` if `paren` is
/// true.
pub fn fmt_paren(f: &mut Formatter, expr: &Expr, paren: bool) -> Result {
    if paren {
        write!(f, "\\left(")?;
        expr.fmt_latex(f)?;
        write!(f, "\\right)")
    } else {
        expr.fmt_latex(f)
    }
}

/// Helper to format powers.
pub fn fmt_pow(f: &mut Formatter, left: &Expr, right: &Expr) -> Result {
    // the base is drawn without parentheses only if it is atomic
    fmt_paren(f, left, left.precedence() <= Precedence::Exp)?;
    write!(f, "^{{")?;
    right.fmt_latex(f)?;
    write!(f, "}}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parser::{
        parse,
        token::op::{BinOp, UnaryOp},
    };

    /// Parses the source and renders it back to text.
    fn render(source: &str) -> String {
        parse(source).unwrap().to_string()
    }

    #[test]
    fn fmt_display() {
        assert_eq!(render("3 * x + 6"), "3*x+6");
        assert_eq!(render("sin(x) * 2 + 1"), "sin(x)*2+1");
        assert_eq!(render("log(2, x^2)"), "log(2,x^2)");
    }

    #[test]
    fn fmt_display_minimal_parens() {
        assert_eq!(render("(1+2)*x"), "(1+2)*x");
        assert_eq!(render("((x*2))+1"), "x*2+1");
        assert_eq!(render("(1+2)+x"), "1+2+x");
        assert_eq!(render("(1-2)-x"), "(1-2)-x");
        assert_eq!(render("(x/2)/3"), "(x/2)/3");
    }

    #[test]
    fn fmt_display_right_operand() {
        assert_eq!(render("1+(2+x)"), "1+(2+x)");
        assert_eq!(render("2*(x*3)"), "2*(x*3)");
        assert_eq!(render("x-(1-x)"), "x-(1-x)");
        assert_eq!(render("2/(x*3)"), "2/(x*3)");
    }

    #[test]
    fn fmt_display_power() {
        assert_eq!(render("2^3^2"), "(2^3)^2");
        assert_eq!(render("2^(3^2)"), "2^(3^2)");
        assert_eq!(render("(x+1)^2"), "(x+1)^2");
        assert_eq!(render("(-x)^2"), "(-x)^2");
        assert_eq!(render("x^-1"), "x^(-1)");
    }

    #[test]
    fn fmt_display_signs() {
        assert_eq!(render("--x"), "--x");
        assert_eq!(render("1 - -2"), "1--2");
        assert_eq!(render("2*-x"), "2*-x");
        assert_eq!(render("+x"), "+x");
    }

    #[test]
    fn fmt_display_unary_ambiguity() {
        // a sign applied to a sum renders without parentheses
        let expr = Expr::unary(
            UnaryOp::Neg,
            Expr::binary(BinOp::Add, Expr::Variable, Expr::Constant(1.0)),
        );
        assert_eq!(expr.to_string(), "-x+1");
    }

    #[test]
    fn fmt_display_negative_constant() {
        let expr = Expr::binary(BinOp::Exp, Expr::Constant(-3.0), Expr::Constant(2.0));
        assert_eq!(expr.to_string(), "(-3)^2");

        let expr = Expr::binary(BinOp::Mul, Expr::Constant(2.0), Expr::Constant(-0.5));
        assert_eq!(expr.to_string(), "2*-0.5");
    }

    #[test]
    fn fmt_display_reparses() {
        for source in ["(x+1)^2/(x-3)", "2^3^2", "x-(1-x)", "-x^2*3", "log(3,x)/ln(x)",
            "2/(-x*3)", "2/(-x/3)", "(-x*3)/2", "2*(-x*3)", "1+-x*3"] {
            let expr = parse(source).unwrap();
            let rendered = expr.to_string();
            assert_eq!(parse(&rendered).unwrap(), expr, "{} rendered as {}", source, rendered);
        }
    }

    #[test]
    fn fmt_display_signed_product() {
        // a sign applied to a product binds like the product when placed under `/` or `*`
        assert_eq!(render("2/(-x*3)"), "2/(-x*3)");
        assert_eq!(render("2/(-x/3)"), "2/(-x/3)");
        assert_eq!(render("(-x*3)/2"), "(-x*3)/2");
        assert_eq!(render("1+(-x*3)"), "1+-x*3");
        assert_eq!(render("2/-x"), "2/-x");
    }

    #[test]
    fn fmt_latex() {
        let expr = parse("sin(x)^2").unwrap();
        assert_eq!(expr.as_display().to_string(), "\\sin\\left(x\\right)^{2}");
    }

    #[test]
    fn fmt_latex_2() {
        let expr = parse("1/x + 5/x^2 + log(2, x)").unwrap();
        assert_eq!(
            expr.as_display().to_string(),
            "\\frac{1}{x}+\\frac{5}{x^{2}}+\\log_{2}\\left(x\\right)",
        );
    }

    #[test]
    fn fmt_latex_parens() {
        let expr = parse("(x+1)^2 * -(x-1)").unwrap();
        assert_eq!(
            expr.as_display().to_string(),
            "\\left(x+1\\right)^{2} \\cdot \\left(-\\left(x-1\\right)\\right)",
        );

        let expr = parse("foo(x)").unwrap();
        assert_eq!(expr.as_display().to_string(), "\\mathrm{foo}\\left(x\\right)");
    }
}
