//! Commands understood by the interactive prompt.

/// A single line of input to the prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line<'a> {
    /// `expr` or `expr @ x`: evaluate the expression, at `x = 0` if no value is given.
    Eval {
        expr: &'a str,
        at: Option<&'a str>,
    },

    /// `d expr`: print the simplified derivative.
    Diff(&'a str),

    /// `s expr`: print the simplified expression.
    Simplify(&'a str),

    /// A blank line.
    Empty,
}

impl<'a> Line<'a> {
    /// Splits a line of input into the command and its operands.
    pub fn parse(input: &'a str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Line::Empty;
        }

        if let Some(expr) = command_operand(input, 'd') {
            return Line::Diff(expr);
        }

        if let Some(expr) = command_operand(input, 's') {
            return Line::Simplify(expr);
        }

        match input.rsplit_once('@') {
            Some((expr, at)) => Line::Eval { expr: expr.trim_end(), at: Some(at.trim_start()) },
            None => Line::Eval { expr: input, at: None },
        }
    }
}

/// Returns the rest of the input if it starts with the command letter followed by whitespace.
fn command_operand(input: &str, command: char) -> Option<&str> {
    let rest = input.strip_prefix(command)?;
    rest.starts_with(char::is_whitespace).then(|| rest.trim_start())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn plain_expression() {
        assert_eq!(Line::parse("x^2 + 1"), Line::Eval { expr: "x^2 + 1", at: None });
        assert_eq!(Line::parse("  sin(x)  "), Line::Eval { expr: "sin(x)", at: None });
    }

    #[test]
    fn expression_at_value() {
        assert_eq!(Line::parse("x^2 @ 3"), Line::Eval { expr: "x^2", at: Some("3") });
        assert_eq!(Line::parse("x@-1/2"), Line::Eval { expr: "x", at: Some("-1/2") });
    }

    #[test]
    fn derivative() {
        assert_eq!(Line::parse("d x*x"), Line::Diff("x*x"));
        assert_eq!(Line::parse("d\tln(x)"), Line::Diff("ln(x)"));
    }

    #[test]
    fn simplify() {
        assert_eq!(Line::parse("s 1*x + 0"), Line::Simplify("1*x + 0"));
    }

    #[test]
    fn command_letter_needs_whitespace() {
        // `sin(x)` starts with `s` but is not the simplify command
        assert_eq!(Line::parse("sin(x)"), Line::Eval { expr: "sin(x)", at: None });
        assert_eq!(Line::parse("d(x)"), Line::Eval { expr: "d(x)", at: None });
    }

    #[test]
    fn empty() {
        assert_eq!(Line::parse(""), Line::Empty);
        assert_eq!(Line::parse("   "), Line::Empty);
    }
}
