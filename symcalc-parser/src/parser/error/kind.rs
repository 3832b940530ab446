use ariadne::Fmt;
use std::fmt;
use symcalc_attrs::ErrorKind;
use symcalc_error::EXPR;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of file",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of file",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// A character was found where an operand was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", found),
    labels = ["here"],
    help = format!("expected a number, {}, a parenthesized expression, or a function call such as {}", "x".fg(EXPR), "sin(x)".fg(EXPR)),
)]
pub struct UnexpectedCharacter {
    /// The character that was found.
    pub found: char,
}

/// A parenthesis was opened but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing closing parenthesis",
    labels = ["this parenthesis is never closed", "expected `)` here"],
    help = format!("add a closing parenthesis `{}`", ")".fg(EXPR)),
)]
pub struct UnclosedParenthesis;

/// The part of a `log` call that is missing or malformed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogPart {
    /// The base, which must be a run of digits.
    Base,

    /// The comma separating the base and the argument.
    Comma,

    /// The closing parenthesis.
    CloseParen,
}

impl fmt::Display for LogPart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Comma => write!(f, "comma"),
            Self::CloseParen => write!(f, "closing parenthesis"),
        }
    }
}

/// A `log` call did not follow the `log(base, expr)` form.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("malformed `log` call: missing {}", missing),
    labels = [format!("expected the {} here", missing)],
    help = format!("the logarithm is written as {}, where the base is a whole number", "log(base, expr)".fg(EXPR)),
)]
pub struct MalformedLog {
    /// The part of the call that was missing.
    pub missing: LogPart,
}

/// A run of digits and dots could not be parsed as a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", lexeme),
    labels = ["this literal"],
)]
pub struct InvalidNumber {
    /// The literal that failed to parse.
    pub lexeme: String,
}

/// The expression is nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["this is one level too deep"],
    help = format!("expressions may be nested at most {} levels deep", max_depth),
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub max_depth: usize,
}
