use ariadne::Fmt;
use crate::numerical::{builtin::BUILTINS, eval::DIVISION_EPSILON};
use symcalc_attrs::ErrorKind;
use symcalc_error::EXPR;

/// The divisor of a division was zero, or close enough to zero that the quotient is treated as
/// undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this division"],
    help = format!("the divisor evaluated to {}, which is within {} of zero", self.divisor, DIVISION_EPSILON),
)]
pub struct DivisionByZero {
    /// The value the divisor evaluated to.
    pub divisor: f64,
}

/// A `log` call has no base.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing base for `log`",
    labels = ["this call"],
    help = format!("write the base before the argument: {}", "log(2, x)".fg(EXPR)),
)]
pub struct MissingLogBase;

/// The function cannot be evaluated or differentiated.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function is not supported", self.name),
    labels = ["this function"],
    help = if self.suggestions.is_empty() {
        format!("the supported functions are: {}", BUILTINS.join(", ").fg(EXPR))
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnsupportedFunction {
    /// The name of the function.
    pub name: String,

    /// A list of similarly named supported functions, if any.
    pub suggestions: Vec<String>,
}

/// The range to sample over is empty or not finite.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot sample over the range [{}, {}]", self.start, self.end),
    help = "the start and end of the range must be finite, and the start must not be greater than the end",
)]
pub struct InvalidSampleRange {
    /// The start of the range.
    pub start: f64,

    /// The end of the range.
    pub end: f64,
}

/// Too few sample points were requested.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot take {} samples", self.count),
    help = "at least 2 samples are needed to include both ends of the range",
)]
pub struct TooFewSamples {
    /// The number of samples requested.
    pub count: usize,
}
