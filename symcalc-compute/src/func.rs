//! The [`Function`] abstraction over anything that can be evaluated and differentiated, and the
//! [`Numbered`] wrapper that gives each function instance a unique identifier.

use crate::{
    numerical::{error::Error, eval::Eval},
    symbolic::{derivative::derivative, simplify::simplify},
};
use std::{fmt, sync::atomic::{AtomicU64, Ordering}};
use symcalc_parser::parser::ast::Expr;

/// A function of `x` that can be evaluated, differentiated, and rendered as text.
pub trait Function: Sized {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f64) -> Result<f64, Error>;

    /// Returns the derivative of the function.
    fn derivative(&self) -> Result<Self, Error>;

    /// Renders the function in its canonical text form.
    fn render(&self) -> String;
}

impl Function for Expr {
    fn evaluate(&self, x: f64) -> Result<f64, Error> {
        self.eval(x)
    }

    fn derivative(&self) -> Result<Self, Error> {
        derivative(self)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// The identifier given to the next [`Numbered`] function. Identifiers start at 1.
///
/// Only uniqueness matters, not the order identifiers are observed in across threads, so relaxed
/// ordering is enough.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A function paired with an identifier that is unique within the process.
///
/// Each call to [`Numbered::new`] takes the next identifier, so identifiers increase in the order
/// the wrappers are created. Two wrappers are equal if their functions render to the same text,
/// regardless of their identifiers.
///
/// ```
/// use symcalc_compute::func::Numbered;
/// use symcalc_parser::parse;
///
/// let a = Numbered::new(parse("x + 1").unwrap());
/// let b = Numbered::new(parse("x+1").unwrap());
/// assert!(b.id() > a.id());
/// assert!(a == b);
/// ```
#[derive(Debug)]
pub struct Numbered<F> {
    id: u64,
    inner: F,
}

impl<F: Function> Numbered<F> {
    /// Wraps the function, assigning it the next identifier.
    pub fn new(inner: F) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            inner,
        }
    }

    /// Returns the identifier of this function.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the wrapped function.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwraps the function, discarding the identifier.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl Numbered<Expr> {
    /// Simplifies the wrapped expression. The result has a new identifier.
    pub fn simplify(&self) -> Self {
        Self::new(simplify(&self.inner))
    }
}

impl<F: Function> Function for Numbered<F> {
    fn evaluate(&self, x: f64) -> Result<f64, Error> {
        self.inner.evaluate(x)
    }

    /// Returns the derivative of the wrapped function, with a new identifier.
    fn derivative(&self) -> Result<Self, Error> {
        self.inner.derivative().map(Self::new)
    }

    fn render(&self) -> String {
        self.inner.render()
    }
}

impl<F: Function> PartialEq for Numbered<F> {
    fn eq(&self, other: &Self) -> bool {
        self.render() == other.render()
    }
}

impl<F: Function> fmt::Display for Numbered<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
