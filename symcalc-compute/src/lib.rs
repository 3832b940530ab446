//! Numerical and symbolic computation over expressions parsed by [`symcalc_parser`].
//!
//! - [`numerical`]: evaluating an expression at a value of `x`, and sampling it over a range.
//! - [`symbolic`]: derivatives and simplification, which produce new expressions.
//! - [`func`]: the [`Function`](func::Function) abstraction and the [`Numbered`](func::Numbered)
//!   wrapper that gives each function a process-wide identifier.

pub mod func;
pub mod numerical;
pub mod symbolic;

pub use func::{Function, Numbered};
pub use numerical::{eval::evaluate, sample::sample};
pub use symbolic::{derivative, simplify};
