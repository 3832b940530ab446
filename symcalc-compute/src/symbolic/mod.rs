//! Symbolic manipulation of expressions.
//!
//! Every operation in this module builds a new [`Expr`] and leaves its input untouched.
//!
//! # Derivatives
//!
//! [`derivative()`] applies the differentiation rules mechanically, one node at a time. The result
//! is never simplified, so it is usually much larger than necessary:
//!
//! ```
//! use symcalc_compute::symbolic::derivative;
//! use symcalc_parser::parse;
//!
//! let expr = parse("x*x").unwrap();
//! assert_eq!(derivative(&expr).unwrap().to_string(), "1*x+x*1");
//! ```
//!
//! # Simplification
//!
//! [`simplify()`] rewrites the tree from the leaves up, folding constant subexpressions and
//! applying a small set of algebraic identities, such as `x*1 = x`. Use [`simplify_with_steps`]
//! to also get the list of rewrites that were applied.
//!
//! ```
//! use symcalc_compute::symbolic::{derivative, simplify};
//! use symcalc_parser::parse;
//!
//! let expr = parse("x*x").unwrap();
//! let simplified = simplify(&derivative(&expr).unwrap());
//! assert_eq!(simplified.to_string(), "x+x");
//! ```
//!
//! [`Expr`]: symcalc_parser::parser::ast::Expr

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
