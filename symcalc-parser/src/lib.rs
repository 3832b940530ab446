//! Tokenizer, parser, and node model for single-variable algebraic expressions, such as
//! `sin(x)*2 + log(2, x^2)`.
//!
//! Use [`parse`] to parse a full expression, or [`parser::Parser`] for more control over the
//! parsing process.

pub mod parser;
pub mod tokenizer;

pub use parser::parse;
