pub mod builtin;
pub mod error;
pub mod eval;
pub mod sample;
