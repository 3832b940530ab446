pub mod kind;

pub use symcalc_error::Error;
