use std::fmt;

/// A rewrite applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// A node whose children are all constants was replaced with its value.
    FoldConstants,

    /// `0+a = a`, `a+0 = a`
    AddZero,

    /// `0*a = 0`, `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`, `a*1 = a`
    MultiplyOne,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `--a = a`
    DoubleNegation,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FoldConstants => write!(f, "evaluate constant subexpression"),
            Self::AddZero => write!(f, "remove zero term: 0+a = a"),
            Self::MultiplyZero => write!(f, "multiply by zero: 0*a = 0"),
            Self::MultiplyOne => write!(f, "remove factor of one: 1*a = a"),
            Self::PowerZero => write!(f, "zero exponent: a^0 = 1"),
            Self::PowerOne => write!(f, "exponent of one: a^1 = a"),
            Self::DoubleNegation => write!(f, "cancel double negation: --a = a"),
        }
    }
}
