//! Binary and unary operators.

use crate::{
    parser::{Associativity, Precedence},
    tokenizer::TokenKind,
};
use std::fmt;

/// A unary sign operator that prefixes its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `+`, which leaves its operand unchanged.
    Pos,

    /// `-`, which negates its operand.
    Neg,
}

impl UnaryOp {
    /// Returns the unary operator represented by the given token, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Pos),
            TokenKind::Sub => Some(Self::Neg),
            _ => None,
        }
    }

    /// Returns the precedence of the unary operation.
    pub fn precedence(&self) -> Precedence {
        Precedence::Neg
    }

    /// Returns the associativity of the unary operation.
    pub fn associativity(&self) -> Associativity {
        Associativity::Right
    }

    /// Returns the symbol of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pos => "+",
            Self::Neg => "-",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOp {
    /// Returns the binary operator represented by the given token, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Exp => Some(Self::Exp),
            _ => None,
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Exp => Precedence::Exp,
        }
    }

    /// Returns the associativity of the binary operation.
    ///
    /// Every binary operator is parsed left-associatively, including `^`: `a^b^c` is `(a^b)^c`.
    pub fn associativity(&self) -> Associativity {
        Associativity::Left
    }

    /// Returns true if `(a op b) op c` always equals `a op (b op c)`.
    ///
    /// This decides whether a left operand of equal precedence needs parentheses when rendered.
    pub fn is_associative(&self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }

    /// Returns the symbol of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
