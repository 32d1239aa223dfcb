//! Operator registry.
//!
//! The operator set is fixed, so the registry is a pair of enums with `match`
//! dispatch rather than lookup tables. A token is an operator iff
//! [`Operator::from_symbol`] recognises it; its arity follows from the variant.
//!
//! | symbol | op              | arity | semantics     |
//! |--------|-----------------|-------|---------------|
//! | `+`    | `BinaryOp::Add` | 2     | `a + b`       |
//! | `-`    | `BinaryOp::Sub` | 2     | `a - b`       |
//! | `*`    | `BinaryOp::Mul` | 2     | `a * b`       |
//! | `/`    | `BinaryOp::Div` | 2     | `a / b`       |
//! | `^`    | `BinaryOp::Pow` | 2     | `a.powf(b)`   |
//! | `sin`  | `UnaryOp::Sin`  | 1     | `a.sin()`     |
//! | `cos`  | `UnaryOp::Cos`  | 1     | `a.cos()`     |
//!
//! All semantics are plain IEEE-754: `1 / 0` is `inf`, `0 / 0` and
//! `(-8) ^ 0.5` are NaN.

use std::fmt;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Returns the token that spells this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Look up a binary operator by its token.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }

    /// Apply the operator to two operands.
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Sin,
    Cos,
}

impl UnaryOp {
    /// Returns the token that spells this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }

    /// Look up a unary operator by its token.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            _ => None,
        }
    }

    /// Apply the operator to its operand.
    #[inline]
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            Self::Sin => operand.sin(),
            Self::Cos => operand.cos(),
        }
    }
}

/// Any registered operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl Operator {
    /// Classify a token as an operator, if it is one.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        BinaryOp::from_symbol(symbol)
            .map(Self::Binary)
            .or_else(|| UnaryOp::from_symbol(symbol).map(Self::Unary))
    }

    /// Number of operands the operator consumes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Binary(_) => 2,
            Self::Unary(_) => 1,
        }
    }

    /// Returns the token that spells this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Binary(op) => op.as_symbol(),
            Self::Unary(op) => op.as_symbol(),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
