//! Tree nodes.

use std::fmt;

use pfx_stack::ensure_sufficient_stack;

use crate::operators::{BinaryOp, UnaryOp};

/// A numeric literal together with the text it was written as.
///
/// Labels in traversals echo the token as written (`2`, `2.50`, `1e3`), so the
/// lexeme is kept alongside the value. Constants created by folding use the
/// shortest decimal rendering of their value.
///
/// Equality is structural: values compare by bit pattern, so a `NaN` literal
/// equals itself and `0` differs from `-0`.
#[derive(Clone, Debug)]
pub struct Literal {
    value: f64,
    lexeme: Box<str>,
}

impl Literal {
    /// A literal read from source text.
    pub fn new(value: f64, lexeme: impl Into<Box<str>>) -> Self {
        Literal {
            value,
            lexeme: lexeme.into(),
        }
    }

    /// A literal computed rather than read, labelled by its own value.
    pub fn from_value(value: f64) -> Self {
        Literal {
            value,
            lexeme: value.to_string().into_boxed_str(),
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.value.to_bits() == other.value.to_bits() && self.lexeme == other.lexeme
    }
}

impl Eq for Literal {}

/// One of the two free variables.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variable {
    X,
    Y,
}

impl Variable {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            _ => None,
        }
    }
}

/// An expression tree node.
///
/// Children are boxed and exclusively owned. Operators are split by arity so
/// a unary node always has one operand and a binary node always has two.
///
/// `Clone`, `PartialEq` and `Debug` recurse once per level under
/// [`ensure_sufficient_stack`]. Dropping is only iterative through the owning
/// [`Tree`](crate::Tree).
pub enum Node {
    /// Numeric literal.
    Constant(Literal),
    /// `x` or `y`.
    Variable(Variable),
    /// Any other token. Kept for display; evaluates to NaN.
    Symbol(Box<str>),
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Constant leaf labelled by its value.
    pub fn number(value: f64) -> Self {
        Node::Constant(Literal::from_value(value))
    }

    pub fn unary(op: UnaryOp, operand: Node) -> Self {
        Node::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The token text this node stands for.
    pub fn label(&self) -> &str {
        match self {
            Node::Constant(lit) => lit.lexeme(),
            Node::Variable(var) => var.as_symbol(),
            Node::Symbol(text) => &**text,
            Node::Unary { op, .. } => op.as_symbol(),
            Node::Binary { op, .. } => op.as_symbol(),
        }
    }

    /// Value of a constant leaf.
    #[inline]
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Node::Constant(lit) => Some(lit.value()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Constant(_) | Node::Variable(_) | Node::Symbol(_)
        )
    }

    /// First child: the left operand, or the only operand of a unary node.
    #[inline]
    pub fn first_child(&self) -> Option<&Node> {
        match self {
            Node::Unary { operand, .. } => Some(&**operand),
            Node::Binary { left, .. } => Some(&**left),
            _ => None,
        }
    }

    /// Second child: the right operand of a binary node.
    #[inline]
    pub fn second_child(&self) -> Option<&Node> {
        match self {
            Node::Binary { right, .. } => Some(&**right),
            _ => None,
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Node::Constant(lit) => Node::Constant(lit.clone()),
            Node::Variable(var) => Node::Variable(*var),
            Node::Symbol(text) => Node::Symbol(text.clone()),
            Node::Unary { op, operand } => Node::Unary {
                op: *op,
                operand: operand.clone(),
            },
            Node::Binary { op, left, right } => Node::Binary {
                op: *op,
                left: left.clone(),
                right: right.clone(),
            },
        })
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Node::Constant(a), Node::Constant(b)) => a == b,
            (Node::Variable(a), Node::Variable(b)) => a == b,
            (Node::Symbol(a), Node::Symbol(b)) => a == b,
            (
                Node::Unary { op, operand },
                Node::Unary {
                    op: other_op,
                    operand: other_operand,
                },
            ) => op == other_op && operand == other_operand,
            (
                Node::Binary { op, left, right },
                Node::Binary {
                    op: other_op,
                    left: other_left,
                    right: other_right,
                },
            ) => op == other_op && left == other_left && right == other_right,
            _ => false,
        })
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Node::Constant(lit) => f.debug_tuple("Constant").field(lit).finish(),
            Node::Variable(var) => f.debug_tuple("Variable").field(var).finish(),
            Node::Symbol(text) => f.debug_tuple("Symbol").field(text).finish(),
            Node::Unary { op, operand } => f
                .debug_struct("Unary")
                .field("op", op)
                .field("operand", operand)
                .finish(),
            Node::Binary { op, left, right } => f
                .debug_struct("Binary")
                .field("op", op)
                .field("left", left)
                .field("right", right)
                .finish(),
        })
    }
}
