//! Infix rendering.
//!
//! Fully parenthesised so the output is unambiguous without precedence
//! rules: `x 2 ^ sin x y * +` renders as `( sin( ( x ^ 2 ) ) + ( x * y ) )`.

use std::fmt;

use pfx_stack::ensure_sufficient_stack;

use crate::node::Node;
use crate::tree::Tree;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Node::Unary { op, operand } => write!(f, "{op}( {operand} )"),
            Node::Binary { op, left, right } => write!(f, "( {left} {op} {right} )"),
            leaf => f.write_str(leaf.label()),
        })
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.root(), f)
    }
}
