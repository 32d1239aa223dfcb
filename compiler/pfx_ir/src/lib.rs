//! Expression tree types for postfix expressions.
//!
//! This crate holds the data shared by every stage of the pipeline:
//! - `Span` for token locations in the source string
//! - the operator registry (`BinaryOp`, `UnaryOp`, `Operator`)
//! - `Node` and the owning `Tree`
//! - label traversals (in-order, pre-order, post-order)
//! - infix rendering and structural metrics
//!
//! # Pipeline
//!
//! ```text
//! source → pfx_lexer → pfx_parse → Tree → pfx_fold → pfx_eval(x, y) → f64
//! ```
//!
//! Children are boxed and owned by exactly one parent. Operator nodes come in
//! a unary and a binary flavour, so a node can never carry the wrong number of
//! operands.

mod display;
mod metrics;
mod node;
mod operators;
mod span;
pub mod traversal;
mod tree;

pub use node::{Literal, Node, Variable};
pub use operators::{BinaryOp, Operator, UnaryOp};
pub use span::Span;
pub use traversal::{InOrder, Labels, PostOrder, PreOrder};
pub use tree::Tree;
