//! Numeric evaluation of expression trees.
//!
//! Evaluation is total: it never fails and never mutates the tree.
//! Arithmetic follows IEEE-754, so division by zero, `(-8) ^ 0.5` and the
//! like come back as `inf`/`NaN` values rather than errors. Opaque leaves
//! (tokens that are neither numbers nor `x`/`y`) evaluate to `NaN`, which
//! then propagates through every enclosing operator.
//!
//! Operator semantics come from the registry in `pfx_ir`
//! ([`BinaryOp::apply`](pfx_ir::BinaryOp::apply),
//! [`UnaryOp::apply`](pfx_ir::UnaryOp::apply)); children are evaluated
//! first, left before right.

use pfx_ir::{Node, Tree, Variable};
use pfx_stack::ensure_sufficient_stack;
use rayon::prelude::*;
use tracing::debug;

/// Values for the two free variables.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    pub x: f64,
    pub y: f64,
}

impl Bindings {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Bindings { x, y }
    }

    #[inline]
    pub fn get(self, var: Variable) -> f64 {
        match var {
            Variable::X => self.x,
            Variable::Y => self.y,
        }
    }
}

impl From<(f64, f64)> for Bindings {
    fn from((x, y): (f64, f64)) -> Self {
        Bindings { x, y }
    }
}

/// Evaluate a tree at `x`, `y`.
pub fn evaluate(tree: &Tree, x: f64, y: f64) -> f64 {
    evaluate_node(tree.root(), Bindings::new(x, y))
}

/// Evaluate a subtree under the given bindings.
pub fn evaluate_node(node: &Node, env: Bindings) -> f64 {
    ensure_sufficient_stack(|| match node {
        Node::Constant(lit) => lit.value(),
        Node::Variable(var) => env.get(*var),
        Node::Symbol(_) => f64::NAN,
        Node::Unary { op, operand } => op.apply(evaluate_node(operand, env)),
        Node::Binary { op, left, right } => {
            let left = evaluate_node(left, env);
            let right = evaluate_node(right, env);
            op.apply(left, right)
        }
    })
}

/// Evaluate a tree at every point, in parallel.
///
/// Results are in the same order as `points`. The tree is shared read-only
/// between worker threads.
#[tracing::instrument(level = "debug", skip_all, fields(points = points.len()))]
pub fn evaluate_batch(tree: &Tree, points: &[Bindings]) -> Vec<f64> {
    let root = tree.root();
    let values: Vec<f64> = points
        .par_iter()
        .map(|&env| evaluate_node(root, env))
        .collect();
    debug!(
        non_finite = values.iter().filter(|v| !v.is_finite()).count(),
        "batch evaluated"
    );
    values
}
