//! Constant folding.
//!
//! A single bottom-up pass over the tree. After folding the children of a
//! binary operator, the node is replaced by one constant if both children
//! are now constants. The folded value comes from the operator registry, so
//! it is exactly what the evaluator would compute for that node.
//!
//! # Scope
//!
//! Folds only binary operators over two constant leaves:
//! - `2 3 +` becomes `5`, `2 3 + 4 *` becomes `20`
//! - `1 0 /` becomes `inf`, `0 0 /` becomes `NaN`
//!
//! Does NOT cover:
//! - unary operators, even over constants (`1 sin` stays as written)
//! - algebraic identities (`x 0 +`, `x 1 *`, `x x -`)
//! - partial folding across variables (`x 2 + 3 +`)
//!
//! Folding never fails and is idempotent: a folded tree has no binary node
//! with two constant children left.

use pfx_ir::{Literal, Node, Tree};
use pfx_stack::ensure_sufficient_stack;
use tracing::debug;

/// Return a constant-folded copy of `tree`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn simplify(tree: &Tree) -> Tree {
    let mut folder = Folder::default();
    let root = folder.fold(tree.root());
    debug!(folds = folder.folds, "constant folding done");
    Tree::new(root)
}

/// Replace `tree` by its constant-folded form.
pub fn simplify_in_place(tree: &mut Tree) {
    *tree = simplify(tree);
}

#[derive(Default)]
struct Folder {
    folds: usize,
}

impl Folder {
    fn fold(&mut self, node: &Node) -> Node {
        ensure_sufficient_stack(|| match node {
            Node::Binary { op, left, right } => {
                let left = self.fold(left);
                let right = self.fold(right);
                match (left.as_constant(), right.as_constant()) {
                    (Some(a), Some(b)) => {
                        self.folds += 1;
                        Node::Constant(Literal::from_value(op.apply(a, b)))
                    }
                    _ => Node::binary(*op, left, right),
                }
            }
            Node::Unary { op, operand } => Node::unary(*op, self.fold(operand)),
            Node::Constant(_) | Node::Variable(_) | Node::Symbol(_) => node.clone(),
        })
    }
}

#[cfg(test)]
mod tests;
