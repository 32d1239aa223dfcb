//! The owning expression tree.

use crate::node::Node;
use crate::operators::{BinaryOp, UnaryOp};
use crate::traversal::{InOrder, Labels, PostOrder, PreOrder};

/// An expression tree: owns its root and, transitively, every node.
///
/// Trees are built by the parser and never share nodes. All observers
/// (`pre_order`, `Display`, metrics, evaluation) take `&Tree`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    pub fn new(root: Node) -> Self {
        Tree { root }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Apply a unary operator to a whole tree.
    pub fn unary(op: UnaryOp, operand: Tree) -> Self {
        Tree::new(Node::unary(op, operand.into_root()))
    }

    /// Apply a binary operator to two whole trees.
    pub fn binary(op: BinaryOp, left: Tree, right: Tree) -> Self {
        Tree::new(Node::binary(op, left.into_root(), right.into_root()))
    }

    /// Take the root out of the tree. The caller must re-wrap it in a
    /// `Tree` so that dropping stays iterative.
    fn into_root(mut self) -> Node {
        std::mem::replace(&mut self.root, Node::Symbol(Box::default()))
    }

    /// Labels in in-order: left subtree, node, right subtree.
    pub fn in_order(&self) -> Labels<InOrder<'_>> {
        Labels::new(InOrder::new(&self.root))
    }

    /// Labels in pre-order: node, left subtree, right subtree.
    pub fn pre_order(&self) -> Labels<PreOrder<'_>> {
        Labels::new(PreOrder::new(&self.root))
    }

    /// Labels in post-order: left subtree, right subtree, node.
    pub fn post_order(&self) -> Labels<PostOrder<'_>> {
        Labels::new(PostOrder::new(&self.root))
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.root.height()
    }
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Tree::new(root)
    }
}

impl Drop for Tree {
    /// Dismantle the tree with an explicit worklist.
    ///
    /// The derived drop glue recurses once per level and would overflow on
    /// long chains like `x 1 + 1 + 1 + ...`.
    fn drop(&mut self) {
        let mut pending = vec![std::mem::replace(&mut self.root, Node::Symbol(Box::default()))];
        while let Some(node) = pending.pop() {
            match node {
                Node::Unary { operand, .. } => pending.push(*operand),
                Node::Binary { left, right, .. } => {
                    pending.push(*left);
                    pending.push(*right);
                }
                Node::Constant(_) | Node::Variable(_) | Node::Symbol(_) => {}
            }
        }
    }
}
