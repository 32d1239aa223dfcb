//! Structural metrics.

use crate::node::Node;
use crate::traversal::PreOrder;

impl Node {
    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        PreOrder::new(self).count()
    }

    /// Edges on the longest path from `self` down to a leaf. A leaf has
    /// height 0.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(
                [node.first_child(), node.second_child()]
                    .into_iter()
                    .flatten()
                    .map(|child| (child, depth + 1)),
            );
        }
        max
    }
}
