//! Depth-first node iterators.
//!
//! Each iterator keeps an explicit stack, so walking a tree never recurses
//! and is safe at any depth. Iterators are `Clone`: cloning one before it is
//! consumed gives an independent restart of the same sequence.
//!
//! A unary node's operand counts as its left subtree; it has no right
//! subtree. For `2 3 +`:
//!
//! | order      | labels          |
//! |------------|-----------------|
//! | in-order   | `2`, `+`, `3`   |
//! | pre-order  | `+`, `2`, `3`   |
//! | post-order | `2`, `3`, `+`   |

use crate::node::Node;

/// Pre-order: node, left subtree, right subtree.
#[derive(Clone, Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a Node) -> Self {
        PreOrder { stack: vec![root] }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is visited first.
        if let Some(right) = node.second_child() {
            self.stack.push(right);
        }
        if let Some(left) = node.first_child() {
            self.stack.push(left);
        }
        Some(node)
    }
}

/// In-order: left subtree, node, right subtree.
#[derive(Clone, Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
    current: Option<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub fn new(root: &'a Node) -> Self {
        InOrder {
            stack: Vec::new(),
            current: Some(root),
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.first_child();
        }
        let node = self.stack.pop()?;
        self.current = node.second_child();
        Some(node)
    }
}

/// Post-order: left subtree, right subtree, node.
#[derive(Clone, Debug)]
pub struct PostOrder<'a> {
    /// `(node, children_pushed)`
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> PostOrder<'a> {
    pub fn new(root: &'a Node) -> Self {
        PostOrder {
            stack: vec![(root, false)],
        }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded || node.is_leaf() {
                return Some(node);
            }
            self.stack.push((node, true));
            if let Some(right) = node.second_child() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.first_child() {
                self.stack.push((left, false));
            }
        }
    }
}

/// Adapts a node iterator into the labels of the nodes it yields.
#[derive(Clone, Debug)]
pub struct Labels<I> {
    nodes: I,
}

impl<I> Labels<I> {
    pub fn new(nodes: I) -> Self {
        Labels { nodes }
    }
}

impl<'a, I> Iterator for Labels<I>
where
    I: Iterator<Item = &'a Node>,
{
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.nodes.next().map(Node::label)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

#[cfg(test)]
mod tests;
