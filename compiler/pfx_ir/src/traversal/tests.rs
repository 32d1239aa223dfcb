use pretty_assertions::assert_eq;

use crate::{BinaryOp, Literal, Node, PostOrder, Tree, UnaryOp, Variable};

fn lit(text: &str) -> Node {
    let value = text.parse::<f64>().unwrap_or(f64::NAN);
    Node::Constant(Literal::new(value, text))
}

fn x() -> Node {
    Node::Variable(Variable::X)
}

fn y() -> Node {
    Node::Variable(Variable::Y)
}

/// `2 3 +`
fn simple_sum() -> Tree {
    Tree::new(Node::binary(BinaryOp::Add, lit("2"), lit("3")))
}

/// `x 2 ^ sin x y * +`
fn demo_tree() -> Tree {
    let sin = Node::unary(UnaryOp::Sin, Node::binary(BinaryOp::Pow, x(), lit("2")));
    let product = Node::binary(BinaryOp::Mul, x(), y());
    Tree::new(Node::binary(BinaryOp::Add, sin, product))
}

#[test]
fn test_simple_sum_orders() {
    let tree = simple_sum();
    assert_eq!(tree.pre_order().collect::<Vec<_>>(), ["+", "2", "3"]);
    assert_eq!(tree.post_order().collect::<Vec<_>>(), ["2", "3", "+"]);
    assert_eq!(tree.in_order().collect::<Vec<_>>(), ["2", "+", "3"]);
}

#[test]
fn test_unary_operand_is_left_subtree() {
    let tree = demo_tree();
    assert_eq!(
        tree.in_order().collect::<Vec<_>>(),
        ["x", "^", "2", "sin", "+", "x", "*", "y"]
    );
    assert_eq!(
        tree.pre_order().collect::<Vec<_>>(),
        ["+", "sin", "^", "x", "2", "*", "x", "y"]
    );
}

#[test]
fn test_post_order_reproduces_tokens() {
    let tree = demo_tree();
    let tokens: Vec<_> = tree.post_order().collect();
    assert_eq!(tokens.join(" "), "x 2 ^ sin x y * +");
}

#[test]
fn test_single_leaf() {
    let tree = Tree::new(Node::Symbol("z".into()));
    assert_eq!(tree.pre_order().collect::<Vec<_>>(), ["z"]);
    assert_eq!(tree.in_order().collect::<Vec<_>>(), ["z"]);
    assert_eq!(tree.post_order().collect::<Vec<_>>(), ["z"]);
}

#[test]
fn test_restartable() {
    let tree = demo_tree();
    let labels = tree.post_order();
    let first: Vec<_> = labels.clone().collect();
    let second: Vec<_> = labels.collect();
    assert_eq!(first, second);
    assert_eq!(first, tree.post_order().collect::<Vec<_>>());
}

#[test]
fn test_lexeme_preserved() {
    let tree = Tree::new(Node::binary(BinaryOp::Mul, lit("2.50"), lit("1e3")));
    assert_eq!(tree.post_order().collect::<Vec<_>>(), ["2.50", "1e3", "*"]);
}

#[test]
fn test_deep_chain_does_not_recurse() {
    let mut node = x();
    for _ in 0..100_000 {
        node = Node::unary(UnaryOp::Cos, node);
    }
    let tree = Tree::new(node);
    assert_eq!(tree.pre_order().count(), 100_001);
    assert_eq!(tree.in_order().next(), Some("x"));
    assert_eq!(tree.post_order().last(), Some("cos"));
}

#[test]
fn test_node_iterators_yield_nodes() {
    let tree = simple_sum();
    let constants: Vec<f64> = PostOrder::new(tree.root())
        .filter_map(Node::as_constant)
        .collect();
    assert_eq!(constants, [2.0, 3.0]);
}
