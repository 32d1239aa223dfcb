#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pfx_ir::{BinaryOp, UnaryOp, Variable};
use pfx_parse::parse;

fn folded(source: &str) -> Tree {
    simplify(&parse(source).unwrap())
}

fn lit(value: f64, text: &str) -> Node {
    Node::Constant(Literal::new(value, text))
}

mod folding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sum_of_constants() {
        assert_eq!(folded("2 3 +").root(), &Node::number(5.0));
        assert_eq!(folded("2 3 +").root().label(), "5");
    }

    #[test]
    fn nested_constants_fold_bottom_up() {
        assert_eq!(folded("2 3 + 4 *").root(), &Node::number(20.0));
        assert_eq!(folded("2 3 ^ 1 -").root(), &Node::number(7.0));
    }

    #[test]
    fn constant_subtree_under_variable() {
        // ( x * ( 2 + 3 ) )
        assert_eq!(
            folded("x 2 3 + *").root(),
            &Node::binary(BinaryOp::Mul, Node::Variable(Variable::X), Node::number(5.0))
        );
    }

    #[test]
    fn division_by_zero_folds() {
        assert_eq!(folded("1 0 /").root().as_constant(), Some(f64::INFINITY));
        assert_eq!(folded("1 0 /").root().label(), "inf");
        assert!(folded("0 0 /").root().as_constant().unwrap().is_nan());
    }
}

mod preserved {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unary_over_constant_is_kept() {
        assert_eq!(
            folded("1 sin").root(),
            &Node::unary(UnaryOp::Sin, lit(1.0, "1"))
        );
    }

    #[test]
    fn unary_blocks_enclosing_fold() {
        let tree = folded("1 sin 2 +");
        assert_eq!(tree.post_order().collect::<Vec<_>>(), ["1", "sin", "2", "+"]);
    }

    #[test]
    fn folds_below_unary() {
        let tree = folded("2 3 * cos");
        assert_eq!(tree.root(), &Node::unary(UnaryOp::Cos, Node::number(6.0)));
    }

    #[test]
    fn no_identity_rewrites() {
        for source in ["x 0 +", "x 1 *", "x x -", "x 2 + 3 +"] {
            assert_eq!(folded(source), parse(source).unwrap(), "{source}");
        }
    }

    #[test]
    fn opaque_leaves_block_folding() {
        assert_eq!(folded("z 2 +"), parse("z 2 +").unwrap());
    }

    #[test]
    fn input_is_untouched() {
        let tree = parse("2 3 +").unwrap();
        let _ = simplify(&tree);
        assert_eq!(tree.post_order().collect::<Vec<_>>(), ["2", "3", "+"]);
    }
}

mod in_place {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_the_tree() {
        let mut tree = parse("x 2 2 * ^").unwrap();
        simplify_in_place(&mut tree);
        assert_eq!(tree.to_string(), "( x ^ 4 )");
    }

    #[test]
    fn folds_inside_larger_tree() {
        let mut tree = parse("x 2 ^ sin 3 4 * +").unwrap();
        simplify_in_place(&mut tree);
        assert_eq!(tree.to_string(), "( sin( ( x ^ 2 ) ) + 12 )");
    }
}

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn idempotent_on_examples() {
        for source in ["2 3 +", "x 2 ^ sin x y * +", "1 sin 2 +", "0 0 / 1 +", "z"] {
            let once = folded(source);
            assert_eq!(simplify(&once), once, "{source}");
        }
    }

    #[test]
    fn value_is_preserved() {
        let tree = parse("x 2 3 * + y 1 0 / - *").unwrap();
        let folded = simplify(&tree);
        for (x, y) in [(0.0, 0.0), (1.5, -2.0), (-3.0, 7.25)] {
            assert_eq!(
                pfx_eval::evaluate(&folded, x, y).to_bits(),
                pfx_eval::evaluate(&tree, x, y).to_bits()
            );
        }
    }
}

mod depth {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deep_constant_chain_folds_to_one_leaf() {
        let mut source = String::from("0");
        for _ in 0..100_000 {
            source.push_str(" 1 +");
        }
        assert_eq!(folded(&source).root(), &Node::number(100_000.0));
    }

    #[test]
    fn deep_variable_chain_is_kept() {
        let mut source = String::from("x");
        for _ in 0..100_000 {
            source.push_str(" 1 +");
        }
        let tree = folded(&source);
        assert_eq!(tree.height(), 100_000);
        assert_eq!(tree.size(), 200_001);
    }

    #[test]
    fn deep_chain_is_idempotent() {
        let mut source = String::from("x");
        for i in 0..100_000 {
            source.push_str(if i % 2 == 0 { " 2 3 * +" } else { " sin" });
        }
        let once = folded(&source);
        assert_eq!(once.height(), 100_000);
        let twice = simplify(&once);
        // Compared without a diff: rendering 100k levels on failure is useless.
        assert!(twice == once);
        assert!(once.clone() == twice);
    }
}
