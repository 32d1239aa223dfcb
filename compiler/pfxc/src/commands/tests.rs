#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::EvalOptions;
use pfx_eval::Bindings;

fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
    let mut out = Vec::new();
    run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

mod traverse {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_all_three_orders() {
        let text = output(|out| traverse_expression("2 3 +", out));
        assert_eq!(
            text,
            "In-order traversal:\n2 + 3\n\
             Pre-order traversal:\n+ 2 3\n\
             Post-order traversal:\n2 3 +\n"
        );
    }

    #[test]
    fn parse_error_is_returned() {
        let mut out = Vec::new();
        let err = traverse_expression("2 +", &mut out).unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
        assert!(out.is_empty());
    }
}

mod eval {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_point() {
        let options = EvalOptions {
            x: 1.0,
            y: 2.0,
            ..EvalOptions::default()
        };
        let text = output(|out| eval_expression(DEMO_EXPRESSION, &options, out));
        assert_eq!(text, "2.8414709848078967\n");
    }

    #[test]
    fn defaults_to_origin() {
        let text = output(|out| eval_expression("x y + 1 +", &EvalOptions::default(), out));
        assert_eq!(text, "1\n");
    }

    #[test]
    fn batch_points_in_order() {
        let options = EvalOptions {
            points: vec![Bindings::new(1.0, 2.0), Bindings::new(3.0, 0.0)],
            ..EvalOptions::default()
        };
        let text = output(|out| eval_expression("x y /", &options, out));
        assert_eq!(text, "x = 1, y = 2: 0.5\nx = 3, y = 0: inf\n");
    }

    #[test]
    fn simplify_first() {
        let options = EvalOptions {
            simplify: true,
            ..EvalOptions::default()
        };
        let text = output(|out| eval_expression("2 3 + x *", &options, out));
        assert_eq!(text, "0\n");
    }

    #[test]
    fn opaque_leaf_prints_nan() {
        let text = output(|out| eval_expression("z 1 +", &EvalOptions::default(), out));
        assert_eq!(text, "NaN\n");
    }
}

mod simplify {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_infix_and_post_order() {
        let text = output(|out| simplify_expression("x 2 3 + *", out));
        assert_eq!(text, "( x * 5 )\nx 5 *\n");
    }

    #[test]
    fn unary_is_kept() {
        let text = output(|out| simplify_expression("1 sin", out));
        assert_eq!(text, "sin( 1 )\n1 sin\n");
    }
}

mod info {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shape_of_demo() {
        let text = output(|out| show_info(DEMO_EXPRESSION, out));
        assert_eq!(
            text,
            "expression: ( sin( ( x ^ 2 ) ) + ( x * y ) )\n\
             nodes:      8\n\
             height:     3\n"
        );
    }

    #[test]
    fn single_leaf() {
        let text = output(|out| show_info("x", out));
        assert_eq!(text, "expression: x\nnodes:      1\nheight:     0\n");
    }
}

mod demo {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reproduces_example() {
        let text = output(|out| run_demo(out));
        assert_eq!(
            text,
            "Expression: x 2 ^ sin x y * +\n\
             In-order traversal:\nx ^ 2 sin + x * y\n\
             Pre-order traversal:\n+ sin ^ x 2 * x y\n\
             Post-order traversal:\nx 2 ^ sin x y * +\n\
             Evaluation at x = 1, y = 2: 2.8414709848078967\n"
        );
    }
}
