//! `pfx demo`: the built-in example.

use std::io::Write;

use pfx_eval::evaluate;

use super::parse_expression;
use super::traverse::write_traversals;
use crate::CliError;

pub const DEMO_EXPRESSION: &str = "x 2 ^ sin x y * +";

const DEMO_X: f64 = 1.0;
const DEMO_Y: f64 = 2.0;

/// Print the traversals of [`DEMO_EXPRESSION`] and its value at `x = 1`,
/// `y = 2`.
pub fn run_demo(out: &mut impl Write) -> Result<(), CliError> {
    let tree = parse_expression(DEMO_EXPRESSION)?;
    writeln!(out, "Expression: {DEMO_EXPRESSION}")?;
    write_traversals(&tree, out)?;
    let value = evaluate(&tree, DEMO_X, DEMO_Y);
    writeln!(out, "Evaluation at x = {DEMO_X}, y = {DEMO_Y}: {value}")?;
    Ok(())
}
