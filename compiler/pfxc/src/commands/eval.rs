//! `pfx eval`: evaluate at one point or at many.

use std::io::Write;

use pfx_eval::{evaluate_batch, evaluate_node};
use pfx_fold::simplify_in_place;

use super::parse_expression;
use crate::{CliError, EvalOptions};

/// Evaluate `source` as configured by `options`.
///
/// Prints a bare value for a single point. With `--at` points, prints one
/// `x = .., y = ..: value` line per point in the order given.
pub fn eval_expression(
    source: &str,
    options: &EvalOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut tree = parse_expression(source)?;
    if options.simplify {
        simplify_in_place(&mut tree);
    }

    if options.points.is_empty() {
        writeln!(out, "{}", evaluate_node(tree.root(), options.bindings()))?;
        return Ok(());
    }

    let values = evaluate_batch(&tree, &options.points);
    for (point, value) in options.points.iter().zip(values) {
        writeln!(out, "x = {}, y = {}: {value}", point.x, point.y)?;
    }
    Ok(())
}
