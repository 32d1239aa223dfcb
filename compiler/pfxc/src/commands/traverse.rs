//! `pfx traverse`: print the three label orders.

use std::io::Write;

use pfx_ir::Tree;

use super::parse_expression;
use crate::CliError;

pub fn traverse_expression(source: &str, out: &mut impl Write) -> Result<(), CliError> {
    let tree = parse_expression(source)?;
    write_traversals(&tree, out)?;
    Ok(())
}

/// One heading line and one label line per order.
pub(super) fn write_traversals(tree: &Tree, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "In-order traversal:")?;
    writeln!(out, "{}", join(tree.in_order()))?;
    writeln!(out, "Pre-order traversal:")?;
    writeln!(out, "{}", join(tree.pre_order()))?;
    writeln!(out, "Post-order traversal:")?;
    writeln!(out, "{}", join(tree.post_order()))
}

pub(super) fn join<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(" ")
}
