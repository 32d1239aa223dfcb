//! `pfx simplify`: fold constants and print the result.

use std::io::Write;

use pfx_fold::simplify;

use super::parse_expression;
use super::traverse::join;
use crate::CliError;

pub fn simplify_expression(source: &str, out: &mut impl Write) -> Result<(), CliError> {
    let tree = simplify(&parse_expression(source)?);
    writeln!(out, "{tree}")?;
    writeln!(out, "{}", join(tree.post_order()))?;
    Ok(())
}
