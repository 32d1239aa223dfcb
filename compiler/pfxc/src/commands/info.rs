//! `pfx info`: infix rendering and shape of a tree.

use std::io::Write;

use super::parse_expression;
use crate::CliError;

pub fn show_info(source: &str, out: &mut impl Write) -> Result<(), CliError> {
    let tree = parse_expression(source)?;
    writeln!(out, "expression: {tree}")?;
    writeln!(out, "nodes:      {}", tree.size())?;
    writeln!(out, "height:     {}", tree.height())?;
    Ok(())
}
