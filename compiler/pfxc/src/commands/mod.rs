//! Command handlers for the `pfx` CLI.
//!
//! Each submodule implements one command. Handlers take the expression
//! source and a writer and return the first error they hit; the binary
//! decides how to report it.

mod demo;
mod eval;
mod info;
mod simplify;
mod traverse;

pub use demo::{run_demo, DEMO_EXPRESSION};
pub use eval::eval_expression;
pub use info::show_info;
pub use simplify::simplify_expression;
pub use traverse::traverse_expression;

use pfx_ir::Tree;
use tracing::debug;

use crate::CliError;

/// Parse the command's expression argument.
fn parse_expression(source: &str) -> Result<Tree, CliError> {
    let tree = pfx_parse::parse(source)?;
    debug!(nodes = tree.size(), height = tree.height(), "parsed expression");
    Ok(tree)
}

#[cfg(test)]
mod tests;
