//! Parse error types.

use pfx_ir::Span;
use thiserror::Error;

/// Why a token stream could not be turned into a tree.
///
/// Parsing stops at the first error; no partial tree is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An operator token arrived with fewer operands on the stack than its
    /// arity requires.
    #[error(
        "operator `{}` needs {} {}, found {}",
        .operator,
        .expected,
        operands(.expected),
        .found
    )]
    StackUnderflow {
        operator: &'static str,
        expected: usize,
        found: usize,
        /// The operator token.
        span: Span,
    },

    /// All tokens were consumed but the stack does not hold exactly one
    /// node: leftover operands, or nothing at all.
    #[error("{}", malformed_message(.remaining))]
    MalformedExpression {
        remaining: usize,
        /// The dangling operands, or the end of input when empty.
        span: Span,
    },
}

impl ParseError {
    /// Where in the source the problem was found.
    pub fn span(&self) -> Span {
        match self {
            ParseError::StackUnderflow { span, .. } | ParseError::MalformedExpression { span, .. } => {
                *span
            }
        }
    }

    /// Follow-up hint for diagnostics.
    pub fn hint(&self) -> &'static str {
        match self {
            ParseError::StackUnderflow { .. } => {
                "in postfix notation operands come before their operator, e.g. `2 3 +`"
            }
            ParseError::MalformedExpression { remaining: 0, .. } => {
                "write at least one operand, e.g. `x`"
            }
            ParseError::MalformedExpression { .. } => {
                "add an operator to combine the remaining operands"
            }
        }
    }
}

fn operands(count: &usize) -> &'static str {
    if *count == 1 {
        "operand"
    } else {
        "operands"
    }
}

fn malformed_message(remaining: &usize) -> String {
    if *remaining == 0 {
        "empty expression".to_string()
    } else {
        format!("expression leaves {remaining} operands unconnected; expected exactly one root")
    }
}

