//! Driver errors.

use pfx_parse::ParseError;
use thiserror::Error;

/// Anything that stops a command from producing its report.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid number `{value}` for `{flag}`")]
    InvalidNumber { flag: &'static str, value: String },

    #[error("invalid point `{0}`, expected `--at=<x>,<y>`")]
    InvalidPoint(String),

    #[error("`--at` cannot be combined with `--x` or `--y`")]
    PointsWithBindings,

    /// The expression did not parse. Rendered against its source by
    /// [`crate::diagnostic::report_error`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
