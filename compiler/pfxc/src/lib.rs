//! Command-line driver for postfix expression trees.
//!
//! The `pfx` binary is a thin dispatcher over this library. Every command
//! writes its report to a caller-supplied writer, so the binary passes
//! stdout and the tests pass a `Vec<u8>`.
//!
//! ```text
//! pfx traverse "x 2 ^ sin x y * +"
//! pfx eval "x 2 ^ sin x y * +" --x=1 --y=2
//! pfx eval "x y /" --at=1,2 --at=3,0
//! pfx simplify "x 2 3 + *"
//! pfx info "x 2 ^ sin x y * +"
//! pfx demo
//! ```

pub mod commands;
pub mod diagnostic;
mod error;
mod options;
mod tracing_setup;

pub use error::CliError;
pub use options::{reject_flags, split_args, EvalOptions};
pub use tracing_setup::init_tracing;
