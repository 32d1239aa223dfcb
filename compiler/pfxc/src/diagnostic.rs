//! Error reporting for the driver.
//!
//! Parse errors are rendered with ariadne as a source snippet with the
//! offending tokens underlined:
//!
//! ```text
//! Error: operator `*` needs 2 operands, found 1
//!    ╭─[<expr>:1:3]
//!    │
//!  1 │ 2 *
//!    │   ┬
//!    │   ╰── not enough operands on the stack
//!    │
//!    │ Help: in postfix notation operands come before their operator, e.g. `2 3 +`
//! ───╯
//! ```
//!
//! Every other error is a single `error: ...` line.

use std::io::Write;
use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use pfx_parse::ParseError;

use crate::CliError;

/// Write `error` for a command run on `source`.
pub fn report_error(
    source: &str,
    error: &CliError,
    color: bool,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match error {
        CliError::Parse(parse_error) => write_parse_error(source, parse_error, color, out),
        other => writeln!(out, "error: {other}"),
    }
}

/// Render a parse error against the expression it came from.
pub fn write_parse_error(
    source: &str,
    error: &ParseError,
    color: bool,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let span = char_range(source, error.span().to_range());

    Report::build(ReportKind::Error, (), span.start)
        .with_config(Config::default().with_color(color))
        .with_message(error.to_string())
        .with_label(Label::new(span).with_message(label_message(error)))
        .with_help(error.hint())
        .finish()
        .write(Source::from(source), out)
}

fn label_message(error: &ParseError) -> &'static str {
    match error {
        ParseError::StackUnderflow { .. } => "not enough operands on the stack",
        ParseError::MalformedExpression { remaining: 0, .. } => "expected an operand here",
        ParseError::MalformedExpression { .. } => "these operands are never combined",
    }
}

/// Convert a byte range into the char range ariadne indexes by.
fn char_range(source: &str, bytes: Range<usize>) -> Range<usize> {
    let chars_before = |offset: usize| source.get(..offset).map_or(0, |s| s.chars().count());
    chars_before(bytes.start)..chars_before(bytes.end)
}
