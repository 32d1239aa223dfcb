//! Command-line option parsing.

use pfx_eval::Bindings;

use crate::CliError;

/// Options for `pfx eval`.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalOptions {
    /// Value bound to `x` (`--x=<f64>`).
    pub x: f64,
    /// Value bound to `y` (`--y=<f64>`).
    pub y: f64,
    /// Sample points (`--at=<x>,<y>`, repeatable). When non-empty the
    /// expression is evaluated at each point; `--x`/`--y` are then rejected.
    pub points: Vec<Bindings>,
    /// Fold constants before evaluating (`--simplify`).
    pub simplify: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            x: 0.0,
            y: 0.0,
            points: Vec::new(),
            simplify: false,
        }
    }
}

impl EvalOptions {
    pub fn parse(flags: &[&str]) -> Result<Self, CliError> {
        let mut options = EvalOptions::default();
        let mut bound = false;

        for &flag in flags {
            if let Some(value) = flag.strip_prefix("--x=") {
                options.x = parse_number("--x", value)?;
                bound = true;
            } else if let Some(value) = flag.strip_prefix("--y=") {
                options.y = parse_number("--y", value)?;
                bound = true;
            } else if let Some(point) = flag.strip_prefix("--at=") {
                options.points.push(parse_point(point)?);
            } else if flag == "--simplify" {
                options.simplify = true;
            } else {
                return Err(CliError::UnknownOption(flag.to_string()));
            }
        }

        if bound && !options.points.is_empty() {
            return Err(CliError::PointsWithBindings);
        }
        Ok(options)
    }

    /// The single evaluation point given by `--x`/`--y`.
    pub fn bindings(&self) -> Bindings {
        Bindings::new(self.x, self.y)
    }
}

/// Separate `--flags` from the expression.
///
/// Every argument that does not start with `--` is an expression token, so
/// both `pfx eval "x 1 +"` and `pfx eval x 1 +` work. A leading single dash
/// is part of the expression (`-`, `-2.5`).
pub fn split_args(args: &[String]) -> (String, Vec<&str>) {
    let mut tokens = Vec::new();
    let mut flags = Vec::new();
    for arg in args {
        if arg.starts_with("--") {
            flags.push(arg.as_str());
        } else {
            tokens.push(arg.as_str());
        }
    }
    (tokens.join(" "), flags)
}

/// For commands that take no options.
pub fn reject_flags(flags: &[&str]) -> Result<(), CliError> {
    match flags.first() {
        Some(flag) => Err(CliError::UnknownOption((*flag).to_string())),
        None => Ok(()),
    }
}

fn parse_number(flag: &'static str, value: &str) -> Result<f64, CliError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CliError::InvalidNumber {
            flag,
            value: value.to_string(),
        })
}

fn parse_point(point: &str) -> Result<Bindings, CliError> {
    let invalid = || CliError::InvalidPoint(point.to_string());
    let (x, y) = point.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<f64>().map_err(|_| invalid())?;
    let y = y.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok(Bindings::new(x, y))
}
