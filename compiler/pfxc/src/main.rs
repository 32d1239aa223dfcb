//! Postfix expression CLI.

use std::io::IsTerminal;

use pfxc::commands::{
    eval_expression, run_demo, show_info, simplify_expression, traverse_expression,
};
use pfxc::diagnostic::report_error;
use pfxc::{init_tracing, reject_flags, split_args, CliError, EvalOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let (source, flags) = split_args(&args[2..]);
    let mut stdout = std::io::stdout().lock();

    let result = match command.as_str() {
        "traverse" => {
            require_expression(&source, "pfx traverse <expr>");
            reject_flags(&flags).and_then(|()| traverse_expression(&source, &mut stdout))
        }
        "eval" => {
            if source.is_empty() {
                eprintln!("Usage: pfx eval <expr> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --x=<f64>        Value of x (default: 0)");
                eprintln!("  --y=<f64>        Value of y (default: 0)");
                eprintln!("  --at=<x>,<y>     Evaluate at this point (repeatable, not with --x/--y)");
                eprintln!("  --simplify       Fold constants before evaluating");
                std::process::exit(1);
            }
            EvalOptions::parse(&flags)
                .and_then(|options| eval_expression(&source, &options, &mut stdout))
        }
        "simplify" => {
            require_expression(&source, "pfx simplify <expr>");
            reject_flags(&flags).and_then(|()| simplify_expression(&source, &mut stdout))
        }
        "info" => {
            require_expression(&source, "pfx info <expr>");
            reject_flags(&flags).and_then(|()| show_info(&source, &mut stdout))
        }
        "demo" => run_demo(&mut stdout),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("pfx {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(error) = result {
        exit_with(&source, &error);
    }
}

fn require_expression(source: &str, usage: &str) {
    if source.is_empty() {
        eprintln!("Usage: {usage}");
        std::process::exit(1);
    }
}

fn exit_with(source: &str, error: &CliError) -> ! {
    let stderr = std::io::stderr();
    let color = stderr.is_terminal();
    let mut stderr = stderr.lock();
    if report_error(source, error, color, &mut stderr).is_err() {
        eprintln!("error: {error}");
    }
    std::process::exit(1);
}

fn print_usage() {
    println!("pfx: postfix expression trees");
    println!();
    println!("Usage: pfx <command> [options]");
    println!();
    println!("Commands:");
    println!("  traverse <expr>      Print in-order, pre-order and post-order labels");
    println!("  eval <expr>          Evaluate at a point, or at many with --at");
    println!("  simplify <expr>      Fold constant subexpressions");
    println!("  info <expr>          Show infix form, node count and height");
    println!("  demo                 Run the built-in example");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Eval options:");
    println!("  --x=<f64>           Value of x (default: 0)");
    println!("  --y=<f64>           Value of y (default: 0)");
    println!("  --at=<x>,<y>        Evaluate at this point (repeatable, runs in parallel)");
    println!("                      Cannot be combined with --x/--y");
    println!("  --simplify          Fold constants before evaluating");
    println!();
    println!("Environment:");
    println!("  PFX_LOG             Tracing filter, e.g. `debug` or `pfx_parse=trace`");
    println!("                      (falls back to RUST_LOG)");
    println!();
    println!("Examples:");
    println!("  pfx traverse \"x 2 ^ sin x y * +\"");
    println!("  pfx eval \"x 2 ^ sin x y * +\" --x=1 --y=2");
    println!("  pfx eval \"x y /\" --at=1,2 --at=3,0");
    println!("  pfx simplify \"x 2 3 + *\"        # ( x * 5 )");
    println!("  pfx info \"x 1 + 1 +\"");
}
