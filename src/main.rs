use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use lexcalc::{evaluate, tokenize};
use tracing_subscriber::{EnvFilter, fmt};

/// lexcalc evaluates arithmetic expressions strictly from left to right.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the scanned tokens instead of the result.
    #[arg(short, long)]
    tokens: bool,

    /// Expression to evaluate. Without one, lines are read from stdin.
    expression: Option<String>,
}

const PROMPT: &str = "calc> ";

/// Evaluates or tokenizes one line and prints the outcome.
///
/// Returns `false` if the line failed.
fn run_line(line: &str, tokens: bool) -> bool {
    let outcome = if tokens {
        tokenize(line).map(|tokens| {
                          for token in tokens {
                              println!("{token}");
                          }
                      })
    } else {
        evaluate(line).map(|value| println!("{value}"))
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        return false;
    }

    true
}

fn repl(tokens: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;

        match line.trim() {
            "" => {},
            "exit" | "quit" => return Ok(()),
            _ => {
                run_line(&line, tokens);
            },
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG controls the log level; defaults to WARN.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    if let Some(expression) = args.expression {
        return if run_line(&expression, args.tokens) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    if let Err(e) = repl(args.tokens) {
        eprintln!("Failed to read from stdin: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
