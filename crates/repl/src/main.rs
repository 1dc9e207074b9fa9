//! fibr - Interactive demo for the recursive Fibonacci calculator
//!
//! Usage:
//!   fibr          # Interactive: banner, first 10 values, then a prompt loop
//!   fibr 25       # One-shot: print F(25) and exit
//!
//! The prompt loop reads one integer per line and prints `F(n) = <value>`.
//! Negative or malformed input is reported and the loop continues; Ctrl-C
//! or Ctrl-D prints a goodbye message and exits.

use clap::Parser as ClapParser;
use fib_core::fibonacci;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::process;
use tracing::debug;

#[derive(ClapParser)]
#[command(name = "fibr")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fibonacci sequence calculator (recursive method)", long_about = None)]
struct Args {
    /// Index to compute non-interactively (starts the prompt loop if omitted)
    n: Option<i64>,
}

/// Prompt shown by the interactive loop
const PROMPT: &str = "Enter a non-negative integer: ";

/// How many leading values the banner lists
const INTRO_COUNT: i64 = 10;

fn main() {
    // Set up logging (silent unless RUST_LOG is set)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // One-shot mode: compute a single index and exit
    if let Some(n) = args.n {
        match fibonacci(n) {
            Ok(value) => println!("F({}) = {}", n, value),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    print_intro();
    prompt_loop();
}

/// Banner and the first few values of the sequence
fn print_intro() {
    println!("Fibonacci Sequence Calculator (Recursive Method)");
    println!("{}", "=".repeat(45));

    println!("\nFirst {} Fibonacci numbers:", INTRO_COUNT);
    for i in 0..INTRO_COUNT {
        // Indices this small cannot fail validation
        if let Ok(value) = fibonacci(i) {
            println!("F({}) = {}", i, value);
        }
    }

    println!("\nCalculate specific Fibonacci number:");
}

/// Read-compute-print loop
fn prompt_loop() {
    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error initializing readline: {}", e);
            process::exit(1);
        }
    };

    loop {
        let readline = rl.readline(PROMPT);
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);
                debug!(input = line, "parsing");

                match line.parse::<i64>() {
                    Ok(n) => match fibonacci(n) {
                        Ok(value) => {
                            debug!(n, "computed");
                            println!("F({}) = {}", n, value);
                        }
                        Err(e) => println!("Error: {}", e),
                    },
                    Err(_) => println!("Error: invalid integer input: {}", line),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }
}
