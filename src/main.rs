use std::{fs, path::PathBuf};

use arrex::Expression;
use clap::Parser;

/// arrex evaluates arithmetic expressions over scalar and subscripted array
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a path to a file whose first line is the
    /// expression.
    #[arg(short, long)]
    file: bool,

    /// Path to a file of value assignments, one `name value` or
    /// `name length (idx,val) ...` line per symbol.
    #[arg(short, long)]
    values: Option<PathBuf>,

    /// Print the discovered scalar and array symbols before the result.
    #[arg(short, long)]
    symbols: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let text = if args.file {
        let contents = fs::read_to_string(&args.expression).unwrap_or_else(|_| {
            eprintln!("Failed to read the expression file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            std::process::exit(1);
        });
        contents.lines().next().unwrap_or_default().to_string()
    } else {
        args.expression
    };

    let mut expression = Expression::new(text);
    expression.discover_symbols();

    if let Some(path) = &args.values {
        let contents = fs::read_to_string(path).unwrap_or_else(|_| {
            eprintln!("Failed to read the values file '{}'. Perhaps this file does not exist?",
                      path.display());
            std::process::exit(1);
        });
        if let Err(e) = expression.load_values(contents.lines()) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    if args.symbols {
        for symbol in expression.scalars() {
            println!("{symbol}");
        }
        for symbol in expression.arrays() {
            println!("{symbol}");
        }
    }

    println!("{}", expression.evaluate());
}
