use std::{fs, process};

use clap::Parser;
use symbra::{Bindings, Error, Expr, Value, evaluate, interpreter::lexer, parse, simplify};
use tracing::info;

/// symbra evaluates and simplifies symbolic arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells symbra to read the expression from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Binds a symbol for evaluation, as `NAME=VALUE`. May be repeated.
    #[arg(short, long = "bind", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    bindings: Vec<(String, Expr)>,

    /// Replaces a symbol with an expression before anything else, as
    /// `NAME=EXPR`. May be repeated.
    #[arg(short = 'S', long = "substitute", value_name = "NAME=EXPR", value_parser = parse_assignment)]
    substitutions: Vec<(String, Expr)>,

    /// Simplifies the expression before evaluating it.
    #[arg(short, long)]
    simplify: bool,

    /// Prints the token stream instead of evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Increase verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

/// Splits a `NAME=EXPR` argument and parses the right-hand side.
fn parse_assignment(arg: &str) -> Result<(String, Expr), String> {
    let (name, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{arg}'"))?;
    let expr = parse(value).map_err(|e| e.to_string())?;
    Ok((name.trim().to_string(), expr))
}

fn to_bindings(pairs: Vec<(String, Expr)>) -> Bindings {
    pairs.into_iter()
         .map(|(name, expr)| (name, Value::from(expr)))
         .collect()
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
                             .with_writer(std::io::stderr)
                             .init();
}

fn run(args: Args, source: &str) -> Result<String, Error> {
    if args.tokens {
        let tokens = lexer::tokenize(source)?;
        return Ok(tokens.iter()
                        .map(|(token, position)| format!("{position}\t{token:?}"))
                        .collect::<Vec<_>>()
                        .join("\n"));
    }

    let mut expr = parse(source)?;

    if !args.substitutions.is_empty() {
        expr = expr.substitute(&to_bindings(args.substitutions));
        info!(expression = %expr, "applied substitutions");
    }

    if args.simplify {
        expr = simplify(&expr);
    }

    let value = evaluate(&expr, &to_bindings(args.bindings))?;
    Ok(value.to_string())
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    match run(args, &source) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
