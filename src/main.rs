use std::{fs, path::PathBuf};

use clap::Parser;
use nokch::{
    error::ParseError,
    parse_tokens, tokenize,
    util::source::{display_name, validate_source_path},
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// nokch checks a script: it tokenizes and parses a `.nkch` file and reports
/// the first syntax error it finds.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the `.nkch` file to read.
    #[arg(value_parser = validate_source_path)]
    path: PathBuf,

    /// Print the token sequence.
    #[arg(long)]
    dump_tokens: bool,

    /// Print the parsed statements.
    #[arg(long)]
    dump_ast: bool,

    /// Colour diagnostics with ANSI escapes.
    #[arg(long)]
    color: bool,

    /// Raise log verbosity (`-v` for debug, `-vv` for trace). `RUST_LOG`
    /// takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "nokch=warn",
        1 => "nokch=debug",
        _ => "nokch=trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let source = fs::read_to_string(&args.path).unwrap_or_else(|e| {
        eprintln!("Failed to read the input file '{}': {e}", args.path.display());
        std::process::exit(1);
    });
    let file_name = display_name(&args.path);
    debug!(file = %file_name, "loaded source");

    let tokens =
        tokenize(&source).unwrap_or_else(|e| report(&e, &file_name, &source, args.color));
    if args.dump_tokens {
        for token in &tokens {
            println!("{token}");
        }
    }

    let program =
        parse_tokens(&tokens).unwrap_or_else(|e| report(&e, &file_name, &source, args.color));
    if args.dump_ast {
        for statement in &program {
            println!("{statement}");
        }
    }
}

/// Prints the diagnostic for `err` and exits with a failure status.
fn report(err: &ParseError, file_name: &str, source: &str, color: bool) -> ! {
    print!("{}", err.to_diagnostic().render(file_name, source, color));
    std::process::exit(1);
}
