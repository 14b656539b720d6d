use std::fs;

use clap::Parser;
use extree::{run_commands, visitors::ConsoleSink};
use tracing_subscriber::EnvFilter;

/// extree is an expression-tree calculator driven by a small command
/// language: format, expr, print, eval, set, quit. A bare expression runs
/// the whole pipeline in one go.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells extree to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = run_commands(&script, ConsoleSink) {
        eprintln!("{e}");
    }
}
