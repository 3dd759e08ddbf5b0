//! mips32dec CLI - decode MIPS32 instruction words from arguments or files.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// mips32dec - MIPS32 instruction word decoder
#[derive(Parser, Debug)]
#[command(name = "mips32dec")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Output format: text, json, or csv
    #[arg(short, long, global = true, default_value = "text")]
    format: cli::OutputFormat,

    /// Parallel threads (default: CPU count)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// Log decoder diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode words given on the command line
    Decode {
        /// Words as 0x-prefixed hex or decimal
        #[arg(required = true, allow_negative_numbers = true)]
        words: Vec<String>,
    },

    /// Decode one word per line from a file
    File {
        /// Input file, or - for stdin
        #[arg(required = true)]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match args.command {
        Commands::Decode { words } => cli::decode::execute(&words, args.format, args.threads),
        Commands::File { path } => cli::file::execute(&path, args.format, args.threads),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
