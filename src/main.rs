//! Tally CLI
//!
//! Sums and averages numeric sequences from arguments, files, or stdin.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use tally::commands::{execute_sum, validate_args, SumArgs};
use tally::utils::config::SCHEMA_VERSION;

/// Tally - sum and average summaries for numeric sequences
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sum and average a sequence of numbers
    Sum {
        /// Numbers to summarize (alternative to --input)
        values: Vec<String>,

        /// Read numbers from a text file; use '-' for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output path for a JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Sum {
            values,
            input,
            output,
        } => {
            let args = SumArgs {
                values,
                input,
                output,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute sum
            execute_sum(args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("tally v{}", env!("CARGO_PKG_VERSION"));
    println!("Report schema: v{}", SCHEMA_VERSION);
}
