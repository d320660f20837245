//! Main entry point for the rackplan CLI.
//!
//! This is the command-line interface for the rackplan layout engine.
//! It provides commands for working with rack layouts:
//! - `profiles`: List the configured machine profiles
//! - `plan`: Replay a layout document and report flags
//! - `export`: Export pallet strings as CSV
//! - `assign`, `encode`: Run single engine steps

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route engine diagnostics to stderr at the requested verbosity
    let logger = rackplan::init_logger(cli.verbose, cli.quiet);
    if logger.install().is_err() {
        eprintln!("Warning: a logger is already installed");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Profiles(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Assign(cmd) => cmd.execute(&global),
        cli::Command::Encode(cmd) => cmd.execute(&global),
        cli::Command::Plan(cmd) => cmd.execute(&global),
        cli::Command::Export(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
