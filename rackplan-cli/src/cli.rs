//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AssignCommand, CompletionsCommand, EncodeCommand, ExportCommand, PlanCommand,
    ProfilesCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for planning dispensing-machine rack layouts.
#[derive(Parser)]
#[command(name = "rackplan")]
#[command(version, about = "Plan dispensing-machine rack layouts", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file on top of the discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "RACKPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the configured machine profiles
    Profiles(ProfilesCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Compute the dot a new tray would be assigned
    Assign(AssignCommand),

    /// Encode a pallet configuration string
    Encode(EncodeCommand),

    /// Replay a layout document and print the resulting rack
    Plan(PlanCommand),

    /// Export the pallet strings of a layout document as CSV
    Export(ExportCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
