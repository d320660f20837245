//! Plan command implementation.
//!
//! This module implements the `plan` command, which replays a layout
//! document through the engine and prints the resulting rack.

use crate::error::CliError;
use crate::utils::{replay_document, FormatArg, GlobalOptions};
use clap::Args;
use rackplan::output::{LayoutReport, OutputFormat};
use std::path::PathBuf;

/// Replay a layout document and print the resulting rack.
#[derive(Args)]
pub struct PlanCommand {
    /// Layout document (YAML or JSON)
    #[arg(value_name = "LAYOUT")]
    pub layout: PathBuf,

    /// Output format (defaults to the configured one)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,

    /// Fail if any tray is flagged or any product was rejected
    #[arg(long)]
    pub strict: bool,
}

impl PlanCommand {
    /// Execute the plan command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, outcome) = replay_document(global, &self.layout)?;
        let format = self
            .format
            .map_or_else(|| config.output_format(), OutputFormat::from);

        let report = LayoutReport::from_outcome(&outcome);

        let output = format.create_formatter().format(&report)?;
        println!("{output}");

        if self.strict && !report.is_clean() {
            return Err(CliError::SemanticFailure(summarize_flags(&report)));
        }

        Ok(())
    }
}

fn summarize_flags(report: &LayoutReport) -> String {
    let colliding = report.trays.iter().filter(|t| t.has_collision).count();
    let prohibited = report.trays.iter().filter(|t| t.is_prohibited).count();
    format!(
        "Layout is not clean: {colliding} colliding tray(s), {prohibited} prohibited tray(s), {} rejected product(s)",
        report.rejected.len()
    )
}
