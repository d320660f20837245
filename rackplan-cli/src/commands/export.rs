//! Export command implementation.
//!
//! Writes one CSV row per placed product with its pallet string, in rack
//! order, for loading into the pallet feeder tooling.

use crate::error::CliError;
use crate::utils::{replay_document, GlobalOptions};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Export the pallet strings of a layout document as CSV.
#[derive(Args)]
pub struct ExportCommand {
    /// Layout document (YAML or JSON)
    #[arg(value_name = "LAYOUT")]
    pub layout: PathBuf,

    /// Write to this file instead of stdout
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, outcome) = replay_document(global, &self.layout)?;
        let entries = outcome.configuration.pallet_strings();

        let sink: Box<dyn Write> = match self.output {
            Some(ref path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout().lock()),
        };

        let mut writer = csv::Writer::from_writer(sink);
        for entry in &entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;

        if let Some(ref path) = self.output {
            if !global.quiet {
                eprintln!("Wrote {} pallet string(s) to {}", entries.len(), path.display());
            }
        }

        Ok(())
    }
}
