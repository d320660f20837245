//! Profiles command implementation.
//!
//! This module implements the `profiles` command, which lists the machine
//! profiles known to the merged configuration.

use crate::error::CliError;
use crate::utils::{load_catalog, FormatArg, GlobalOptions};
use clap::Args;
use rackplan::ConfigurationTypeProfile;
use std::fmt::Write as _;

/// List the configured machine profiles.
#[derive(Args)]
pub struct ProfilesCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: FormatArg,
}

impl ProfilesCommand {
    /// Execute the profiles command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, catalog) = load_catalog(global)?;

        match self.format {
            FormatArg::Json => {
                let profiles: Vec<&ConfigurationTypeProfile> = catalog.iter().collect();
                let json = serde_json::to_string_pretty(&profiles)
                    .map_err(|e| CliError::Library(e.into()))?;
                println!("{json}");
            }
            FormatArg::Human => {
                if catalog.is_empty() {
                    if !global.quiet {
                        eprintln!("No machine profiles configured");
                    }
                    return Ok(());
                }
                for profile in catalog.iter() {
                    println!("{}", describe(profile, global.verbose));
                }
            }
        }

        Ok(())
    }
}

/// One line per profile; verbose adds the reservation details.
fn describe(profile: &ConfigurationTypeProfile, verbose: bool) -> String {
    let mut line = format!(
        "{}\t{} dots\t{}mm trays\tdot delta {}mm",
        profile.name, profile.amount_dots, profile.tray_width, profile.dot_delta
    );

    if verbose {
        let _ = write!(line, "\treserved {:?}", profile.reserved_dots);
        let _ = write!(line, "\tdouble {:?}", profile.double_dot_positions);
        for (setting, dots) in &profile.elevator_reservations {
            let _ = write!(line, "\televator {setting} {dots:?}");
        }
    }

    line
}
