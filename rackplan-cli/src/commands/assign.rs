//! Assign command implementation.
//!
//! Runs the tray position assigner over a list of occupied dots and prints
//! the dot a new tray would get. With `--profile`, the result is also
//! checked against that machine's rack.

use crate::error::CliError;
use crate::utils::{load_catalog, GlobalOptions};
use clap::Args;
use rackplan::{DotPosition, Error, ProfileSource, TrayPositionAssigner};

/// Compute the dot a new tray would be assigned.
#[derive(Args)]
pub struct AssignCommand {
    /// Dots already holding a tray
    #[arg(value_name = "DOT")]
    pub dots: Vec<u16>,

    /// Check the result against this machine profile
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Elevator setting used for the reservation check
    #[arg(long, value_name = "SETTING", requires = "profile")]
    pub elevator: Option<String>,
}

impl AssignCommand {
    /// Execute the assign command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dots = self
            .dots
            .iter()
            .map(|&dot| {
                DotPosition::try_from(dot)
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let assigned = TrayPositionAssigner::assign_from_dots(dots);

        if let Some(ref name) = self.profile {
            let (_, catalog) = load_catalog(global)?;
            let profile = catalog.require(name)?;

            if !profile.contains(assigned.value()) {
                return Err(Error::PositionOutOfRange {
                    position: assigned.value(),
                    amount_dots: profile.amount_dots,
                }
                .into());
            }
            if profile.is_reserved(assigned.value(), self.elevator.as_deref()) && !global.quiet {
                eprintln!("Warning: dot {assigned} is reserved on profile '{name}'");
            }
        }

        println!("{assigned}");
        Ok(())
    }
}
