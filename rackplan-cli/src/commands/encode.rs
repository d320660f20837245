//! Encode command implementation.
//!
//! Prints the pallet configuration string for a single product.

use crate::error::CliError;
use crate::utils::{load_catalog, GlobalOptions};
use clap::Args;
use rackplan::{PalletConfigEncoder, Product, ProfileSource};

/// Encode a pallet configuration string.
#[derive(Args)]
pub struct EncodeCommand {
    /// Product depth in millimetres
    #[arg(long, value_name = "MM")]
    pub depth: u32,

    /// Product width in millimetres
    #[arg(long, value_name = "MM")]
    pub width: u32,

    /// Pallet delta of the machine
    #[arg(
        long,
        value_name = "DELTA",
        conflicts_with = "profile",
        required_unless_present = "profile"
    )]
    pub pallet_delta: Option<f64>,

    /// Take the pallet delta from this machine profile
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,
}

impl EncodeCommand {
    /// Execute the encode command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let pallet_delta = match (self.pallet_delta, self.profile) {
            (Some(delta), _) => delta,
            (None, Some(name)) => {
                let (_, catalog) = load_catalog(global)?;
                catalog.require(&name)?.pallet_delta
            }
            (None, None) => {
                return Err(CliError::InvalidArguments(
                    "one of --pallet-delta or --profile is required".to_string(),
                ))
            }
        };

        if !pallet_delta.is_finite() || pallet_delta <= 0.0 {
            return Err(CliError::InvalidArguments(format!(
                "pallet delta must be positive, got {pallet_delta}"
            )));
        }

        // Height and stability do not affect the pallet string
        let product = Product::new(self.width, 0, self.depth, true);
        println!("{}", PalletConfigEncoder::encode(&product, pallet_delta));
        Ok(())
    }
}
