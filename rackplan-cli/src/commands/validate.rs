//! Command to validate a rackplan configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use rackplan::config::{Config, ConfigValidator};
use std::path::PathBuf;

/// Validate a rackplan configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Parse the file
        let contents = std::fs::read_to_string(&self.config_path)?;
        let config: Config = match serde_yaml::from_str(&contents) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        // 3. Validate the configuration, then the catalog it produces
        let result = ConfigValidator::validate(&config).and_then(|()| config.catalog());
        match result {
            Ok(catalog) => {
                if !global.quiet {
                    println!(
                        "Configuration is valid ({} machine profile(s))",
                        catalog.len()
                    );
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
