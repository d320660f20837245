//! Environment variable handling for configuration overrides.
//!
//! This module provides support for RACKPLAN_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use rackplan::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `RACKPLAN_ELEVATOR`, `RACKPLAN_COLLISION_MARGIN`,
    /// `RACKPLAN_MAX_PRODUCT_HEIGHT` and `RACKPLAN_OUTPUT_FORMAT`. An empty
    /// `RACKPLAN_ELEVATOR` clears the elevator setting.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(elevator) = env::var("RACKPLAN_ELEVATOR") {
            config.elevator = if elevator.trim().is_empty() {
                None
            } else {
                Some(elevator)
            };
        }

        if let Ok(val) = env::var("RACKPLAN_COLLISION_MARGIN") {
            config.collision_margin = Some(Self::parse_number("RACKPLAN_COLLISION_MARGIN", &val)?);
        }

        if let Ok(val) = env::var("RACKPLAN_MAX_PRODUCT_HEIGHT") {
            config.max_product_height =
                Some(Self::parse_number("RACKPLAN_MAX_PRODUCT_HEIGHT", &val)?);
        }

        if let Ok(val) = env::var("RACKPLAN_OUTPUT_FORMAT") {
            config.output_format = Some(val.parse().map_err(|_| Error::Validation {
                field: "RACKPLAN_OUTPUT_FORMAT".into(),
                message: format!("Invalid output format: '{val}' (expected human or json)"),
            })?);
        }

        Ok(())
    }

    /// Parse a millimetre value from a string.
    fn parse_number<T: FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }
}
