//! Configuration validation.
//!
//! This module validates configuration fields before they reach the engine,
//! so that a bad file is reported with the field that caused it.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use rackplan::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations, and
    /// [`Error::InvalidProfile`] for profiles the engine would refuse.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref elevator) = config.elevator {
            Self::validate_identifier("elevator", elevator)?;
        }

        if let Some(height) = config.max_product_height {
            if height == 0 {
                return Err(Error::Validation {
                    field: "max_product_height".into(),
                    message: "Must be greater than 0".into(),
                });
            }
        }

        if let Some(ref profiles) = config.profiles {
            let mut seen = HashSet::new();
            for profile in profiles {
                Self::validate_identifier("profiles.name", &profile.name)?;
                if !seen.insert(profile.name.as_str()) {
                    return Err(Error::Validation {
                        field: "profiles".into(),
                        message: format!("Duplicate profile name '{}'", profile.name),
                    });
                }
                profile.validate()?;
            }

            if let Some(ref elevator) = config.elevator {
                if !profiles.iter().any(|p| p.has_elevator_setting(elevator)) {
                    log::warn!("elevator setting '{elevator}' is not defined by any profile");
                }
            }
        }

        Ok(())
    }

    /// Validate string identifiers (profile names, elevator settings).
    ///
    /// Checks that the identifier is non-empty after trimming, contains no
    /// null bytes, and is not longer than 255 characters.
    fn validate_identifier(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if trimmed.len() > 255 {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot exceed 255 characters".into(),
            });
        }

        Ok(())
    }
}
