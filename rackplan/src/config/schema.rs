//! Configuration schema definitions.
//!
//! This module defines the configuration structure for rackplan: the machine
//! profile catalog plus engine-wide overrides and output preferences.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::OutputFormat;
use crate::profile::catalog::ProfileCatalog;
use crate::profile::ConfigurationTypeProfile;

/// Complete configuration structure.
///
/// Every field is optional so that configuration files can be merged
/// field by field.
///
/// # Examples
///
/// ```
/// use rackplan::config::Config;
///
/// let config: Config = serde_yaml::from_str(r"
/// elevator: lift
/// collision_margin: 5
/// profiles:
///   - name: vx-40
///     amount_dots: 40
///     dot_delta: 25
///     min_tray_height: 100
///     tray_width: 640
///     low_extractor_height: 20
///     high_extractor_height: 45
///     pallet_delta: 135
///     elevator_reservations:
///       lift: [1, 2, 3]
/// ").unwrap();
///
/// let catalog = config.catalog().unwrap();
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Machine profile definitions.
    pub profiles: Option<Vec<ConfigurationTypeProfile>>,

    /// Elevator setting activated on new racks.
    pub elevator: Option<String>,

    /// Collision margin applied to every profile.
    pub collision_margin: Option<u32>,

    /// Maximum product height applied to every profile.
    pub max_product_height: Option<u32>,

    /// Output format for reports.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Build the profile catalog, applying the engine-wide overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if any profile is invalid after overrides, or if two
    /// profiles share a name.
    pub fn catalog(&self) -> Result<ProfileCatalog> {
        let profiles = self
            .profiles
            .iter()
            .flatten()
            .cloned()
            .map(|mut profile| {
                if let Some(margin) = self.collision_margin {
                    profile.collision_margin = margin;
                }
                if let Some(height) = self.max_product_height {
                    profile.max_product_height = height;
                }
                profile
            })
            .collect();

        ProfileCatalog::new(profiles)
    }

    /// The configured output format, or the default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}
