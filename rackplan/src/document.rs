//! Declarative rack descriptions replayed through the engine.
//!
//! A [`LayoutDocument`] names a machine profile and lists trays with their
//! products. Replaying it adds the trays and products to a fresh
//! [`Configuration`] in document order, exactly as an operator would. It is
//! an input description, not a saved layout: offsets, heights and flags are
//! always recomputed.
//!
//! # Examples
//!
//! ```
//! use rackplan::{ConfigurationTypeProfile, LayoutDocument, ProfileCatalog};
//!
//! let catalog = ProfileCatalog::new(vec![
//!     ConfigurationTypeProfile::builder("vx-40", 40).build().unwrap(),
//! ])
//! .unwrap();
//!
//! let document = LayoutDocument::from_yaml_str(r"
//! profile: vx-40
//! trays:
//!   - dot: 5
//!     products:
//!       - { width: 100, height: 120, depth: 50, stable: true }
//!   - products:
//!       - { width: 80, height: 200, depth: 60, stable: false }
//! ").unwrap();
//!
//! let outcome = document.apply(&catalog).unwrap();
//! assert_eq!(outcome.configuration.trays().len(), 2);
//! assert!(outcome.rejected.is_empty());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::product::Product;
use crate::profile::catalog::ProfileSource;
use crate::rack::{Configuration, TrayId, TrayPlacementOptions};

/// A rack described as a profile name and an ordered list of trays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutDocument {
    /// Machine-type name looked up in the profile catalog.
    pub profile: String,

    /// Elevator setting to activate before adding trays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevator: Option<String>,

    /// Trays in the order they are added.
    #[serde(default)]
    pub trays: Vec<TrayDocument>,
}

/// One tray of a [`LayoutDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrayDocument {
    /// Explicit dot; assigned automatically when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot: Option<u16>,

    /// Allow the tray on a reserved dot.
    #[serde(default)]
    pub allow_reserved: bool,

    /// Products in the order they are dropped on the tray.
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A product the placer refused during replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// The tray the product was dropped on.
    pub tray: TrayId,
    /// The refused product.
    pub product: Product,
    /// Why it was refused.
    pub reason: String,
}

/// Result of replaying a [`LayoutDocument`].
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    /// The rack built from the document.
    pub configuration: Configuration,
    /// Products that did not fit.
    pub rejected: Vec<Rejection>,
}

impl LayoutDocument {
    /// Parse a document from YAML (JSON is accepted as well).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the text is not a valid document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read, or
    /// [`Error::Configuration`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("failed to read layout document: {e}"),
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Build a rack by replaying the document.
    ///
    /// Products that do not fit are collected in
    /// [`ReplayOutcome::rejected`] and replay continues. Any other failure
    /// (unknown profile or elevator setting, unusable dot, invalid product)
    /// stops the replay.
    ///
    /// # Errors
    ///
    /// Returns the first error that is not a placement refusal.
    pub fn apply<S: ProfileSource>(&self, profiles: &S) -> Result<ReplayOutcome> {
        let profile = profiles.require(&self.profile)?.clone();
        let mut configuration = Configuration::new(profile)?;
        configuration.set_elevator(self.elevator.clone())?;

        let mut rejected = Vec::new();
        for tray_doc in &self.trays {
            let options = TrayPlacementOptions {
                allow_reserved: tray_doc.allow_reserved,
            };
            let tray = match tray_doc.dot {
                Some(dot) => configuration.add_tray_at(dot, options)?,
                None => configuration.add_tray(options)?,
            };

            for product in &tray_doc.products {
                match configuration.add_product(tray, product.clone()) {
                    Ok(_) => {}
                    Err(err @ Error::NoFit { .. }) => {
                        log::warn!("{err}");
                        rejected.push(Rejection {
                            tray,
                            product: product.clone(),
                            reason: err.to_string(),
                        });
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        Ok(ReplayOutcome {
            configuration,
            rejected,
        })
    }
}
