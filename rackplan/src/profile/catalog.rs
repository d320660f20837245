//! Profile lookup by machine-type name.
//!
//! The engine never owns machine-type metadata; it asks a [`ProfileSource`]
//! for the profile of a given machine type. [`ProfileCatalog`] is the
//! in-memory implementation backed by the configuration files.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::profile::ConfigurationTypeProfile;

/// Trait for looking up machine profiles by name.
///
/// This trait abstracts the external machine-type catalog so the engine can
/// be driven by configuration files, a database-backed catalog, or
/// synthetic profiles in tests.
pub trait ProfileSource {
    /// Look up the profile for a machine type.
    fn profile(&self, name: &str) -> Option<&ConfigurationTypeProfile>;

    /// Look up a profile, failing if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProfileNotFound`] if no profile has that name.
    fn require(&self, name: &str) -> Result<&ConfigurationTypeProfile> {
        self.profile(name).ok_or_else(|| Error::ProfileNotFound {
            name: name.to_string(),
        })
    }
}

/// Validated set of machine profiles keyed by machine-type name.
///
/// # Examples
///
/// ```
/// use rackplan::{ConfigurationTypeProfile, ProfileCatalog, ProfileSource};
///
/// let profile = ConfigurationTypeProfile::builder("vx-40", 40).build().unwrap();
/// let catalog = ProfileCatalog::new(vec![profile]).unwrap();
///
/// assert!(catalog.profile("vx-40").is_some());
/// assert!(catalog.require("unknown").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileCatalog {
    profiles: BTreeMap<String, ConfigurationTypeProfile>,
}

impl ProfileCatalog {
    /// Build a catalog, validating every profile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfile`] if any profile is invalid, or
    /// [`Error::Validation`] if two profiles share a name.
    pub fn new(profiles: Vec<ConfigurationTypeProfile>) -> Result<Self> {
        let mut catalog = BTreeMap::new();

        for profile in profiles {
            profile.validate()?;
            let name = profile.name.clone();
            if catalog.insert(name.clone(), profile).is_some() {
                return Err(Error::Validation {
                    field: "profiles".into(),
                    message: format!("duplicate profile name '{name}'"),
                });
            }
        }

        Ok(Self { profiles: catalog })
    }

    /// Number of profiles in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if the catalog has no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Profiles in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigurationTypeProfile> {
        self.profiles.values()
    }
}

impl ProfileSource for ProfileCatalog {
    fn profile(&self, name: &str) -> Option<&ConfigurationTypeProfile> {
        self.profiles.get(name)
    }
}
