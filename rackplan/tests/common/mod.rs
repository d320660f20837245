//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the rackplan library.

use std::path::PathBuf;

use rackplan::config::ConfigLoader;
use rackplan::{Configuration, ConfigurationTypeProfile, ProfileCatalog, TrayId};

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The catalog defined by `tests/fixtures/catalog.yaml`.
#[allow(dead_code)]
pub fn fixture_catalog() -> ProfileCatalog {
    ConfigLoader::load_file(&fixture_path("catalog.yaml"))
        .unwrap()
        .catalog()
        .unwrap()
}

/// Builder for test profiles with sensible defaults.
///
/// Defaults to a 40-dot rack, 25mm dot spacing, 100mm minimum tray height
/// and 640mm trays.
#[allow(dead_code)]
pub struct ProfileFixture {
    name: String,
    amount_dots: u16,
    tray_width: u32,
    margin: u32,
    reserved: Vec<u16>,
    double_dots: Vec<u16>,
}

impl ProfileFixture {
    /// Creates a new fixture builder with default values.
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            name: "fixture".to_string(),
            amount_dots: 40,
            tray_width: 640,
            margin: 0,
            reserved: Vec::new(),
            double_dots: Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub fn with_dots(mut self, amount_dots: u16) -> Self {
        self.amount_dots = amount_dots;
        self
    }

    #[allow(dead_code)]
    pub fn with_tray_width(mut self, width: u32) -> Self {
        self.tray_width = width;
        self
    }

    #[allow(dead_code)]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    #[allow(dead_code)]
    pub fn with_reserved(mut self, dot: u16) -> Self {
        self.reserved.push(dot);
        self
    }

    #[allow(dead_code)]
    pub fn with_double_dot(mut self, dot: u16) -> Self {
        self.double_dots.push(dot);
        self
    }

    #[allow(dead_code)]
    pub fn build(self) -> ConfigurationTypeProfile {
        let mut builder = ConfigurationTypeProfile::builder(self.name, self.amount_dots)
            .tray_width(self.tray_width)
            .collision_margin(self.margin);
        for dot in self.reserved {
            builder = builder.reserved_dot(dot);
        }
        for dot in self.double_dots {
            builder = builder.double_dot(dot);
        }
        builder.build().unwrap()
    }

    /// Build the profile and wrap it in an empty rack.
    #[allow(dead_code)]
    pub fn rack(self) -> Configuration {
        Configuration::new(self.build()).unwrap()
    }
}

impl Default for ProfileFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Dots of all trays, in rack order.
#[allow(dead_code)]
pub fn dots(rack: &Configuration) -> Vec<u16> {
    rack.trays()
        .iter()
        .map(|t| t.dot_position().value())
        .collect()
}

/// Offsets of the products on one tray.
#[allow(dead_code)]
pub fn offsets(rack: &Configuration, tray: TrayId) -> Vec<u32> {
    rack.tray(tray)
        .unwrap()
        .products()
        .iter()
        .map(rackplan::PlacedProduct::x_offset)
        .collect()
}
