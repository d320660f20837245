#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rackplan
//!
//! A layout engine for dispensing-machine racks.
//!
//! A rack exposes a fixed number of mounting positions ("dots"). Trays are
//! mounted on dots, and products are packed left-to-right on each tray. This
//! library decides where new trays go, packs products without overlap,
//! derives tray heights, flags trays that collide or sit on reserved dots,
//! and encodes products into hardware pallet strings.
//!
//! ## Core Types
//!
//! - [`ConfigurationTypeProfile`] and [`DotPosition`]: machine-family parameters
//! - [`Configuration`] and [`Tray`]: one rack and its trays
//! - [`Product`] and [`PlacedProduct`]: products before and after placement
//! - [`layout`]: the assigner, placer, height resolver, collision detector
//!   and pallet encoder
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use rackplan::{Configuration, ConfigurationTypeProfile, Product, TrayPlacementOptions};
//!
//! let profile = ConfigurationTypeProfile::builder("demo", 40)
//!     .tray_width(640)
//!     .build()
//!     .unwrap();
//! let mut rack = Configuration::new(profile).unwrap();
//!
//! let tray = rack.add_tray(TrayPlacementOptions::default()).unwrap();
//! let offset = rack.add_product(tray, Product::new(100, 120, 50, true)).unwrap();
//! assert_eq!(offset, 0);
//! assert!(rack.collisions().is_clean());
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod layout;
pub mod logging;
pub mod output;
pub mod product;
pub mod profile;
pub mod rack;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use document::{LayoutDocument, ReplayOutcome};
pub use error::{Error, NoFitReason, Result};
pub use layout::{
    CollisionDetector, CollisionReport, HeightResolver, PalletConfigEncoder, ProductPlacer,
    TrayFlags, TrayPositionAssigner,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use product::{Extractor, ExtractorKind, PlacedProduct, Product};
pub use profile::catalog::{ProfileCatalog, ProfileSource};
pub use profile::{ConfigurationTypeProfile, DotPosition};
pub use rack::{Configuration, Tray, TrayId, TrayPlacementOptions};
