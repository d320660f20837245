//! Configuration system for rackplan.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `rackplan.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of every machine profile
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (RACKPLAN_*)
//! 3. Explicit files (via `ConfigBuilder::with_file`)
//! 4. Project config (`rackplan.yaml`, nearest ancestor directory)
//! 5. User config (`~/.rackplan/config.yaml`)
//!
//! Profiles accumulate across sources by name; all other fields are
//! overwritten.
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use rackplan::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/site"))
//!     .build()
//!     .unwrap();
//! let catalog = config.catalog().unwrap();
//! println!("{} machine profile(s)", catalog.len());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
