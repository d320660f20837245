//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, catalog lookup and layout replay.

use crate::error::CliError;
use clap::ValueEnum;
use rackplan::config::ConfigBuilder;
use rackplan::output::OutputFormat;
use rackplan::{Config, LayoutDocument, ProfileCatalog, ProfileSource, ReplayOutcome};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Output format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Human-readable text
    Human,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file
/// 3. Project `rackplan.yaml`
/// 4. User `~/.rackplan/config.yaml` (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Load configuration and build the profile catalog from it.
pub fn load_catalog(global: &GlobalOptions) -> Result<(Config, ProfileCatalog), CliError> {
    let config = load_configuration(global)?;
    let catalog = config
        .catalog()
        .map_err(|e| CliError::Config(e.to_string()))?;

    if catalog.is_empty() {
        log::warn!("no machine profiles configured");
    }

    Ok((config, catalog))
}

/// Load a layout document and replay it against the configured catalog.
///
/// A document without an elevator setting inherits the configured one when
/// its profile defines that setting. The merged configuration is returned
/// alongside the outcome.
pub fn replay_document(
    global: &GlobalOptions,
    path: &Path,
) -> Result<(Config, ReplayOutcome), CliError> {
    let (config, catalog) = load_catalog(global)?;
    let mut document = LayoutDocument::load(path)?;

    if document.elevator.is_none() {
        if let Some(elevator) = config.elevator.as_deref() {
            let profile = catalog.require(&document.profile)?;
            if profile.has_elevator_setting(elevator) {
                log::debug!("using configured elevator setting '{elevator}'");
                document.elevator = Some(elevator.to_string());
            }
        }
    }

    let outcome = document.apply(&catalog)?;
    Ok((config, outcome))
}
