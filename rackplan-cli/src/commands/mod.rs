//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `profiles`: List the configured machine profiles
//! - `validate`: Validate a configuration file
//! - `assign`: Compute the dot a new tray would be assigned
//! - `encode`: Encode a pallet configuration string
//! - `plan`: Replay a layout document and print the rack
//! - `export`: Export pallet strings as CSV
//! - `completions`: Generate shell completion scripts

pub mod assign;
pub mod completions;
pub mod encode;
pub mod export;
pub mod plan;
pub mod profiles;
pub mod validate;

pub use assign::AssignCommand;
pub use completions::CompletionsCommand;
pub use encode::EncodeCommand;
pub use export::ExportCommand;
pub use plan::PlanCommand;
pub use profiles::ProfilesCommand;
pub use validate::ValidateCommand;
