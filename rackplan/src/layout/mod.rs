//! The rack/tray layout engine.
//!
//! Each component is a stateless unit struct with associated functions that
//! take the trays and the machine profile explicitly:
//!
//! - [`TrayPositionAssigner`]: picks a dot for a new tray and renumbers trays
//!   for display
//! - [`ProductPlacer`]: greedy leftmost-fit packing along a tray
//! - [`HeightResolver`]: derives tray height from its tallest canal
//! - [`CollisionDetector`]: flags overlapping trays and prohibited dots
//! - [`PalletConfigEncoder`]: hardware pallet strings
//!
//! [`crate::Configuration`] composes them; use it unless you need one step
//! in isolation.

pub mod assigner;
pub mod collision;
pub mod height;
pub mod pallet;
pub mod placer;
pub mod stats;

#[cfg(test)]
mod assigner_proptests;
#[cfg(test)]
mod collision_proptests;
#[cfg(test)]
mod placer_proptests;

pub use assigner::TrayPositionAssigner;
pub use collision::{CollisionDetector, CollisionReport, TrayFlags};
pub use height::HeightResolver;
pub use pallet::{PalletConfigEncoder, PalletEntry, UNKNOWN_PALLET};
pub use placer::ProductPlacer;
pub use stats::{RackStats, TrayStats};
