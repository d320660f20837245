//! Serializable rack snapshot.

use serde::Serialize;

use crate::document::{Rejection, ReplayOutcome};
use crate::layout::{PalletConfigEncoder, RackStats};
use crate::product::Extractor;
use crate::profile::DotPosition;
use crate::rack::{Configuration, TrayId};

/// Snapshot of a rack for display and export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    /// Machine-type name.
    pub profile: String,
    /// Active elevator setting.
    pub elevator: Option<String>,
    /// Trays in rack order.
    pub trays: Vec<TrayReport>,
    /// Products refused during replay.
    pub rejected: Vec<RejectionReport>,
    /// Utilisation figures.
    pub stats: RackStats,
}

/// One tray of a [`LayoutReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrayReport {
    /// Tray identifier.
    pub id: TrayId,
    /// Dot position.
    pub dot: DotPosition,
    /// Display order.
    pub display_order: usize,
    /// Derived height.
    pub height: u32,
    /// Tray width.
    pub width: u32,
    /// Overlaps another tray.
    pub has_collision: bool,
    /// Sits on a prohibited dot.
    pub is_prohibited: bool,
    /// Placed products, left to right.
    pub products: Vec<ProductReport>,
}

/// One placed product of a [`TrayReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductReport {
    /// On-tray index.
    pub index: usize,
    /// Article label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Left edge on the tray.
    pub x_offset: u32,
    /// Product width.
    pub width: u32,
    /// Product height.
    pub height: u32,
    /// Product depth.
    pub depth: u32,
    /// Extractor under the product.
    pub extractor: Extractor,
    /// Hardware pallet string.
    pub pallet: String,
}

/// A refused product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectionReport {
    /// Tray the product was dropped on.
    pub tray: TrayId,
    /// Article label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Product width.
    pub width: u32,
    /// Why it was refused.
    pub reason: String,
}

impl LayoutReport {
    /// Snapshot a rack.
    #[must_use]
    pub fn from_configuration(configuration: &Configuration) -> Self {
        let profile = configuration.profile();
        let collisions = configuration.collisions();

        let trays = configuration
            .trays()
            .iter()
            .map(|tray| {
                let flags = collisions.get(tray.id()).unwrap_or_default();
                TrayReport {
                    id: tray.id(),
                    dot: tray.dot_position(),
                    display_order: tray.display_order(),
                    height: tray.height(),
                    width: tray.width(),
                    has_collision: flags.has_collision,
                    is_prohibited: flags.is_prohibited,
                    products: tray
                        .products()
                        .iter()
                        .map(|placed| {
                            let product = placed.product();
                            ProductReport {
                                index: placed.on_tray_index(),
                                name: product.name.clone(),
                                x_offset: placed.x_offset(),
                                width: product.width,
                                height: product.height,
                                depth: product.depth,
                                extractor: placed.extractor(),
                                pallet: PalletConfigEncoder::encode(product, profile.pallet_delta),
                            }
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            profile: profile.name.clone(),
            elevator: configuration.elevator().map(str::to_string),
            trays,
            rejected: Vec::new(),
            stats: configuration.stats(),
        }
    }

    /// Snapshot a replayed document, including its rejections.
    #[must_use]
    pub fn from_outcome(outcome: &ReplayOutcome) -> Self {
        let mut report = Self::from_configuration(&outcome.configuration);
        report.rejected = outcome.rejected.iter().map(RejectionReport::from).collect();
        report
    }

    /// Returns `true` if no tray is flagged and no product was refused.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
            && self
                .trays
                .iter()
                .all(|tray| !tray.has_collision && !tray.is_prohibited)
    }
}

impl From<&Rejection> for RejectionReport {
    fn from(rejection: &Rejection) -> Self {
        Self {
            tray: rejection.tray,
            name: rejection.product.name.clone(),
            width: rejection.product.width,
            reason: rejection.reason.clone(),
        }
    }
}
