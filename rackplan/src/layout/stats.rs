//! Read-only utilisation figures for display.
//!
//! These are derived on demand from the trays and are never authoritative
//! state.

use serde::Serialize;

use crate::product::ExtractorKind;
use crate::profile::{ConfigurationTypeProfile, DotPosition};
use crate::rack::{Tray, TrayId};

/// Utilisation of a single tray.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrayStats {
    /// The tray.
    pub tray: TrayId,
    /// Its dot position.
    pub dot: DotPosition,
    /// Its display order.
    pub display_order: usize,
    /// Number of placed products.
    pub product_count: usize,
    /// Sum of product widths.
    pub used_width: u32,
    /// Tray width.
    pub width: u32,
    /// `used_width` as a percentage of `width`.
    pub utilization_percent: f64,
    /// Products on a low extractor.
    pub low_extractors: usize,
    /// Products on a high extractor.
    pub high_extractors: usize,
}

impl TrayStats {
    /// Compute the figures for one tray.
    #[must_use]
    pub fn for_tray(tray: &Tray) -> Self {
        let used_width = tray.used_width();
        let low_extractors = tray
            .products()
            .iter()
            .filter(|p| p.extractor().kind() == ExtractorKind::Low)
            .count();

        Self {
            tray: tray.id(),
            dot: tray.dot_position(),
            display_order: tray.display_order(),
            product_count: tray.products().len(),
            used_width,
            width: tray.width(),
            utilization_percent: percent(u64::from(used_width), u64::from(tray.width())),
            low_extractors,
            high_extractors: tray.products().len() - low_extractors,
        }
    }
}

/// Rack-level rollup of [`TrayStats`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RackStats {
    /// Dots on the rack.
    pub amount_dots: u16,
    /// Trays on the rack.
    pub tray_count: usize,
    /// Products across all trays.
    pub product_count: usize,
    /// Total product width as a percentage of total tray width.
    pub utilization_percent: f64,
    /// Per-tray figures in rack order.
    pub trays: Vec<TrayStats>,
}

impl RackStats {
    /// Compute the figures for a whole rack.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::{Configuration, ConfigurationTypeProfile, Product, TrayPlacementOptions};
    ///
    /// let profile = ConfigurationTypeProfile::builder("demo", 40).tray_width(400).build().unwrap();
    /// let mut rack = Configuration::new(profile).unwrap();
    /// let tray = rack.add_tray(TrayPlacementOptions::default()).unwrap();
    /// rack.add_product(tray, Product::new(100, 100, 50, true)).unwrap();
    ///
    /// let stats = rack.stats();
    /// assert_eq!(stats.product_count, 1);
    /// assert!((stats.utilization_percent - 25.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn collect(trays: &[Tray], profile: &ConfigurationTypeProfile) -> Self {
        let trays: Vec<TrayStats> = trays.iter().map(TrayStats::for_tray).collect();
        let used: u64 = trays.iter().map(|t| u64::from(t.used_width)).sum();
        let total: u64 = trays.iter().map(|t| u64::from(t.width)).sum();

        Self {
            amount_dots: profile.amount_dots,
            tray_count: trays.len(),
            product_count: trays.iter().map(|t| t.product_count).sum(),
            utilization_percent: percent(used, total),
            trays,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
