//! Vertical collision and reserved-dot detection.
//!
//! Each tray occupies the vertical interval `[bottom_y, bottom_y + height)`
//! on the rack, widened by the profile's collision margin at both ends. The
//! detector recomputes all flags from the full tray set on every call and
//! keeps no state between calls.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::profile::{ConfigurationTypeProfile, DotPosition};
use crate::rack::{Tray, TrayId};

/// Advisory flags for one tray.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrayFlags {
    /// The tray's footprint overlaps another tray's footprint.
    pub has_collision: bool,
    /// The tray sits on a reserved dot, or lacks double-dot clearance.
    pub is_prohibited: bool,
}

impl TrayFlags {
    /// Returns `true` if neither flag is set.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.has_collision && !self.is_prohibited
    }
}

/// Flags for every tray of a rack, keyed by tray.
///
/// # Examples
///
/// ```
/// use rackplan::CollisionReport;
///
/// let report = CollisionReport::default();
/// assert!(report.is_clean());
/// assert_eq!(report.colliding().count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CollisionReport {
    flags: BTreeMap<TrayId, TrayFlags>,
}

impl CollisionReport {
    /// Flags for a single tray.
    #[must_use]
    pub fn get(&self, tray: TrayId) -> Option<TrayFlags> {
        self.flags.get(&tray).copied()
    }

    /// All flags in tray order.
    pub fn iter(&self) -> impl Iterator<Item = (TrayId, TrayFlags)> + '_ {
        self.flags.iter().map(|(id, flags)| (*id, *flags))
    }

    /// Trays whose footprint overlaps another tray.
    pub fn colliding(&self) -> impl Iterator<Item = TrayId> + '_ {
        self.iter()
            .filter(|(_, flags)| flags.has_collision)
            .map(|(id, _)| id)
    }

    /// Trays on a prohibited dot.
    pub fn prohibited(&self) -> impl Iterator<Item = TrayId> + '_ {
        self.iter()
            .filter(|(_, flags)| flags.is_prohibited)
            .map(|(id, _)| id)
    }

    /// Returns `true` if no tray is flagged.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.flags.values().all(TrayFlags::is_clean)
    }

    /// Number of trays in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if the report covers no trays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Stateless collision detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionDetector;

impl CollisionDetector {
    /// Margin-expanded vertical footprint of a tray, as a half-open interval.
    ///
    /// Signed so a margin below dot 1 does not underflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::{CollisionDetector, Configuration, ConfigurationTypeProfile, TrayPlacementOptions};
    ///
    /// let profile = ConfigurationTypeProfile::builder("demo", 40)
    ///     .dot_delta(25)
    ///     .min_tray_height(100)
    ///     .collision_margin(5)
    ///     .build()
    ///     .unwrap();
    /// let mut rack = Configuration::new(profile).unwrap();
    /// let id = rack.add_tray_at(1, TrayPlacementOptions::default()).unwrap();
    ///
    /// let tray = rack.tray(id).unwrap();
    /// assert_eq!(CollisionDetector::footprint(tray, rack.profile()), (-5, 105));
    /// ```
    #[must_use]
    pub fn footprint(tray: &Tray, profile: &ConfigurationTypeProfile) -> (i64, i64) {
        let bottom = tray.dot_position().bottom_y(profile.dot_delta);
        let margin = i64::from(profile.collision_margin);
        (bottom - margin, bottom + i64::from(tray.height()) + margin)
    }

    /// Compute collision and prohibition flags for every tray.
    ///
    /// Reserved dots are those reserved under `elevator` (see
    /// [`ConfigurationTypeProfile::reserved_dots_for`]). A tray on a
    /// double-dot position is prohibited when the dot above it is outside the
    /// rack or holds another tray.
    #[must_use]
    pub fn detect(
        trays: &[Tray],
        profile: &ConfigurationTypeProfile,
        elevator: Option<&str>,
    ) -> CollisionReport {
        let footprints: Vec<(i64, i64)> = trays
            .iter()
            .map(|tray| Self::footprint(tray, profile))
            .collect();
        let occupied: BTreeSet<u16> = trays.iter().map(|t| t.dot_position().value()).collect();
        let reserved = profile.reserved_dots_for(elevator);

        let mut collides = vec![false; trays.len()];
        for (i, a) in footprints.iter().enumerate() {
            for (j, b) in footprints.iter().enumerate().skip(i + 1) {
                if Self::overlaps(*a, *b) {
                    collides[i] = true;
                    collides[j] = true;
                }
            }
        }

        let flags = trays
            .iter()
            .zip(collides)
            .map(|(tray, has_collision)| {
                let flags = TrayFlags {
                    has_collision,
                    is_prohibited: Self::is_prohibited(
                        tray.dot_position(),
                        &occupied,
                        &reserved,
                        profile,
                    ),
                };
                (tray.id(), flags)
            })
            .collect();

        CollisionReport { flags }
    }

    fn overlaps((lo_a, hi_a): (i64, i64), (lo_b, hi_b): (i64, i64)) -> bool {
        lo_a < hi_b && lo_b < hi_a
    }

    fn is_prohibited(
        dot: DotPosition,
        occupied: &BTreeSet<u16>,
        reserved: &BTreeSet<u16>,
        profile: &ConfigurationTypeProfile,
    ) -> bool {
        if reserved.contains(&dot.value()) {
            return true;
        }
        if profile.is_double_dot(dot.value()) {
            return match dot.next() {
                Some(above) => {
                    !profile.contains(above.value()) || occupied.contains(&above.value())
                }
                None => true,
            };
        }
        false
    }
}
