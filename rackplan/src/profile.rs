//! Machine-family profiles and rack coordinates.
//!
//! A [`ConfigurationTypeProfile`] carries every constant the layout engine
//! needs for one machine family. Profiles are immutable values threaded
//! explicitly into each engine call; there is no global profile table.

pub mod catalog;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::product::Extractor;

/// Default ceiling for product heights, in millimetres.
pub const DEFAULT_MAX_PRODUCT_HEIGHT: u32 = 340;

/// A physical mounting coordinate on the rack (1-based, bottom to top).
///
/// Dot 0 is invalid: the assigner uses 0 as a virtual lower bound below the
/// first real dot.
///
/// # Examples
///
/// ```
/// use rackplan::DotPosition;
///
/// let dot = DotPosition::try_from(12).unwrap();
/// assert_eq!(dot.value(), 12);
/// assert!(DotPosition::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct DotPosition(u16);

impl DotPosition {
    /// The lowest dot on every rack.
    pub const FIRST: Self = Self(1);

    /// Wrap a dot number already known to be non-zero.
    pub(crate) const fn from_nonzero(value: u16) -> Self {
        debug_assert!(value != 0);
        Self(value)
    }

    /// Returns the underlying dot number.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// The dot directly above this one, or `None` past `u16::MAX`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Vertical offset of this dot's bottom edge from the rack floor.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::DotPosition;
    ///
    /// let dot = DotPosition::try_from(3).unwrap();
    /// assert_eq!(dot.bottom_y(25), 50);
    /// ```
    #[must_use]
    pub fn bottom_y(self, dot_delta: u32) -> i64 {
        (i64::from(self.0) - 1) * i64::from(dot_delta)
    }
}

impl TryFrom<u16> for DotPosition {
    type Error = InvalidDotError;

    fn try_from(value: u16) -> std::result::Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidDotError {
                value,
                reason: "dot 0 is invalid".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<DotPosition> for u16 {
    fn from(dot: DotPosition) -> Self {
        dot.0
    }
}

impl fmt::Display for DotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid dot numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDotError {
    /// The invalid dot value.
    pub value: u16,
    /// The reason the dot is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidDotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid dot {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidDotError {}

fn default_max_product_height() -> u32 {
    DEFAULT_MAX_PRODUCT_HEIGHT
}

/// Immutable parameter set for one machine family.
///
/// All lengths are in millimetres.
///
/// # Examples
///
/// ```
/// use rackplan::ConfigurationTypeProfile;
///
/// let yaml = r"
/// name: vx-40
/// amount_dots: 40
/// dot_delta: 25
/// min_tray_height: 100
/// tray_width: 640
/// low_extractor_height: 20
/// high_extractor_height: 45
/// pallet_delta: 135
/// reserved_dots: [39, 40]
/// ";
/// let profile: ConfigurationTypeProfile = serde_yaml::from_str(yaml).unwrap();
/// profile.validate().unwrap();
/// assert_eq!(profile.max_product_height, 340);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationTypeProfile {
    /// Machine-type name; the catalog lookup key.
    pub name: String,

    /// Number of dots on the rack.
    pub amount_dots: u16,

    /// Distance between adjacent dots.
    pub dot_delta: u32,

    /// Height of an empty tray.
    pub min_tray_height: u32,

    /// Usable width of every tray.
    pub tray_width: u32,

    /// Extractor height under stable products.
    pub low_extractor_height: u32,

    /// Extractor height under unstable products.
    pub high_extractor_height: u32,

    /// Clip distance of the high extractor.
    #[serde(default)]
    pub high_extractor_clip_distance: u32,

    /// Hardware pallet pitch used by the pallet encoder.
    pub pallet_delta: f64,

    /// Products taller than this are refused by the placer.
    #[serde(default = "default_max_product_height")]
    pub max_product_height: u32,

    /// Clearance added above and below every tray footprint.
    #[serde(default)]
    pub collision_margin: u32,

    /// Dots that are always reserved.
    #[serde(default)]
    pub reserved_dots: BTreeSet<u16>,

    /// Dots reserved only while the named elevator setting is active.
    #[serde(default)]
    pub elevator_reservations: BTreeMap<String, BTreeSet<u16>>,

    /// Dots that need the dot above them kept free.
    #[serde(default)]
    pub double_dot_positions: BTreeSet<u16>,
}

impl ConfigurationTypeProfile {
    /// Start building a profile with the given name and dot count.
    ///
    /// Unspecified values take the defaults documented on
    /// [`ProfileBuilder`].
    #[must_use]
    pub fn builder(name: impl Into<String>, amount_dots: u16) -> ProfileBuilder {
        ProfileBuilder::new(name, amount_dots)
    }

    /// Refuse profiles whose values would make the engine compute nonsense.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfile`] for a zero dot count, dot delta or
    /// tray width, a non-positive or non-finite pallet delta, a maximum
    /// product height whose canal height cannot be represented, or
    /// reserved / double-dot entries outside the rack.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidProfile {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name cannot be empty".into()));
        }
        if self.amount_dots == 0 {
            return Err(invalid("amount_dots must be at least 1".into()));
        }
        if self.dot_delta == 0 {
            return Err(invalid("dot_delta must be positive".into()));
        }
        if self.tray_width == 0 {
            return Err(invalid("tray_width must be positive".into()));
        }
        if !self.pallet_delta.is_finite() || self.pallet_delta <= 0.0 {
            return Err(invalid(format!(
                "pallet_delta must be positive, got {}",
                self.pallet_delta
            )));
        }

        let tallest_extractor = self.low_extractor_height.max(self.high_extractor_height);
        if self.max_product_height.checked_add(tallest_extractor).is_none() {
            return Err(invalid(format!(
                "max_product_height {} plus extractor height {tallest_extractor} overflows",
                self.max_product_height
            )));
        }

        for dot in self.reserved_dots.iter().chain(&self.double_dot_positions) {
            if !self.contains(*dot) {
                return Err(invalid(format!(
                    "dot {dot} is outside 1-{}",
                    self.amount_dots
                )));
            }
        }
        for (setting, dots) in &self.elevator_reservations {
            if let Some(dot) = dots.iter().find(|dot| !self.contains(**dot)) {
                return Err(invalid(format!(
                    "dot {dot} (elevator setting '{setting}') is outside 1-{}",
                    self.amount_dots
                )));
            }
        }

        Ok(())
    }

    /// Returns `true` if `dot` is a real dot on this rack.
    #[must_use]
    pub fn contains(&self, dot: u16) -> bool {
        (1..=self.amount_dots).contains(&dot)
    }

    /// Returns `true` if the named elevator setting exists on this profile.
    #[must_use]
    pub fn has_elevator_setting(&self, setting: &str) -> bool {
        self.elevator_reservations.contains_key(setting)
    }

    /// Dots reserved under the given elevator setting.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::ConfigurationTypeProfile;
    ///
    /// let profile = ConfigurationTypeProfile::builder("demo", 20)
    ///     .reserved_dot(20)
    ///     .elevator_reservation("lift", [1, 2])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(profile.reserved_dots_for(None).len(), 1);
    /// assert_eq!(profile.reserved_dots_for(Some("lift")).len(), 3);
    /// ```
    #[must_use]
    pub fn reserved_dots_for(&self, elevator: Option<&str>) -> BTreeSet<u16> {
        let mut reserved = self.reserved_dots.clone();
        if let Some(dots) = elevator.and_then(|name| self.elevator_reservations.get(name)) {
            reserved.extend(dots);
        }
        reserved
    }

    /// Returns `true` if `dot` is reserved under the given elevator setting.
    #[must_use]
    pub fn is_reserved(&self, dot: u16, elevator: Option<&str>) -> bool {
        self.reserved_dots.contains(&dot)
            || elevator
                .and_then(|name| self.elevator_reservations.get(name))
                .is_some_and(|dots| dots.contains(&dot))
    }

    /// Returns `true` if a tray on `dot` needs double clearance.
    #[must_use]
    pub fn is_double_dot(&self, dot: u16) -> bool {
        self.double_dot_positions.contains(&dot)
    }

    /// The extractor that goes under a product with the given stability.
    #[must_use]
    pub fn extractor_for(&self, stable: bool) -> Extractor {
        if stable {
            Extractor::Low {
                height: self.low_extractor_height,
            }
        } else {
            Extractor::High {
                height: self.high_extractor_height,
                clip_distance: self.high_extractor_clip_distance,
            }
        }
    }
}

/// Builder for [`ConfigurationTypeProfile`].
///
/// Defaults: `dot_delta` 25, `min_tray_height` 100, `tray_width` 640,
/// extractor heights 20 (low) and 45 (high), `pallet_delta` 135,
/// `max_product_height` 340, no margin and no reserved dots.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    profile: ConfigurationTypeProfile,
}

impl ProfileBuilder {
    fn new(name: impl Into<String>, amount_dots: u16) -> Self {
        Self {
            profile: ConfigurationTypeProfile {
                name: name.into(),
                amount_dots,
                dot_delta: 25,
                min_tray_height: 100,
                tray_width: 640,
                low_extractor_height: 20,
                high_extractor_height: 45,
                high_extractor_clip_distance: 0,
                pallet_delta: 135.0,
                max_product_height: DEFAULT_MAX_PRODUCT_HEIGHT,
                collision_margin: 0,
                reserved_dots: BTreeSet::new(),
                elevator_reservations: BTreeMap::new(),
                double_dot_positions: BTreeSet::new(),
            },
        }
    }

    /// Set the distance between adjacent dots.
    #[must_use]
    pub fn dot_delta(mut self, dot_delta: u32) -> Self {
        self.profile.dot_delta = dot_delta;
        self
    }

    /// Set the height of an empty tray.
    #[must_use]
    pub fn min_tray_height(mut self, height: u32) -> Self {
        self.profile.min_tray_height = height;
        self
    }

    /// Set the tray width.
    #[must_use]
    pub fn tray_width(mut self, width: u32) -> Self {
        self.profile.tray_width = width;
        self
    }

    /// Set the low and high extractor heights.
    #[must_use]
    pub fn extractor_heights(mut self, low: u32, high: u32) -> Self {
        self.profile.low_extractor_height = low;
        self.profile.high_extractor_height = high;
        self
    }

    /// Set the high extractor clip distance.
    #[must_use]
    pub fn clip_distance(mut self, distance: u32) -> Self {
        self.profile.high_extractor_clip_distance = distance;
        self
    }

    /// Set the pallet delta.
    #[must_use]
    pub fn pallet_delta(mut self, pallet_delta: f64) -> Self {
        self.profile.pallet_delta = pallet_delta;
        self
    }

    /// Set the maximum product height.
    #[must_use]
    pub fn max_product_height(mut self, height: u32) -> Self {
        self.profile.max_product_height = height;
        self
    }

    /// Set the collision margin.
    #[must_use]
    pub fn collision_margin(mut self, margin: u32) -> Self {
        self.profile.collision_margin = margin;
        self
    }

    /// Reserve a dot regardless of elevator setting.
    #[must_use]
    pub fn reserved_dot(mut self, dot: u16) -> Self {
        self.profile.reserved_dots.insert(dot);
        self
    }

    /// Reserve dots while the named elevator setting is active.
    #[must_use]
    pub fn elevator_reservation(
        mut self,
        setting: impl Into<String>,
        dots: impl IntoIterator<Item = u16>,
    ) -> Self {
        self.profile
            .elevator_reservations
            .entry(setting.into())
            .or_default()
            .extend(dots);
        self
    }

    /// Mark a dot as needing double clearance.
    #[must_use]
    pub fn double_dot(mut self, dot: u16) -> Self {
        self.profile.double_dot_positions.insert(dot);
        self
    }

    /// Validate and return the profile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfile`] if the profile fails validation.
    pub fn build(self) -> Result<ConfigurationTypeProfile> {
        self.profile.validate()?;
        Ok(self.profile)
    }
}
