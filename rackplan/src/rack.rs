//! Racks, trays, and the configuration aggregate.
//!
//! A [`Configuration`] is one physical rack instance. It owns its trays and
//! is the only place where the layout components are composed: every
//! structural edit goes through a `&mut self` method which finishes by
//! renumbering trays for display and recomputing the collision report.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::{
    CollisionDetector, CollisionReport, HeightResolver, PalletConfigEncoder, PalletEntry,
    ProductPlacer, RackStats, TrayPositionAssigner,
};
use crate::product::{PlacedProduct, Product};
use crate::profile::{ConfigurationTypeProfile, DotPosition};

/// Identifier of a tray within one configuration.
///
/// Identifiers are handed out in creation order and never reused, so they
/// stay stable while trays are moved or removed.
///
/// # Examples
///
/// ```
/// use rackplan::TrayId;
///
/// let id = TrayId::new(3);
/// assert_eq!(id.value(), 3);
/// assert_eq!(id.to_string(), "T3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrayId(u32);

impl TrayId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TrayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// A horizontal shelf mounted on one dot of the rack.
///
/// The dot position is the physical coordinate of the tray's bottom edge.
/// The display order is a dense `1..=N` index recomputed after every
/// structural change; the two are never mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tray {
    id: TrayId,
    dot_position: DotPosition,
    display_order: usize,
    width: u32,
    height: u32,
    products: Vec<PlacedProduct>,
}

impl Tray {
    pub(crate) fn new(
        id: TrayId,
        dot_position: DotPosition,
        profile: &ConfigurationTypeProfile,
    ) -> Self {
        Self {
            id,
            dot_position,
            display_order: 0,
            width: profile.tray_width,
            height: profile.min_tray_height,
            products: Vec::new(),
        }
    }

    /// The tray identifier.
    #[must_use]
    pub fn id(&self) -> TrayId {
        self.id
    }

    /// The dot the tray's bottom edge rests on.
    #[must_use]
    pub fn dot_position(&self) -> DotPosition {
        self.dot_position
    }

    /// Presentational index among the trays of the rack, bottom to top.
    #[must_use]
    pub fn display_order(&self) -> usize {
        self.display_order
    }

    /// Usable tray width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Physical tray height, derived from the products it holds.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Placed products, left to right.
    #[must_use]
    pub fn products(&self) -> &[PlacedProduct] {
        &self.products
    }

    /// Sum of the widths of all placed products.
    #[must_use]
    pub fn used_width(&self) -> u32 {
        self.products.iter().map(PlacedProduct::width).sum()
    }

    pub(crate) fn set_display_order(&mut self, order: usize) {
        self.display_order = order;
    }

    pub(crate) fn set_dot_position(&mut self, dot: DotPosition) {
        self.dot_position = dot;
    }

    pub(crate) fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    pub(crate) fn products_mut(&mut self) -> &mut Vec<PlacedProduct> {
        &mut self.products
    }
}

/// Options controlling how a tray is put on a dot.
///
/// # Examples
///
/// ```
/// use rackplan::TrayPlacementOptions;
///
/// let options = TrayPlacementOptions { allow_reserved: true };
/// assert!(!TrayPlacementOptions::default().allow_reserved);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrayPlacementOptions {
    /// If true, a tray may be placed on a dot reserved under the active
    /// elevator setting. The collision report still flags it.
    pub allow_reserved: bool,
}

/// One physical rack: a profile, the active elevator setting and its trays.
///
/// Trays are kept sorted by dot position. After every structural edit the
/// display order and the collision report are recomputed from scratch.
#[derive(Debug, Clone)]
pub struct Configuration {
    profile: ConfigurationTypeProfile,
    elevator: Option<String>,
    trays: Vec<Tray>,
    next_id: u32,
    collisions: CollisionReport,
}

impl Configuration {
    /// Create an empty rack for the given machine profile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfile`] if the profile fails validation.
    pub fn new(profile: ConfigurationTypeProfile) -> Result<Self> {
        profile.validate()?;
        Ok(Self {
            profile,
            elevator: None,
            trays: Vec::new(),
            next_id: 1,
            collisions: CollisionReport::default(),
        })
    }

    /// The machine profile of this rack.
    #[must_use]
    pub fn profile(&self) -> &ConfigurationTypeProfile {
        &self.profile
    }

    /// The active elevator setting, if any.
    #[must_use]
    pub fn elevator(&self) -> Option<&str> {
        self.elevator.as_deref()
    }

    /// Trays in ascending dot order.
    #[must_use]
    pub fn trays(&self) -> &[Tray] {
        &self.trays
    }

    /// Look up a tray by identifier.
    #[must_use]
    pub fn tray(&self, id: TrayId) -> Option<&Tray> {
        self.trays.iter().find(|tray| tray.id == id)
    }

    /// Collision flags as of the last structural edit.
    #[must_use]
    pub fn collisions(&self) -> &CollisionReport {
        &self.collisions
    }

    /// Select the active elevator setting, or clear it with `None`.
    ///
    /// Trays already on the rack are not moved; trays that end up on newly
    /// reserved dots are flagged as prohibited.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the profile has no such setting.
    pub fn set_elevator(&mut self, elevator: Option<String>) -> Result<()> {
        if let Some(name) = elevator.as_deref() {
            if !self.profile.has_elevator_setting(name) {
                return Err(Error::Validation {
                    field: "elevator".into(),
                    message: format!(
                        "profile '{}' has no elevator setting '{name}'",
                        self.profile.name
                    ),
                });
            }
        }

        log::debug!("elevator setting changed to {elevator:?}");
        self.elevator = elevator;
        self.refresh();
        Ok(())
    }

    /// Add a tray on the dot chosen by [`TrayPositionAssigner`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfRange`] if the assigned dot lies above
    /// the rack, or [`Error::ProhibitedPosition`] if it is reserved and
    /// `options.allow_reserved` is not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::{Configuration, ConfigurationTypeProfile, TrayPlacementOptions};
    ///
    /// let profile = ConfigurationTypeProfile::builder("demo", 40).build().unwrap();
    /// let mut rack = Configuration::new(profile).unwrap();
    ///
    /// rack.add_tray_at(5, TrayPlacementOptions::default()).unwrap();
    /// rack.add_tray_at(20, TrayPlacementOptions::default()).unwrap();
    /// let tray = rack.add_tray(TrayPlacementOptions::default()).unwrap();
    ///
    /// assert_eq!(rack.tray(tray).unwrap().dot_position().value(), 12);
    /// ```
    pub fn add_tray(&mut self, options: TrayPlacementOptions) -> Result<TrayId> {
        let assigned = TrayPositionAssigner::assign_position(&self.trays);
        self.insert_tray(assigned.value(), options)
    }

    /// Add a tray on an explicit dot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfRange`], [`Error::DotOccupied`] or
    /// [`Error::ProhibitedPosition`] if the dot cannot take a tray.
    pub fn add_tray_at(&mut self, dot: u16, options: TrayPlacementOptions) -> Result<TrayId> {
        self.insert_tray(dot, options)
    }

    /// Move a tray to another dot, keeping its products.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrayNotFound`] for an unknown tray, or the same
    /// errors as [`Configuration::add_tray_at`] for an unusable dot.
    pub fn move_tray(
        &mut self,
        id: TrayId,
        dot: u16,
        options: TrayPlacementOptions,
    ) -> Result<()> {
        let index = self.tray_index(id)?;
        let target = self.check_dot(dot, Some(id), options)?;

        log::debug!(
            "moving tray {id} from dot {} to dot {target}",
            self.trays[index].dot_position
        );
        self.trays[index].set_dot_position(target);
        self.refresh();
        Ok(())
    }

    /// Remove a tray and everything on it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrayNotFound`] for an unknown tray.
    pub fn remove_tray(&mut self, id: TrayId) -> Result<Tray> {
        let index = self.tray_index(id)?;
        let tray = self.trays.remove(index);
        log::debug!("removed tray {id} from dot {}", tray.dot_position);
        self.refresh();
        Ok(tray)
    }

    /// Place a product on a tray and return its offset.
    ///
    /// The tray height is recomputed and the collision report refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrayNotFound`] for an unknown tray, or
    /// [`Error::NoFit`] if the product cannot be placed; the rack is left
    /// unchanged in both cases.
    pub fn add_product(&mut self, id: TrayId, product: Product) -> Result<u32> {
        let index = self.tray_index(id)?;
        let tray = &mut self.trays[index];

        let x_offset = ProductPlacer::place(product, tray, &self.profile)?;
        HeightResolver::resolve(tray, &self.profile);

        self.refresh();
        Ok(x_offset)
    }

    /// Remove the product at `index` from a tray.
    ///
    /// Remaining products keep their offsets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrayNotFound`] or [`Error::ProductNotFound`].
    pub fn remove_product(&mut self, id: TrayId, index: usize) -> Result<PlacedProduct> {
        let tray_index = self.tray_index(id)?;
        let tray = &mut self.trays[tray_index];

        let removed = ProductPlacer::remove(tray, index)?;
        HeightResolver::resolve(tray, &self.profile);

        self.refresh();
        Ok(removed)
    }

    /// Hardware pallet strings for every placed product, in rack order.
    #[must_use]
    pub fn pallet_strings(&self) -> Vec<PalletEntry> {
        self.trays
            .iter()
            .flat_map(|tray| {
                tray.products.iter().map(move |placed| PalletEntry {
                    tray: tray.id,
                    dot: tray.dot_position,
                    index: placed.on_tray_index(),
                    code: PalletConfigEncoder::encode(placed.product(), self.profile.pallet_delta),
                })
            })
            .collect()
    }

    /// Read-only utilisation figures for display.
    #[must_use]
    pub fn stats(&self) -> RackStats {
        RackStats::collect(&self.trays, &self.profile)
    }

    fn tray_index(&self, id: TrayId) -> Result<usize> {
        self.trays
            .iter()
            .position(|tray| tray.id == id)
            .ok_or(Error::TrayNotFound { tray: id })
    }

    fn insert_tray(&mut self, dot: u16, options: TrayPlacementOptions) -> Result<TrayId> {
        let dot = self.check_dot(dot, None, options)?;

        let id = TrayId::new(self.next_id);
        self.next_id += 1;

        log::debug!("adding tray {id} on dot {dot}");
        self.trays.push(Tray::new(id, dot, &self.profile));
        self.refresh();
        Ok(id)
    }

    /// Check that `dot` can take a tray, ignoring the tray being moved.
    fn check_dot(
        &self,
        dot: u16,
        moving: Option<TrayId>,
        options: TrayPlacementOptions,
    ) -> Result<DotPosition> {
        if !self.profile.contains(dot) {
            return Err(Error::PositionOutOfRange {
                position: dot,
                amount_dots: self.profile.amount_dots,
            });
        }

        if let Some(other) = self
            .trays
            .iter()
            .find(|tray| tray.dot_position.value() == dot && Some(tray.id) != moving)
        {
            return Err(Error::DotOccupied {
                position: dot,
                tray: other.id,
            });
        }

        if self.profile.is_reserved(dot, self.elevator()) {
            if !options.allow_reserved {
                return Err(Error::ProhibitedPosition { position: dot });
            }
            log::warn!("placing tray on reserved dot {dot}");
        }

        Ok(DotPosition::from_nonzero(dot))
    }

    fn refresh(&mut self) {
        TrayPositionAssigner::renumber_for_display(&mut self.trays);
        self.collisions =
            CollisionDetector::detect(&self.trays, &self.profile, self.elevator.as_deref());

        if !self.collisions.is_clean() {
            log::debug!(
                "{} colliding and {} prohibited tray(s)",
                self.collisions.colliding().count(),
                self.collisions.prohibited().count()
            );
        }
    }
}
