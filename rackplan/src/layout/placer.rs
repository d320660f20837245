//! Greedy leftmost-fit placement of products along a tray.
//!
//! Candidate offsets are scanned exhaustively at 1mm granularity. Tray
//! widths are at most around a metre, so a linear scan per product is cheap
//! and always finds the leftmost free slot when one exists.

use crate::error::{Error, NoFitReason, Result};
use crate::product::{PlacedProduct, Product};
use crate::profile::ConfigurationTypeProfile;
use crate::rack::Tray;

/// Stateless product placer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductPlacer;

impl ProductPlacer {
    /// Find the leftmost offset where `product` fits on `tray`.
    ///
    /// The tray is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFit`] if the product is wider than the tray, taller
    /// than the profile's maximum product height, or overlaps an existing
    /// product at every candidate offset. Returns [`Error::Validation`] for a
    /// zero-width product.
    pub fn find_offset(
        product: &Product,
        tray: &Tray,
        profile: &ConfigurationTypeProfile,
    ) -> Result<u32> {
        product.validate()?;

        let no_fit = |reason| Error::NoFit {
            tray: tray.id(),
            width: product.width,
            reason,
        };

        if product.width > tray.width() {
            return Err(no_fit(NoFitReason::TooWide {
                tray_width: tray.width(),
            }));
        }
        if product.height > profile.max_product_height {
            return Err(no_fit(NoFitReason::TooTall {
                height: product.height,
                max_height: profile.max_product_height,
            }));
        }

        let last_candidate = tray.width() - product.width;
        (0..=last_candidate)
            .find(|&x| {
                let right = x + product.width;
                tray.products().iter().all(|p| !p.overlaps(x, right))
            })
            .ok_or_else(|| no_fit(NoFitReason::NoFreeSlot))
    }

    /// Place `product` on `tray` at the leftmost free offset.
    ///
    /// On success the product is inserted in ascending offset order and every
    /// product's on-tray index is recomputed. On failure the tray is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// See [`ProductPlacer::find_offset`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::{ConfigurationTypeProfile, Configuration, Product, TrayPlacementOptions};
    ///
    /// let profile = ConfigurationTypeProfile::builder("demo", 40).tray_width(640).build().unwrap();
    /// let mut rack = Configuration::new(profile).unwrap();
    /// let tray = rack.add_tray(TrayPlacementOptions::default()).unwrap();
    ///
    /// assert_eq!(rack.add_product(tray, Product::new(100, 80, 40, true)).unwrap(), 0);
    /// assert_eq!(rack.add_product(tray, Product::new(100, 80, 40, true)).unwrap(), 100);
    /// ```
    pub fn place(
        product: Product,
        tray: &mut Tray,
        profile: &ConfigurationTypeProfile,
    ) -> Result<u32> {
        let x_offset = Self::find_offset(&product, tray, profile)?;
        let extractor = profile.extractor_for(product.stable);

        log::debug!(
            "placing {}mm {} product on tray {} at x={x_offset}",
            product.width,
            extractor.kind(),
            tray.id()
        );

        let products = tray.products_mut();
        let insert_at = products.partition_point(|p| p.x_offset() < x_offset);
        products.insert(insert_at, PlacedProduct::new(product, extractor, x_offset));
        Self::reindex(products);

        Ok(x_offset)
    }

    /// Remove the product at `index` from `tray`.
    ///
    /// Remaining products keep their offsets; only their indices change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProductNotFound`] if `index` is out of bounds.
    pub fn remove(tray: &mut Tray, index: usize) -> Result<PlacedProduct> {
        let tray_id = tray.id();
        let products = tray.products_mut();
        if index >= products.len() {
            return Err(Error::ProductNotFound {
                tray: tray_id,
                index,
            });
        }

        let removed = products.remove(index);
        Self::reindex(products);
        Ok(removed)
    }

    fn reindex(products: &mut [PlacedProduct]) {
        for (index, product) in products.iter_mut().enumerate() {
            product.set_on_tray_index(index);
        }
    }
}
