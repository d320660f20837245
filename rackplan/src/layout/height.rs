//! Tray height derived from the tallest canal on it.

use crate::product::PlacedProduct;
use crate::profile::ConfigurationTypeProfile;
use crate::rack::Tray;

/// Stateless tray height resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeightResolver;

impl HeightResolver {
    /// Height needed to hold `products`.
    ///
    /// This is the tallest canal height (product plus extractor), but never
    /// less than the profile's minimum tray height.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::{ConfigurationTypeProfile, HeightResolver};
    ///
    /// let profile = ConfigurationTypeProfile::builder("demo", 40)
    ///     .min_tray_height(100)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(HeightResolver::required_height(&[], &profile), 100);
    /// ```
    #[must_use]
    pub fn required_height(products: &[PlacedProduct], profile: &ConfigurationTypeProfile) -> u32 {
        products
            .iter()
            .map(PlacedProduct::canal_height)
            .fold(profile.min_tray_height, u32::max)
    }

    /// Recompute and store the height of `tray`.
    ///
    /// Returns the new height.
    pub fn resolve(tray: &mut Tray, profile: &ConfigurationTypeProfile) -> u32 {
        let height = Self::required_height(tray.products(), profile);
        if height != tray.height() {
            log::debug!("tray {} height {} -> {height}", tray.id(), tray.height());
        }
        tray.set_height(height);
        height
    }
}
