//! Hardware pallet configuration strings.
//!
//! The pallet feeder is configured with a short string per product. The
//! product depth is expressed in pallet dots, where one dot is a tenth of
//! the profile's pallet delta. Wide products additionally repeat the dot
//! count as a trailing segment.

use serde::Serialize;

use crate::product::Product;
use crate::profile::DotPosition;
use crate::rack::TrayId;

/// Returned instead of a pallet string when the pallet delta is unusable.
pub const UNKNOWN_PALLET: &str = "unknown";

/// Dot counts up to this value are written as repeated `.` characters.
pub const MAX_DOTTED_TOKEN: u32 = 4;

/// Products wider than this get a trailing dot-count segment.
pub const WIDE_PRODUCT_WIDTH: u32 = 100;

/// Pallet string of one placed product, for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalletEntry {
    /// Tray holding the product.
    pub tray: TrayId,
    /// Dot of that tray.
    pub dot: DotPosition,
    /// On-tray index of the product.
    pub index: usize,
    /// The encoded pallet string.
    pub code: String,
}

/// Stateless pallet string encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PalletConfigEncoder;

impl PalletConfigEncoder {
    /// Number of pallet dots covering `depth`, or `None` for a pallet delta
    /// that is not a positive finite number.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::PalletConfigEncoder;
    ///
    /// assert_eq!(PalletConfigEncoder::dots_for_depth(50, 135.0), Some(4));
    /// assert_eq!(PalletConfigEncoder::dots_for_depth(50, 0.0), None);
    /// ```
    #[must_use]
    pub fn dots_for_depth(depth: u32, pallet_delta: f64) -> Option<u32> {
        if !pallet_delta.is_finite() || pallet_delta <= 0.0 {
            return None;
        }

        let pitch = pallet_delta / 10.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let dots = (f64::from(depth) / pitch).ceil().min(f64::from(u32::MAX)) as u32;

        Some(dots)
    }

    /// Encode a product into its pallet string.
    ///
    /// Returns [`UNKNOWN_PALLET`] if `pallet_delta` is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::{PalletConfigEncoder, Product};
    ///
    /// let narrow = Product::new(50, 100, 50, true);
    /// assert_eq!(PalletConfigEncoder::encode(&narrow, 135.0), "/..../");
    ///
    /// let wide = Product::new(150, 100, 200, true);
    /// assert_eq!(PalletConfigEncoder::encode(&wide, 135.0), "/15/15/");
    ///
    /// assert_eq!(PalletConfigEncoder::encode(&wide, -1.0), "unknown");
    /// ```
    #[must_use]
    pub fn encode(product: &Product, pallet_delta: f64) -> String {
        let Some(dots) = Self::dots_for_depth(product.depth, pallet_delta) else {
            log::warn!("cannot encode pallet string: pallet delta {pallet_delta} is not positive");
            return UNKNOWN_PALLET.to_string();
        };

        let token = if dots <= MAX_DOTTED_TOKEN {
            ".".repeat(dots as usize)
        } else {
            dots.to_string()
        };

        if product.width > WIDE_PRODUCT_WIDTH {
            format!("/{token}/{dots}/")
        } else {
            format!("/{token}/")
        }
    }
}
