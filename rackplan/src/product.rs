//! Products and their placement on a tray.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A product as dropped on a tray, before placement.
///
/// All lengths are in millimetres.
///
/// # Examples
///
/// ```
/// use rackplan::Product;
///
/// let product = Product::new(100, 120, 60, true).with_name("cola 0.5l");
/// assert_eq!(product.width, 100);
/// assert_eq!(product.name.as_deref(), Some("cola 0.5l"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    /// Article label, used for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Horizontal footprint along the tray.
    pub width: u32,
    /// Product height, excluding the extractor.
    pub height: u32,
    /// Front-to-back depth, used by the pallet encoder.
    pub depth: u32,
    /// Stable products stand on a low extractor, unstable ones on a high one.
    pub stable: bool,
}

impl Product {
    /// Create an unnamed product.
    #[must_use]
    pub fn new(width: u32, height: u32, depth: u32, stable: bool) -> Self {
        Self {
            name: None,
            width,
            height,
            depth,
            stable,
        }
    }

    /// Attach an article label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check the product has a usable footprint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the width is zero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::Validation {
                field: "width".into(),
                message: "product width must be greater than 0".into(),
            });
        }
        Ok(())
    }
}

/// Extractor classification, without its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Extractor under stable products.
    Low,
    /// Extractor under unstable products.
    High,
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Dispensing mechanism under a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Extractor {
    /// Low extractor.
    Low {
        /// Extractor height.
        height: u32,
    },
    /// High extractor.
    High {
        /// Extractor height.
        height: u32,
        /// Distance between the extractor clips.
        clip_distance: u32,
    },
}

impl Extractor {
    /// Height the extractor adds below the product.
    #[must_use]
    pub const fn height(&self) -> u32 {
        match self {
            Self::Low { height } | Self::High { height, .. } => *height,
        }
    }

    /// The extractor classification.
    #[must_use]
    pub const fn kind(&self) -> ExtractorKind {
        match self {
            Self::Low { .. } => ExtractorKind::Low,
            Self::High { .. } => ExtractorKind::High,
        }
    }
}

/// A product that has been placed on a tray.
///
/// Offsets and indices are owned by [`crate::layout::ProductPlacer`]; callers
/// only read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedProduct {
    product: Product,
    extractor: Extractor,
    x_offset: u32,
    on_tray_index: usize,
}

impl PlacedProduct {
    pub(crate) fn new(product: Product, extractor: Extractor, x_offset: u32) -> Self {
        Self {
            product,
            extractor,
            x_offset,
            on_tray_index: 0,
        }
    }

    /// The underlying product.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The extractor under this product.
    #[must_use]
    pub fn extractor(&self) -> Extractor {
        self.extractor
    }

    /// Left edge of the product on the tray.
    #[must_use]
    pub fn x_offset(&self) -> u32 {
        self.x_offset
    }

    /// Ordinal position among the products of the tray, left to right.
    #[must_use]
    pub fn on_tray_index(&self) -> usize {
        self.on_tray_index
    }

    pub(crate) fn set_on_tray_index(&mut self, index: usize) {
        self.on_tray_index = index;
    }

    /// Width of the underlying product.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.product.width
    }

    /// Exclusive right edge of the product on the tray.
    #[must_use]
    pub fn right(&self) -> u32 {
        self.x_offset + self.product.width
    }

    /// Product height plus extractor height, saturating at `u32::MAX`.
    #[must_use]
    pub fn canal_height(&self) -> u32 {
        self.product.height.saturating_add(self.extractor.height())
    }

    /// Returns `true` if `[left, right)` overlaps this product's interval.
    #[must_use]
    pub fn overlaps(&self, left: u32, right: u32) -> bool {
        !(right <= self.x_offset || left >= self.right())
    }
}
