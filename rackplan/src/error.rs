//! Error types for the rackplan library.
//!
//! This module provides the error hierarchy for all layout operations,
//! using `thiserror` for ergonomic error handling.
//!
//! Collisions and prohibited trays are not errors: the collision detector
//! reports them as advisory flags (see [`crate::layout::CollisionReport`]).

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::rack::TrayId;

/// Result type alias for operations that may fail with a rackplan error.
///
/// # Examples
///
/// ```
/// use rackplan::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(12)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the rackplan library.
#[derive(Debug, Error)]
pub enum Error {
    /// A machine profile is missing required values or has nonsensical ones.
    #[error("invalid profile '{name}': {reason}")]
    InvalidProfile {
        /// The machine-type name of the profile.
        name: String,
        /// The reason the profile was refused.
        reason: String,
    },

    /// No profile with the requested machine-type name exists.
    #[error("profile not found: {name}")]
    ProfileNotFound {
        /// The machine-type name that was looked up.
        name: String,
    },

    /// A product could not be placed on a tray.
    #[error("product of width {width}mm does not fit on tray {tray}: {reason}")]
    NoFit {
        /// The tray the product was dropped on.
        tray: TrayId,
        /// Width of the refused product.
        width: u32,
        /// Why the product was refused.
        reason: NoFitReason,
    },

    /// A dot position falls outside the rack.
    #[error("dot position {position} is out of range 1-{amount_dots}")]
    PositionOutOfRange {
        /// The requested or assigned position.
        position: u16,
        /// Number of dots on the rack.
        amount_dots: u16,
    },

    /// A tray was placed on a reserved dot without an explicit override.
    #[error("dot position {position} is reserved")]
    ProhibitedPosition {
        /// The reserved position.
        position: u16,
    },

    /// Another tray already rests on the requested dot.
    #[error("dot position {position} is already occupied by tray {tray}")]
    DotOccupied {
        /// The occupied position.
        position: u16,
        /// The tray resting on it.
        tray: TrayId,
    },

    /// The requested tray does not exist in the configuration.
    #[error("tray not found: {tray}")]
    TrayNotFound {
        /// The missing tray.
        tray: TrayId,
    },

    /// The requested product does not exist on the tray.
    #[error("no product at index {index} on tray {tray}")]
    ProductNotFound {
        /// The tray that was searched.
        tray: TrayId,
        /// The on-tray index that was requested.
        index: usize,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reason why a product could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoFitReason {
    /// The product is wider than the whole tray.
    TooWide {
        /// Width of the tray.
        tray_width: u32,
    },
    /// The product exceeds the maximum product height of the profile.
    TooTall {
        /// Height of the product.
        height: u32,
        /// The profile's ceiling.
        max_height: u32,
    },
    /// Every candidate offset overlaps a product already on the tray.
    NoFreeSlot,
}

impl fmt::Display for NoFitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooWide { tray_width } => write!(f, "wider than tray ({tray_width}mm)"),
            Self::TooTall { height, max_height } => {
                write!(f, "height {height}mm exceeds maximum {max_height}mm")
            }
            Self::NoFreeSlot => write!(f, "no free slot"),
        }
    }
}

impl From<crate::profile::InvalidDotError> for Error {
    fn from(err: crate::profile::InvalidDotError) -> Self {
        Self::Validation {
            field: "dot".into(),
            message: err.to_string(),
        }
    }
}

impl Error {
    /// Check if the error is a placement refusal.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::{Error, NoFitReason, TrayId};
    ///
    /// let err = Error::NoFit { tray: TrayId::new(1), width: 80, reason: NoFitReason::NoFreeSlot };
    /// assert!(err.is_no_fit());
    /// ```
    #[must_use]
    pub fn is_no_fit(&self) -> bool {
        matches!(self, Self::NoFit { .. })
    }

    /// Check if the error is a dot position outside the rack.
    ///
    /// # Examples
    ///
    /// ```
    /// use rackplan::Error;
    ///
    /// let err = Error::PositionOutOfRange { position: 41, amount_dots: 40 };
    /// assert!(err.is_out_of_range());
    /// ```
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::PositionOutOfRange { .. })
    }
}
