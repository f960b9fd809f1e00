//! # Error Types
//!
//! Configuration errors. All of them are fatal for the current run and
//! must be raised before any geometry work starts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating [`crate::GrilleParams`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The hole count must be even so the grid splits into four quadrants.
    #[error("holes_per_side must be even, got {0}")]
    OddHoleCount(usize),

    /// The hole count must be at least 2.
    #[error("holes_per_side must be at least 2, got {0}")]
    HoleCountTooSmall(usize),

    /// A dimension is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// A dimension that must be strictly positive is zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// A dimension that may be zero is negative.
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// The hole grid is wider than the card.
    #[error("hole grid ({footprint} mm) does not fit on the card ({card_width} mm)")]
    GridExceedsCard {
        /// Width of the hole grid
        footprint: f64,
        /// Width of the card
        card_width: f64,
    },

    /// The parameter file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The parameter file is not valid TOML for [`crate::GrilleParams`].
    #[error("invalid parameter file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
