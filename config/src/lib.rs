//! # Config Crate
//!
//! Centralized configuration for the Cardano grille pipeline.
//! Physical card dimensions, the default seed and kernel tolerances are
//! defined once here and shared by the generator, the solid builder and the
//! command-line driver.
//!
//! ## Usage
//!
//! ```rust
//! use grille_config::{GrilleParams, constants::DEFAULT_SEED};
//!
//! let params = GrilleParams::default();
//! params.validate().unwrap();
//!
//! assert_eq!(params.half(), 4);
//! assert_eq!(params.grid_footprint(), 61.0);
//! assert_eq!(params.margin(), 8.0);
//! assert_eq!(DEFAULT_SEED, 1971);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validate Early**: Invalid parameters are rejected before any geometry work
//! - **Overridable**: `GrilleParams` can be loaded from a TOML file

pub mod constants;
pub mod error;
pub mod params;

pub use error::{ConfigError, ConfigResult};
pub use params::GrilleParams;

#[cfg(test)]
mod tests;
