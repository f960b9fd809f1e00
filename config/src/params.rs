//! # Grille Parameters
//!
//! Physical parameters of the card and the derived grid layout.
//!
//! All derived measurements (`grid_footprint`, `margin`, `cell_center`) are
//! computed from the same fields, so the card sizing and the hole placement
//! can never drift apart.

use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    CARD_PADDING, CARD_WIDTH, CUTTER_HEIGHT_FACTOR, HOLES_PER_SIDE, HOLE_GUTTER, HOLE_SIDE,
    THICKNESS, WALL_HEIGHT,
};
use crate::error::{ConfigError, ConfigResult};

/// Immutable physical parameters of a grille card.
///
/// Fields missing from a TOML file fall back to the defaults in
/// [`crate::constants`].
///
/// ## Example
///
/// ```rust
/// use grille_config::GrilleParams;
///
/// let params = GrilleParams::from_toml_str("holes_per_side = 6").unwrap();
/// assert_eq!(params.holes_per_side, 6);
/// assert_eq!(params.card_width, 77.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrilleParams {
    /// Usable card width (mm).
    pub card_width: f64,
    /// Rim added on every side of the card (mm).
    pub card_padding: f64,
    /// Side length of one square hole (mm).
    pub hole_side: f64,
    /// Gap between adjacent holes (mm).
    pub hole_gutter: f64,
    /// Holes per side of the grid. Must be even and at least 2.
    pub holes_per_side: usize,
    /// Thickness of the base prism (mm).
    pub thickness: f64,
    /// Wall margin height used to lift the frame cutter (mm).
    pub wall_height: f64,
}

impl Default for GrilleParams {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            card_padding: CARD_PADDING,
            hole_side: HOLE_SIDE,
            hole_gutter: HOLE_GUTTER,
            holes_per_side: HOLES_PER_SIDE,
            thickness: THICKNESS,
            wall_height: WALL_HEIGHT,
        }
    }
}

impl GrilleParams {
    // =========================================================================
    // LOADING
    // =========================================================================

    /// Parse parameters from a TOML document and validate them.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let params: Self = toml::from_str(source)?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a TOML file and validate them.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Check every invariant of the parameter set.
    ///
    /// Fails on:
    /// - a hole count that is below 2 or odd
    /// - a NaN or infinite dimension
    /// - a zero or negative card width, hole side or thickness
    /// - a negative padding, gutter or wall height
    /// - a hole grid wider than the card
    pub fn validate(&self) -> ConfigResult<()> {
        if self.holes_per_side < 2 {
            return Err(ConfigError::HoleCountTooSmall(self.holes_per_side));
        }
        if self.holes_per_side % 2 != 0 {
            return Err(ConfigError::OddHoleCount(self.holes_per_side));
        }

        for (name, value) in self.dimensions() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        for (name, value) in [
            ("card_width", self.card_width),
            ("hole_side", self.hole_side),
            ("thickness", self.thickness),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("card_padding", self.card_padding),
            ("hole_gutter", self.hole_gutter),
            ("wall_height", self.wall_height),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.margin() < 0.0 {
            return Err(ConfigError::GridExceedsCard {
                footprint: self.grid_footprint(),
                card_width: self.card_width,
            });
        }

        Ok(())
    }

    fn dimensions(&self) -> [(&'static str, f64); 6] {
        [
            ("card_width", self.card_width),
            ("card_padding", self.card_padding),
            ("hole_side", self.hole_side),
            ("hole_gutter", self.hole_gutter),
            ("thickness", self.thickness),
            ("wall_height", self.wall_height),
        ]
    }

    // =========================================================================
    // DERIVED MEASUREMENTS
    // =========================================================================

    /// Side of one quadrant (`N / 2`).
    #[must_use]
    pub fn half(&self) -> usize {
        self.holes_per_side / 2
    }

    /// Number of open cells in every valid hole mask (`(N / 2)^2`).
    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.half() * self.half()
    }

    /// Distance between the centers of two adjacent holes.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.hole_side + self.hole_gutter
    }

    /// Width covered by the hole grid: `hole_side + (N - 1) * pitch`.
    #[must_use]
    pub fn grid_footprint(&self) -> f64 {
        let gaps = self.holes_per_side.saturating_sub(1) as f64;
        self.hole_side + gaps * self.pitch()
    }

    /// Space between the card edge and the hole grid.
    #[must_use]
    pub fn margin(&self) -> f64 {
        (self.card_width - self.grid_footprint()) / 2.0
    }

    /// Width of the base prism, rim included.
    #[must_use]
    pub fn padded_width(&self) -> f64 {
        self.card_width + 2.0 * self.card_padding
    }

    /// Height of every hole cutter.
    #[must_use]
    pub fn cutter_height(&self) -> f64 {
        self.thickness * CUTTER_HEIGHT_FACTOR
    }

    /// Height of the frame cutter (`thickness + wall_height`).
    #[must_use]
    pub fn frame_cutter_height(&self) -> f64 {
        self.thickness + self.wall_height
    }

    /// Center coordinate of the hole at grid index `index` along one axis.
    ///
    /// The card is centered at the origin, so index 0 sits at
    /// `-card_width / 2 + margin + hole_side / 2`.
    #[must_use]
    pub fn cell_center(&self, index: usize) -> f64 {
        -self.card_width / 2.0 + self.margin() + self.hole_side / 2.0 + index as f64 * self.pitch()
    }
}
