//! # Configuration Constants
//!
//! Centralized constants for the grille pipeline. Card dimensions, seed
//! defaults and geometry kernel tolerances are defined here.
//!
//! ## Categories
//!
//! - **Card**: Physical dimensions of the printed card (millimetres)
//! - **Seed**: Default seed used when none (or an invalid one) is supplied
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// CARD CONSTANTS
// =============================================================================

/// Usable width of the card (a standard sticky note).
///
/// The hole grid is centered inside this square. The frame cutter removes
/// the top layer over exactly this area.
pub const CARD_WIDTH: f64 = 77.0;

/// Extra rim added on every side of the card.
///
/// The base prism is `CARD_WIDTH + 2 * CARD_PADDING` wide, so the rim left
/// standing after the frame cut is `CARD_PADDING` thick.
pub const CARD_PADDING: f64 = 1.0;

/// Side length of one square hole.
pub const HOLE_SIDE: f64 = 5.0;

/// Gap between two adjacent holes.
pub const HOLE_GUTTER: f64 = 3.0;

/// Number of holes per side of the grid.
///
/// Must be even: the grid is split into four quadrants of side `N / 2`.
///
/// # Example
///
/// ```rust
/// use grille_config::constants::HOLES_PER_SIDE;
///
/// assert_eq!(HOLES_PER_SIDE % 2, 0);
/// let open_cells = (HOLES_PER_SIDE / 2).pow(2);
/// assert_eq!(open_cells, 16);
/// ```
pub const HOLES_PER_SIDE: usize = 8;

/// Thickness of the base prism.
pub const THICKNESS: f64 = 2.0;

/// Height of the wall margin above the base mid-plane.
///
/// The frame cutter is `THICKNESS + WALL_HEIGHT` tall and is lifted by half
/// of that, so it only removes material from the top of the card.
pub const WALL_HEIGHT: f64 = 1.0;

/// Hole cutters are this many times taller than the card.
///
/// Cutters must stick out of both faces of the base so the cut goes
/// cleanly through.
pub const CUTTER_HEIGHT_FACTOR: f64 = 5.0;

// =============================================================================
// SEED CONSTANTS
// =============================================================================

/// Seed used when none is supplied or the supplied value is invalid.
///
/// # Example
///
/// ```rust
/// use grille_config::constants::DEFAULT_SEED;
///
/// let user_seed: Option<u64> = None;
/// assert_eq!(user_seed.unwrap_or(DEFAULT_SEED), 1971);
/// ```
pub const DEFAULT_SEED: u64 = 1971;

/// Prefix of the exported STL file name (`cardano_seed_<seed>.stl`).
pub const STL_FILE_PREFIX: &str = "cardano_seed_";

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Two breakpoints at most this far apart are treated as the same plane
/// when solids are combined.
///
/// # Example
///
/// ```rust
/// use grille_config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() <= EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of cells in the grid of a boolean result.
///
/// Safety limit to prevent memory exhaustion from pathological inputs.
pub const MAX_GRID_CELLS: usize = 16_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// Values exactly `EPSILON` apart count as equal.
///
/// # Example
///
/// ```rust
/// use grille_config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}
