//! # Grille Generator
//!
//! Deterministic seed → hole mask mapping.
//!
//! ## Algorithm
//!
//! ```text
//! 1. Draw one rotation count per home cell:  floor(next() * 4)
//! 2. Turn each home cell that many times inside its quadrant
//! 3. Shift it into the quadrant owned by the rotation count
//! 4. Open the resulting cell
//! ```
//!
//! Each home cell opens exactly one cell of its rotation orbit. The mask
//! therefore has `(N / 2)^2` holes, and a quarter turn of the card never
//! lands a hole on another hole.

use grille_config::{ConfigResult, GrilleParams};
use tracing::{debug, info};

use crate::grid::{HoleMask, RotationGrid};
use crate::random::{Mulberry32, SeededRandom};
use crate::rotation::place;

/// Output of one generation: the drawn rotations and the resulting holes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grille {
    /// Rotation count per home cell (`N/2 × N/2`).
    pub rotations: RotationGrid,
    /// Open cells of the full grid (`N × N`).
    pub holes: HoleMask,
}

/// Generates turning grilles of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrilleGenerator {
    holes_per_side: usize,
}

impl GrilleGenerator {
    /// Create a generator for the grid described by `params`.
    ///
    /// Invalid parameters are rejected here, before any generation starts.
    pub fn new(params: &GrilleParams) -> ConfigResult<Self> {
        params.validate()?;
        Ok(Self {
            holes_per_side: params.holes_per_side,
        })
    }

    /// Holes per side of the generated masks.
    #[must_use]
    pub fn holes_per_side(&self) -> usize {
        self.holes_per_side
    }

    /// Generate the grille for `seed` using the canonical [`Mulberry32`] stream.
    ///
    /// The same seed always yields the same grille.
    #[must_use]
    pub fn generate(&self, seed: u64) -> Grille {
        let mut rng = Mulberry32::new(seed);
        let grille = self.generate_with(&mut rng);
        info!(
            seed,
            open_cells = grille.holes.open_count(),
            "generated grille"
        );
        grille
    }

    /// Generate a grille from any random stream.
    pub fn generate_with<R: SeededRandom + ?Sized>(&self, rng: &mut R) -> Grille {
        let half = self.holes_per_side / 2;

        let rotations = RotationGrid::from_draws(half, || draw_rotation(rng));

        let mut holes = HoleMask::closed(self.holes_per_side);
        for y in 0..half {
            for x in 0..half {
                let count = rotations.get(x, y);
                debug!(x, y, rotations = count, "home cell");

                let (rx, ry) = place(x, y, count, half);
                debug!(rx, ry, "final position");
                holes.open(rx, ry);
            }
        }

        Grille { rotations, holes }
    }
}

/// One rotation count in `0..=3` from a float in `[0, 1)`.
fn draw_rotation<R: SeededRandom + ?Sized>(rng: &mut R) -> u8 {
    let value = (rng.next_unit() * 4.0).floor();
    value.clamp(0.0, 3.0) as u8
}
