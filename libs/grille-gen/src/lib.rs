//! Turning grille generation.
//!
//! Maps a seed to a hole pattern for a Cardano grille. This is a square
//! card whose holes, over four 90° turns, expose every cell of an N×N grid
//! exactly once.
//!
//! ## Pipeline
//!
//! ```text
//! seed ──► Mulberry32 ──► RotationGrid (N/2 × N/2, values 0..=3)
//!                               │
//!                               ▼
//!                 rotate + place in quadrant
//!                               │
//!                               ▼
//!                        HoleMask (N × N)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use grille_config::GrilleParams;
//! use grille_gen::GrilleGenerator;
//!
//! let generator = GrilleGenerator::new(&GrilleParams::default()).unwrap();
//! let grille = generator.generate(1971);
//!
//! assert_eq!(grille.holes.open_count(), 16);
//! assert!(grille.holes.is_disjoint(&grille.holes.rotated()));
//! ```

pub mod generator;
pub mod grid;
pub mod random;
pub mod rotation;

pub use generator::{Grille, GrilleGenerator};
pub use grid::{HoleMask, RotationGrid};
pub use random::{Mulberry32, SeededRandom};
pub use rotation::Quadrant;
