//! # Grille CLI
//!
//! Driver for the grille pipeline. It resolves the seed, loads parameters,
//! generates the mask, builds the solid and writes the STL file.
//!
//! ## Pipeline
//!
//! ```text
//! seed → GrilleGenerator → HoleMask → SolidBuilder → Solid → BinaryStlExporter → file
//! ```
//!
//! The file is written in one go once all bytes exist. A configuration or
//! geometry failure leaves nothing on disk.

pub mod args;
pub mod error;
pub mod run;
pub mod seed;

pub use args::{parse_args, Command, RunOptions, USAGE};
pub use error::{CliError, CliResult};
pub use run::{run, RunReport};
pub use seed::{parse_seed, resolve_seed, SeedError};
