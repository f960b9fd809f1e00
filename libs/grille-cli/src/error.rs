//! Driver errors. Every variant aborts the current run.

use std::path::PathBuf;

use grille_config::ConfigError;
use grille_solid::SolidError;
use thiserror::Error;

/// Errors that stop a generation run.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid parameters or parameter file.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Solid construction or export failed.
    #[error("geometry error: {0}")]
    Solid(#[from] SolidError),

    /// The output file could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Bad command line.
    #[error("{0}")]
    Usage(String),
}

/// Result type alias for driver operations.
pub type CliResult<T> = Result<T, CliError>;
