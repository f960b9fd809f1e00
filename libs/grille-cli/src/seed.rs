//! Seed input handling.
//!
//! A bad seed is the one error recovered locally: the run falls back to
//! [`DEFAULT_SEED`] and carries on.

use grille_config::constants::DEFAULT_SEED;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a seed string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed is empty")]
    Empty,

    #[error("seed {0:?} is negative")]
    Negative(String),

    #[error("seed {0:?} is not a number")]
    NotANumber(String),

    #[error("seed {0:?} is too large")]
    OutOfRange(String),
}

/// Parse a non-negative integer seed.
///
/// ```rust
/// use grille_cli::{parse_seed, SeedError};
///
/// assert_eq!(parse_seed(" 42 "), Ok(42));
/// assert!(matches!(parse_seed("-1"), Err(SeedError::Negative(_))));
/// ```
pub fn parse_seed(input: &str) -> Result<u64, SeedError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SeedError::Empty);
    }

    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if let Some(rest) = trimmed.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SeedError::Negative(trimmed.to_string()));
        }
        return Err(SeedError::NotANumber(trimmed.to_string()));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) || digits.is_empty() {
        return Err(SeedError::NotANumber(trimmed.to_string()));
    }

    digits
        .parse()
        .map_err(|_| SeedError::OutOfRange(trimmed.to_string()))
}

/// Seed to use for a run: the parsed input, or [`DEFAULT_SEED`].
pub fn resolve_seed(input: Option<&str>) -> u64 {
    match input.map(parse_seed) {
        None => {
            debug!(seed = DEFAULT_SEED, "no seed supplied, using default");
            DEFAULT_SEED
        }
        Some(Ok(seed)) => seed,
        Some(Err(err)) => {
            warn!(%err, seed = DEFAULT_SEED, "invalid seed, using default");
            DEFAULT_SEED
        }
    }
}
