//! # Error Types
//!
//! Error types for solid construction and export.
//!
//! ## Error Policy
//!
//! - NO partial or degraded solids: every failure is returned to the caller
//! - A mesh that is not watertight is an error, never an output
//! - Errors include context for debugging

use grille_config::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or exporting a grille solid.
#[derive(Error, Debug)]
pub enum SolidError {
    /// Invalid primitive geometry (non-finite or non-positive size).
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// Error during a boolean operation.
    #[error("Boolean operation '{operation}' failed: {message}")]
    BooleanError {
        /// Name of the boolean operation (union, difference, intersection)
        operation: String,
        /// Error message
        message: String,
    },

    /// The extracted mesh is not watertight.
    #[error(
        "Mesh is not manifold: {boundary_edges} open edges, {non_manifold_edges} non-manifold edges"
    )]
    NonManifold {
        /// Edges used by a single triangle
        boundary_edges: usize,
        /// Edges used by more than two triangles or with mismatched winding
        non_manifold_edges: usize,
    },

    /// The hole mask does not match the configured grid.
    #[error("hole mask is {actual}x{actual}, expected {expected}x{expected}")]
    MaskShape {
        /// Configured holes per side
        expected: usize,
        /// Side of the supplied mask
        actual: usize,
    },

    /// The mesh could not be serialized.
    #[error("STL export failed: {0}")]
    Stl(String),

    /// Invalid grille parameters.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for solid operations.
pub type SolidResult<T> = Result<T, SolidError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let bool_err = SolidError::BooleanError {
            operation: "union".to_string(),
            message: "grid too large".to_string(),
        };
        assert!(bool_err.to_string().contains("union"));
        assert!(bool_err.to_string().contains("grid too large"));

        let manifold_err = SolidError::NonManifold {
            boundary_edges: 3,
            non_manifold_edges: 0,
        };
        assert!(manifold_err.to_string().contains("3 open edges"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: SolidError = ConfigError::OddHoleCount(3).into();
        assert!(matches!(err, SolidError::Config(_)));
        assert!(err.to_string().contains("even"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SolidError>();
    }
}
