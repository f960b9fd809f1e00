//! # Tests for Config
//!
//! Unit tests verifying the constants, the derived layout and the
//! parameter validation rules.

use approx::assert_relative_eq;

use crate::constants::*;
use crate::{ConfigError, GrilleParams};

// =============================================================================
// CONSTANT TESTS
// =============================================================================

#[test]
fn test_epsilon_is_small_and_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_default_hole_count_is_even() {
    assert_eq!(HOLES_PER_SIDE % 2, 0);
}

#[test]
fn test_default_seed() {
    assert_eq!(DEFAULT_SEED, 1971);
}

#[test]
fn test_approx_equal() {
    assert!(approx_equal(0.5, 0.5 + 1e-12));
    assert!(!approx_equal(0.5, 0.6));
}

#[test]
fn test_approx_equal_includes_tolerance() {
    assert!(approx_equal(0.0, EPSILON));
    assert!(approx_equal(-EPSILON, 0.0));
    assert!(!approx_equal(0.0, 2.0 * EPSILON));
}

// =============================================================================
// LAYOUT TESTS
// =============================================================================

#[test]
fn test_default_layout() {
    let params = GrilleParams::default();
    assert_eq!(params.half(), 4);
    assert_eq!(params.open_cell_count(), 16);
    assert_relative_eq!(params.pitch(), 8.0);
    assert_relative_eq!(params.grid_footprint(), 61.0);
    assert_relative_eq!(params.margin(), 8.0);
    assert_relative_eq!(params.padded_width(), 79.0);
    assert_relative_eq!(params.cutter_height(), 10.0);
    assert_relative_eq!(params.frame_cutter_height(), 3.0);
}

#[test]
fn test_cell_centers_are_symmetric() {
    let params = GrilleParams::default();
    let n = params.holes_per_side;
    assert_relative_eq!(params.cell_center(0), -28.0);
    assert_relative_eq!(params.cell_center(n - 1), 28.0);
    for i in 0..n {
        assert_relative_eq!(params.cell_center(i), -params.cell_center(n - 1 - i));
    }
}

#[test]
fn test_grid_fits_inside_card() {
    let params = GrilleParams::default();
    let first_edge = params.cell_center(0) - params.hole_side / 2.0;
    assert_relative_eq!(first_edge, -params.card_width / 2.0 + params.margin());
}

// =============================================================================
// VALIDATION TESTS
// =============================================================================

#[test]
fn test_default_params_are_valid() {
    assert!(GrilleParams::default().validate().is_ok());
}

#[test]
fn test_rejects_odd_hole_count() {
    let params = GrilleParams {
        holes_per_side: 7,
        ..GrilleParams::default()
    };
    assert!(matches!(params.validate(), Err(ConfigError::OddHoleCount(7))));
}

#[test]
fn test_rejects_tiny_hole_count() {
    for n in [0, 1] {
        let params = GrilleParams {
            holes_per_side: n,
            ..GrilleParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::HoleCountTooSmall(_))
        ));
    }
}

#[test]
fn test_smallest_grid_is_valid() {
    let params = GrilleParams {
        holes_per_side: 2,
        ..GrilleParams::default()
    };
    assert!(params.validate().is_ok());
}

#[test]
fn test_rejects_negative_gutter() {
    let params = GrilleParams {
        hole_gutter: -1.0,
        ..GrilleParams::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::Negative {
            name: "hole_gutter",
            ..
        })
    ));
}

#[test]
fn test_rejects_zero_thickness() {
    let params = GrilleParams {
        thickness: 0.0,
        ..GrilleParams::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::NonPositive {
            name: "thickness",
            ..
        })
    ));
}

#[test]
fn test_rejects_nan_dimension() {
    let params = GrilleParams {
        hole_side: f64::NAN,
        ..GrilleParams::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::NonFinite {
            name: "hole_side",
            ..
        })
    ));
}

#[test]
fn test_rejects_grid_wider_than_card() {
    let params = GrilleParams {
        holes_per_side: 12,
        ..GrilleParams::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::GridExceedsCard { .. })
    ));
}

// =============================================================================
// TOML TESTS
// =============================================================================

#[test]
fn test_toml_overrides_and_defaults() {
    let params = GrilleParams::from_toml_str(
        r#"
        holes_per_side = 4
        hole_side = 10.0
        "#,
    )
    .unwrap();
    assert_eq!(params.holes_per_side, 4);
    assert_eq!(params.hole_side, 10.0);
    assert_eq!(params.thickness, THICKNESS);
}

#[test]
fn test_toml_empty_document_is_default() {
    let params = GrilleParams::from_toml_str("").unwrap();
    assert_eq!(params, GrilleParams::default());
}

#[test]
fn test_toml_invalid_params_rejected() {
    let err = GrilleParams::from_toml_str("holes_per_side = 5").unwrap_err();
    assert!(matches!(err, ConfigError::OddHoleCount(5)));
}

#[test]
fn test_toml_unknown_field_rejected() {
    let err = GrilleParams::from_toml_str("hole_count = 8").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_reports_path() {
    let err = GrilleParams::from_file("/nonexistent/grille.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/grille.toml"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigError>();
}
