//! # Solid Builder Tests
//!
//! ## Test Categories
//!
//! - **Plan**: cutter count, placement and frame offset
//! - **Evaluate**: volume, holes and rim of the finished solid
//! - **Failure**: mask shape mismatch, edge-touching holes

use std::collections::HashSet;

use approx::assert_relative_eq;
use glam::DVec3;
use grille_config::GrilleParams;
use grille_gen::{GrilleGenerator, HoleMask};

use super::*;

fn default_grille_mask(seed: u64) -> HoleMask {
    GrilleGenerator::new(&GrilleParams::default())
        .unwrap()
        .generate(seed)
        .holes
}

fn default_builder() -> SolidBuilder {
    SolidBuilder::new(&GrilleParams::default()).unwrap()
}

// =============================================================================
// PLAN TESTS
// =============================================================================

/// Seed 1971: sixteen distinct hole cutters and one frame cutter.
#[test]
fn test_plan_seed_1971_cutters() {
    let plan = default_builder().plan(&default_grille_mask(1971)).unwrap();

    assert_eq!(plan.hole_cutters.len(), 16);
    let distinct: HashSet<_> = plan
        .hole_cutters
        .iter()
        .map(|c| (c.center().x.to_bits(), c.center().y.to_bits()))
        .collect();
    assert_eq!(distinct.len(), 16);

    // Mask order: rows outer, so (0, 0) comes before (6, 0).
    assert_eq!(plan.hole_cutters[0].center(), DVec3::new(-28.0, -28.0, 0.0));
    assert_eq!(plan.hole_cutters[1].center(), DVec3::new(20.0, -28.0, 0.0));
}

#[test]
fn test_plan_dimensions() {
    let plan = default_builder().plan(&default_grille_mask(1971)).unwrap();

    assert_eq!(plan.base.size(), DVec3::new(79.0, 79.0, 2.0));
    assert_eq!(plan.base.center(), DVec3::ZERO);

    for cutter in &plan.hole_cutters {
        assert_eq!(cutter.size(), DVec3::new(5.0, 5.0, 10.0));
        assert_eq!(cutter.center().z, 0.0);
    }

    assert_eq!(plan.frame_cutter.size(), DVec3::new(77.0, 77.0, 3.0));
    assert_eq!(plan.frame_cutter.center(), DVec3::new(0.0, 0.0, 1.5));
    assert_eq!(plan.frame_cutter.min().z, 0.0);
}

#[test]
fn test_plan_closed_mask_has_no_cutters() {
    let plan = default_builder().plan(&HoleMask::closed(8)).unwrap();
    assert!(plan.hole_cutters.is_empty());
}

// =============================================================================
// EVALUATE TESTS
// =============================================================================

#[test]
fn test_build_seed_1971_volume() {
    let solid = default_builder().build(&default_grille_mask(1971)).unwrap();
    // 79·79·2 − 77·77·1 − 16·5·5·1
    assert_relative_eq!(solid.volume(), 6153.0, epsilon = 1e-9);

    let bounds = solid.bounding_box().unwrap();
    assert_eq!(bounds.min(), DVec3::new(-39.5, -39.5, -1.0));
    assert_eq!(bounds.max(), DVec3::new(39.5, 39.5, 1.0));
}

#[test]
fn test_build_cuts_exactly_the_open_cells() {
    let params = GrilleParams::default();
    let mask = default_grille_mask(1971);
    let solid = default_builder().build(&mask).unwrap();

    for x in 0..8 {
        for y in 0..8 {
            let point = DVec3::new(params.cell_center(x), params.cell_center(y), -0.5);
            assert_eq!(
                solid.contains_point(point),
                !mask.is_open(x, y),
                "cell ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_build_leaves_rim_standing() {
    let solid = default_builder().build(&HoleMask::closed(8)).unwrap();
    // Inside the frame area only the lower layer remains.
    assert!(solid.contains_point(DVec3::new(0.0, 0.0, -0.5)));
    assert!(!solid.contains_point(DVec3::new(0.0, 0.0, 0.5)));
    // The rim keeps the full thickness.
    assert!(solid.contains_point(DVec3::new(39.0, 0.0, 0.5)));
    assert!(solid.contains_point(DVec3::new(-39.0, -39.0, 0.5)));
    assert_relative_eq!(solid.volume(), 12482.0 - 5929.0, epsilon = 1e-9);
}

#[test]
fn test_build_mesh_is_watertight() {
    let solid = default_builder().build(&default_grille_mask(1971)).unwrap();
    let mesh = solid.to_mesh().unwrap();
    assert!(mesh.is_closed());
    assert_relative_eq!(mesh.signed_volume(), 6153.0, max_relative = 1e-3);
}

#[test]
fn test_build_is_deterministic() {
    let builder = default_builder();
    let mask = default_grille_mask(42);
    assert_eq!(builder.build(&mask).unwrap(), builder.build(&mask).unwrap());
}

// =============================================================================
// FAILURE TESTS
// =============================================================================

#[test]
fn test_mask_shape_mismatch() {
    let err = default_builder().plan(&HoleMask::closed(6)).unwrap_err();
    assert!(matches!(
        err,
        SolidError::MaskShape {
            expected: 8,
            actual: 6
        }
    ));
}

#[test]
fn test_invalid_params_rejected() {
    let params = GrilleParams {
        holes_per_side: 3,
        ..GrilleParams::default()
    };
    assert!(matches!(
        SolidBuilder::new(&params),
        Err(SolidError::Config(_))
    ));
}

/// Holes meeting only along an edge cannot be exported.
#[test]
fn test_edge_touching_holes_are_not_manifold() {
    let params = GrilleParams {
        holes_per_side: 2,
        hole_gutter: 0.0,
        ..GrilleParams::default()
    };
    let mut mask = HoleMask::closed(2);
    mask.open(0, 0);
    mask.open(1, 1);

    let solid = SolidBuilder::new(&params).unwrap().build(&mask).unwrap();
    let err = solid.to_mesh().unwrap_err();
    assert!(matches!(
        err,
        SolidError::NonManifold {
            non_manifold_edges,
            ..
        } if non_manifold_edges > 0
    ));
}
