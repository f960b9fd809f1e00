//! # Solid Builder
//!
//! Turns a hole mask into the printable grille card.
//!
//! ## Construction
//!
//! ```text
//!          frame cutter (card_width², lifted)
//!        ┌───────────────────────────────┐
//!   ┌────┼───────────────────────────────┼────┐  ← rim left standing
//!   │    └──┬─┬──────┬─┬───────┬─┬───────┘    │
//!   │  base │ │      │ │       │ │            │
//!   └───────┴─┴──────┴─┴───────┴─┴────────────┘
//!           hole cutters (5× thickness, through)
//!
//! result = (base − ∪ hole_cutters) − frame_cutter
//! ```
//!
//! The hole cutters are unioned before anything is subtracted, and the frame
//! is subtracted last. The output mesh is only checked against this order.

use glam::DVec3;
use grille_config::GrilleParams;
use grille_gen::HoleMask;
use tracing::info;

use crate::cuboid::Cuboid;
use crate::error::{SolidError, SolidResult};
use crate::solid::Solid;

/// The primitives of one grille, before any boolean operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CsgPlan {
    /// Padded card prism, centered at the origin.
    pub base: Cuboid,
    /// One through-cutter per open cell, in mask order.
    pub hole_cutters: Vec<Cuboid>,
    /// Removes the top layer over the unpadded card area.
    pub frame_cutter: Cuboid,
}

impl CsgPlan {
    /// Run the boolean pipeline: `(base − ∪ hole_cutters) − frame_cutter`.
    pub fn evaluate(self) -> SolidResult<Solid> {
        let hole_count = self.hole_cutters.len();

        let base = Solid::cuboid(self.base);
        let holes = Solid::union_all(self.hole_cutters.into_iter().map(Solid::cuboid))?;
        let frame = Solid::cuboid(self.frame_cutter);

        let solid = base.subtract(&holes)?.subtract(&frame)?;
        info!(
            hole_cutters = hole_count,
            frame_cutters = 1,
            cells = solid.filled_cell_count(),
            "grille solid built"
        );
        Ok(solid)
    }
}

/// Builds grille solids for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidBuilder {
    params: GrilleParams,
}

impl SolidBuilder {
    /// Create a builder, rejecting invalid parameters up front.
    pub fn new(params: &GrilleParams) -> SolidResult<Self> {
        params.validate()?;
        Ok(Self { params: *params })
    }

    #[must_use]
    pub fn params(&self) -> &GrilleParams {
        &self.params
    }

    /// Lay out the primitives for `mask`. Closed cells get no cutter.
    pub fn plan(&self, mask: &HoleMask) -> SolidResult<CsgPlan> {
        let p = &self.params;
        if mask.side() != p.holes_per_side {
            return Err(SolidError::MaskShape {
                expected: p.holes_per_side,
                actual: mask.side(),
            });
        }

        let width = p.padded_width();
        let base = Cuboid::new(DVec3::new(width, width, p.thickness), DVec3::ZERO)?;

        let hole_size = DVec3::new(p.hole_side, p.hole_side, p.cutter_height());
        let hole_cutters = mask
            .iter_open()
            .map(|(x, y)| {
                let center = DVec3::new(p.cell_center(x), p.cell_center(y), 0.0);
                Cuboid::new(hole_size, center)
            })
            .collect::<SolidResult<Vec<_>>>()?;

        let frame_height = p.frame_cutter_height();
        let frame_cutter = Cuboid::new(
            DVec3::new(p.card_width, p.card_width, frame_height),
            DVec3::new(0.0, 0.0, frame_height / 2.0),
        )?;

        Ok(CsgPlan {
            base,
            hole_cutters,
            frame_cutter,
        })
    }

    /// Build the finished solid for `mask`.
    pub fn build(&self, mask: &HoleMask) -> SolidResult<Solid> {
        self.plan(mask)?.evaluate()
    }
}

#[cfg(test)]
mod tests;
