//! # Solid Module
//!
//! Exact constructive solid geometry over axis-aligned cuboids.
//!
//! ## Representation
//!
//! A [`Solid`] is a rectilinear cell complex. It has three sorted breakpoint
//! axes, and the planes through those breakpoints cut space into boxes
//! ("cells"). Each cell is either filled or empty.
//!
//! ```text
//!   y ▲  ys[2] ┼───┼───┼───┼
//!     │        │ █ │   │ █ │
//!     │  ys[1] ┼───┼───┼───┼
//!     │        │ █ │ █ │ █ │
//!     │  ys[0] ┼───┼───┼───┼
//!     │      xs[0] xs[1] xs[2] xs[3]
//!     └────────────────────────► x
//! ```
//!
//! ## Structure
//!
//! - `boolean`: Union, Difference, Intersection on merged grids
//! - `surface`: Boundary extraction into a welded [`Mesh`](crate::Mesh)
//!
//! Every operation consumes its left operand and returns a fresh value, and
//! results are compacted so equal solids compare equal.

mod boolean;
mod surface;


pub use boolean::BooleanOp;

use glam::DVec3;

use crate::cuboid::Cuboid;

// =============================================================================
// SOLID STRUCT
// =============================================================================

/// A watertight solid made of axis-aligned cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    /// Sorted breakpoints along x, y and z.
    axes: [Vec<f64>; 3],
    /// Occupancy per cell, x fastest, then y, then z.
    cells: Vec<bool>,
}

impl Solid {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// The empty solid.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            axes: [Vec::new(), Vec::new(), Vec::new()],
            cells: Vec::new(),
        }
    }

    /// A solid filling exactly `cuboid`.
    #[must_use]
    pub fn cuboid(cuboid: Cuboid) -> Self {
        let (min, max) = (cuboid.min(), cuboid.max());
        Self {
            axes: [vec![min.x, max.x], vec![min.y, max.y], vec![min.z, max.z]],
            cells: vec![true],
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// True when no cell is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&filled| filled)
    }

    /// Number of cells in the underlying grid (filled or not).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Breakpoints along `axis` (0 = x, 1 = y, 2 = z).
    #[cfg(test)]
    pub(crate) fn breakpoints(&self, axis: usize) -> &[f64] {
        &self.axes[axis]
    }

    /// Enclosed volume.
    #[must_use]
    pub fn volume(&self) -> f64 {
        positions(self.dims())
            .filter(|&pos| self.cell(pos))
            .map(|pos| {
                (0..3)
                    .map(|axis| self.axes[axis][pos[axis] + 1] - self.axes[axis][pos[axis]])
                    .product::<f64>()
            })
            .sum()
    }

    /// Tight bounding box, or `None` for the empty solid.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Cuboid> {
        if self.is_empty() {
            return None;
        }
        let [xs, ys, zs] = &self.axes;
        let min = DVec3::new(xs[0], ys[0], zs[0]);
        let max = DVec3::new(xs[xs.len() - 1], ys[ys.len() - 1], zs[zs.len() - 1]);
        Some(Cuboid::from_corners(min, max))
    }

    /// Whether `point` lies inside the solid.
    ///
    /// Cells are half-open: a point on a cell's low face belongs to the cell.
    #[must_use]
    pub fn contains_point(&self, point: DVec3) -> bool {
        let coords = point.to_array();
        let mut pos = [0usize; 3];
        for axis in 0..3 {
            match locate(&self.axes[axis], coords[axis]) {
                Some(slab) => pos[axis] = slab,
                None => return false,
            }
        }
        self.cell(pos)
    }

    // =========================================================================
    // GRID HELPERS
    // =========================================================================

    /// Number of cells along each axis.
    fn dims(&self) -> [usize; 3] {
        [0, 1, 2].map(|axis| self.axes[axis].len().saturating_sub(1))
    }

    fn index(&self, pos: [usize; 3]) -> usize {
        let [nx, ny, _] = self.dims();
        pos[0] + nx * (pos[1] + ny * pos[2])
    }

    fn cell(&self, pos: [usize; 3]) -> bool {
        self.cells[self.index(pos)]
    }
}

/// All cell positions of a grid of `dims`, in storage order.
fn positions(dims: [usize; 3]) -> impl Iterator<Item = [usize; 3]> {
    let [nx, ny, nz] = dims;
    (0..nz).flat_map(move |k| (0..ny).flat_map(move |j| (0..nx).map(move |i| [i, j, k])))
}

/// Slab of `axis` containing `coord`, if any.
fn locate(axis: &[f64], coord: f64) -> Option<usize> {
    let (first, last) = (*axis.first()?, *axis.last()?);
    if !(first..last).contains(&coord) {
        return None;
    }
    Some(axis.partition_point(|&b| b <= coord) - 1)
}
