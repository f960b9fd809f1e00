//! # Boolean Operations
//!
//! CSG boolean operations on cell complexes: Union, Difference, Intersection.
//!
//! ## Algorithm
//!
//! ```text
//! 1. Merge the breakpoints of both operands per axis (snapping within EPSILON)
//! 2. Map every merged slab back to the operand slab that covers it
//! 3. Combine the two occupancy flags of each merged cell
//! 4. Compact: drop empty border slabs and planes between identical slabs
//! ```
//!
//! Both operands share the merged grid, so the result is exact. No
//! intersection curves are computed and no tolerance-dependent
//! classification is needed.

use grille_config::constants::{approx_equal, EPSILON, MAX_GRID_CELLS};
use tracing::trace;

use super::{positions, Solid};
use crate::error::{SolidError, SolidResult};

/// Boolean operation applied cell by cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// `A ∪ B`
    Union,
    /// `A − B`
    Difference,
    /// `A ∩ B`
    Intersection,
}

impl BooleanOp {
    /// Lowercase operation name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Difference => "difference",
            Self::Intersection => "intersection",
        }
    }

    #[inline]
    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Self::Union => a || b,
            Self::Difference => a && !b,
            Self::Intersection => a && b,
        }
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

impl Solid {
    /// Combined volume of `self` and `other`.
    pub fn union(self, other: &Solid) -> SolidResult<Solid> {
        self.combine(other, BooleanOp::Union)
    }

    /// `self` with `tool` carved out.
    pub fn subtract(self, tool: &Solid) -> SolidResult<Solid> {
        self.combine(tool, BooleanOp::Difference)
    }

    /// Volume common to `self` and `other`.
    pub fn intersect(self, other: &Solid) -> SolidResult<Solid> {
        self.combine(other, BooleanOp::Intersection)
    }

    /// Union of every solid in `solids`, or the empty solid.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use grille_solid::{Cuboid, Solid};
    ///
    /// let cubes = (0..3).map(|i| {
    ///     let center = DVec3::new(2.0 * i as f64, 0.0, 0.0);
    ///     Solid::cuboid(Cuboid::new(DVec3::ONE, center).unwrap())
    /// });
    /// let merged = Solid::union_all(cubes).unwrap();
    /// assert_eq!(merged.volume(), 3.0);
    /// ```
    pub fn union_all<I>(solids: I) -> SolidResult<Solid>
    where
        I: IntoIterator<Item = Solid>,
    {
        solids
            .into_iter()
            .try_fold(Solid::empty(), |acc, solid| acc.union(&solid))
    }

    /// Apply `op` to `self` and `other`.
    pub fn combine(self, other: &Solid, op: BooleanOp) -> SolidResult<Solid> {
        match (self.is_empty(), other.is_empty(), op) {
            (true, _, BooleanOp::Union) => return Ok(other.clone()),
            (true, _, _) | (_, true, BooleanOp::Intersection) => return Ok(Solid::empty()),
            (false, true, _) => return Ok(self),
            _ => {}
        }

        let axes: [Vec<f64>; 3] =
            [0, 1, 2].map(|axis| merge_breakpoints(&self.axes[axis], &other.axes[axis]));
        let dims = [0, 1, 2].map(|axis| axes[axis].len() - 1);
        let total = dims
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .filter(|&total| total <= MAX_GRID_CELLS)
            .ok_or_else(|| SolidError::BooleanError {
                operation: op.name().to_string(),
                message: format!("merged grid {dims:?} exceeds {MAX_GRID_CELLS} cells"),
            })?;

        let map_a = [0, 1, 2].map(|axis| slab_map(&self.axes[axis], &axes[axis]));
        let map_b = [0, 1, 2].map(|axis| slab_map(&other.axes[axis], &axes[axis]));

        let mut cells = Vec::with_capacity(total);
        for pos in positions(dims) {
            let a = self.cell_through(&map_a, pos);
            let b = other.cell_through(&map_b, pos);
            cells.push(op.apply(a, b));
        }

        trace!(operation = op.name(), ?dims, "boolean grid merged");
        Ok(Solid { axes, cells }.compact())
    }

    // =========================================================================
    // INTERNAL IMPLEMENTATION
    // =========================================================================

    /// Occupancy of the operand cell covering merged cell `pos`.
    fn cell_through(&self, maps: &[Vec<Option<usize>>; 3], pos: [usize; 3]) -> bool {
        match (maps[0][pos[0]], maps[1][pos[1]], maps[2][pos[2]]) {
            (Some(i), Some(j), Some(k)) => self.cell([i, j, k]),
            _ => false,
        }
    }

    /// Remove empty border slabs and merge identical neighbouring slabs.
    fn compact(self) -> Solid {
        let mut solid = self;
        for axis in 0..3 {
            match solid.compact_axis(axis) {
                Some(compacted) => solid = compacted,
                None => return Solid::empty(),
            }
        }
        solid
    }

    /// Compact one axis, or `None` when every slab is empty.
    fn compact_axis(&self, axis: usize) -> Option<Solid> {
        let slabs = self.dims()[axis];
        let lo = (0..slabs).find(|&s| !self.slab_is_empty(axis, s))?;
        let hi = (0..slabs).rev().find(|&s| !self.slab_is_empty(axis, s))?;

        let breaks = &self.axes[axis];
        let mut kept_breaks = vec![breaks[lo]];
        let mut reps = vec![lo];
        for s in lo + 1..=hi {
            let last = reps[reps.len() - 1];
            if !self.slabs_equal(axis, s, last) {
                kept_breaks.push(breaks[s]);
                reps.push(s);
            }
        }
        kept_breaks.push(breaks[hi + 1]);

        if reps.len() == slabs {
            return Some(self.clone());
        }
        Some(self.resample(axis, kept_breaks, &reps))
    }

    /// Rebuild the grid with new breakpoints on `axis`; new slab `i` copies old slab `reps[i]`.
    fn resample(&self, axis: usize, breaks: Vec<f64>, reps: &[usize]) -> Solid {
        let mut dims = self.dims();
        dims[axis] = reps.len();

        let cells = positions(dims)
            .map(|mut pos| {
                pos[axis] = reps[pos[axis]];
                self.cell(pos)
            })
            .collect();

        let mut axes = self.axes.clone();
        axes[axis] = breaks;
        Solid { axes, cells }
    }

    fn slab_is_empty(&self, axis: usize, slab: usize) -> bool {
        self.slab_positions(axis, slab).all(|pos| !self.cell(pos))
    }

    fn slabs_equal(&self, axis: usize, a: usize, b: usize) -> bool {
        self.slab_positions(axis, a).all(|pos| {
            let mut other = pos;
            other[axis] = b;
            self.cell(pos) == self.cell(other)
        })
    }

    /// Positions of every cell in slab `slab` of `axis`.
    fn slab_positions(&self, axis: usize, slab: usize) -> impl Iterator<Item = [usize; 3]> {
        let mut dims = self.dims();
        dims[axis] = 1;
        positions(dims).map(move |mut pos| {
            pos[axis] = slab;
            pos
        })
    }
}

/// Sorted union of two breakpoint lists; values [`approx_equal`] to a kept
/// breakpoint collapse onto it.
fn merge_breakpoints(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut merged: Vec<f64> = a.iter().chain(b).copied().collect();
    merged.sort_by(f64::total_cmp);
    merged.dedup_by(|next, kept| approx_equal(*next, *kept));
    merged
}

/// Index of the merged breakpoint that `value` snapped to.
fn snap_index(merged: &[f64], value: f64) -> usize {
    merged.partition_point(|&m| m < value - EPSILON)
}

/// For every merged slab, the operand slab covering it (if any).
fn slab_map(operand: &[f64], merged: &[f64]) -> Vec<Option<usize>> {
    let mut map = vec![None; merged.len().saturating_sub(1)];
    let snapped: Vec<usize> = operand.iter().map(|&b| snap_index(merged, b)).collect();
    for (slab, bounds) in snapped.windows(2).enumerate() {
        for entry in &mut map[bounds[0]..bounds[1]] {
            *entry = Some(slab);
        }
    }
    map
}
