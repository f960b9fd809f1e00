//! # Grids
//!
//! Fixed-shape square grids used by the generator.
//!
//! Both grids are allocated once at their final size and never grow. Cells
//! are addressed `[x][y]`: `x` is the column (left to right) and `y` is the
//! row (bottom to top).
//!
//! ## Storage
//!
//! ```text
//! index = x * side + y
//! ```

use std::fmt;

// =============================================================================
// ROTATION GRID
// =============================================================================

/// Quarter-turn count (0..=3) for each home cell of the bottom-left quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RotationGrid {
    side: usize,
    cells: Box<[u8]>,
}

impl RotationGrid {
    /// Build a grid of side `side`, filling cells in row-major order.
    ///
    /// `draw` is called once per cell: `x` in the outer loop and `y` in the
    /// inner loop. Values are reduced modulo 4.
    pub fn from_draws(side: usize, mut draw: impl FnMut() -> u8) -> Self {
        let mut cells = vec![0u8; side * side].into_boxed_slice();
        for cell in cells.iter_mut() {
            *cell = draw() % 4;
        }
        Self { side, cells }
    }

    /// Side of the grid (`N / 2`).
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Rotation count of home cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is out of range.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.side && y < self.side, "cell ({x}, {y}) out of range");
        self.cells[x * self.side + y]
    }

    /// Rows of the grid, indexed `[x][y]`.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells.chunks(self.side.max(1)).map(<[u8]>::to_vec).collect()
    }
}

// =============================================================================
// HOLE MASK
// =============================================================================

/// Open (cut-through) cells of an `N × N` grille.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HoleMask {
    side: usize,
    cells: Box<[bool]>,
}

impl HoleMask {
    /// All-closed mask of side `side`.
    #[must_use]
    pub fn closed(side: usize) -> Self {
        Self {
            side,
            cells: vec![false; side * side].into_boxed_slice(),
        }
    }

    /// Side of the grid (`N`).
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Whether cell `(x, y)` is open. Cells outside the grid are closed.
    #[must_use]
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        x < self.side && y < self.side && self.cells[x * self.side + y]
    }

    /// Open cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is out of range.
    pub fn open(&mut self, x: usize, y: usize) {
        assert!(x < self.side && y < self.side, "cell ({x}, {y}) out of range");
        self.cells[x * self.side + y] = true;
    }

    /// Number of open cells.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }

    /// Open cells in placement order: rows (`y`) outer, columns (`x`) inner.
    pub fn iter_open(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.side;
        (0..side)
            .flat_map(move |y| (0..side).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.is_open(x, y))
    }

    /// The mask after turning the whole card one quarter turn.
    ///
    /// Applies `(x, y) → (y, N - 1 - x)` to every cell.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut turned = Self::closed(self.side);
        for (x, y) in self.iter_open() {
            turned.open(y, self.side - 1 - x);
        }
        turned
    }

    /// True when no cell is open in both masks.
    ///
    /// # Panics
    ///
    /// Panics if the masks have different sides.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        assert_eq!(
            self.side, other.side,
            "cannot compare masks of different sides"
        );
        self.cells
            .iter()
            .zip(other.cells.iter())
            .all(|(&a, &b)| !(a && b))
    }
}

/// Renders the mask top row first, `#` for open and `.` for closed.
impl fmt::Display for HoleMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.side).rev() {
            let row: String = (0..self.side)
                .map(|x| if self.is_open(x, y) { '#' } else { '.' })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
