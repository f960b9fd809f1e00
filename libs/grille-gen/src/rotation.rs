//! # Quadrant Rotation
//!
//! A grille cell is described by its "home" position `(x, y)` inside the
//! bottom-left quadrant and by how many quarter turns the card has made
//! before that cell is punched. Each turn count owns one quadrant of the
//! full grid:
//!
//! ```text
//!   y ▲
//!     │  1: TopLeft    │ 2: TopRight
//!     │ ───────────────┼──────────────
//!     │  0: BottomLeft │ 3: BottomRight
//!     └──────────────────────────────► x
//! ```
//!
//! Rotations are applied one quarter turn at a time.

/// Quadrant of the full grid selected by a rotation count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// No rotation.
    BottomLeft,
    /// One quarter turn.
    TopLeft,
    /// Two quarter turns.
    TopRight,
    /// Three quarter turns.
    BottomRight,
}

impl Quadrant {
    /// Quadrant for a rotation count (taken modulo 4).
    #[must_use]
    pub fn from_rotations(rotations: u8) -> Self {
        match rotations % 4 {
            0 => Self::BottomLeft,
            1 => Self::TopLeft,
            2 => Self::TopRight,
            _ => Self::BottomRight,
        }
    }

    /// `(dx, dy)` offset of this quadrant, in units of the quadrant side.
    #[must_use]
    pub fn offset(self) -> (usize, usize) {
        match self {
            Self::BottomLeft => (0, 0),
            Self::TopLeft => (0, 1),
            Self::TopRight => (1, 1),
            Self::BottomRight => (1, 0),
        }
    }
}

/// One 90° clockwise turn of `(x, y)` inside a sub-grid of side `half`.
///
/// `(x, y) → (y, half - 1 - x)`
#[inline]
#[must_use]
pub fn rotate_quadrant(x: usize, y: usize, half: usize) -> (usize, usize) {
    (y, half - 1 - x)
}

/// Absolute grid cell punched for home cell `(x, y)` turned `rotations` times.
///
/// The home cell is turned `rotations` times inside the quadrant, then
/// shifted into the quadrant that the rotation count selects.
#[must_use]
pub fn place(x: usize, y: usize, rotations: u8, half: usize) -> (usize, usize) {
    let (mut rx, mut ry) = (x, y);
    for _ in 0..rotations {
        (rx, ry) = rotate_quadrant(rx, ry, half);
        tracing::trace!(rx, ry, "partial position");
    }

    let (dx, dy) = Quadrant::from_rotations(rotations).offset();
    (rx + dx * half, ry + dy * half)
}

/// The four grid cells a home cell can end up in, indexed by rotation count.
///
/// Orbits of distinct home cells are disjoint and together cover the whole
/// `2·half × 2·half` grid.
#[must_use]
pub fn orbit(x: usize, y: usize, half: usize) -> [(usize, usize); 4] {
    [0, 1, 2, 3].map(|rotations| place(x, y, rotations, half))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rotate_quadrant_rule() {
        assert_eq!(rotate_quadrant(0, 0, 4), (0, 3));
        assert_eq!(rotate_quadrant(0, 3, 4), (3, 3));
        assert_eq!(rotate_quadrant(3, 3, 4), (3, 0));
        assert_eq!(rotate_quadrant(3, 0, 4), (0, 0));
    }

    #[test]
    fn test_four_turns_is_identity() {
        let half = 5;
        for x in 0..half {
            for y in 0..half {
                let mut p = (x, y);
                for _ in 0..4 {
                    p = rotate_quadrant(p.0, p.1, half);
                }
                assert_eq!(p, (x, y));
            }
        }
    }

    #[test]
    fn test_place_quadrants() {
        // Home cell (1, 0) with half = 4.
        assert_eq!(place(1, 0, 0, 4), (1, 0));
        assert_eq!(place(1, 0, 1, 4), (0, 2 + 4));
        assert_eq!(place(1, 0, 2, 4), (2 + 4, 3 + 4));
        assert_eq!(place(1, 0, 3, 4), (3 + 4, 1));
    }

    #[test]
    fn test_quadrant_from_rotations() {
        assert_eq!(Quadrant::from_rotations(0), Quadrant::BottomLeft);
        assert_eq!(Quadrant::from_rotations(1), Quadrant::TopLeft);
        assert_eq!(Quadrant::from_rotations(2), Quadrant::TopRight);
        assert_eq!(Quadrant::from_rotations(3), Quadrant::BottomRight);
    }

    #[test]
    fn test_orbits_partition_the_grid() {
        let half = 4;
        let mut seen = HashSet::new();
        for x in 0..half {
            for y in 0..half {
                for cell in orbit(x, y, half) {
                    assert!(cell.0 < 2 * half && cell.1 < 2 * half);
                    assert!(seen.insert(cell), "cell {cell:?} in two orbits");
                }
            }
        }
        assert_eq!(seen.len(), 4 * half * half);
    }

    /// Turning the whole card maps each orbit onto itself.
    #[test]
    fn test_orbit_closed_under_full_rotation() {
        let half = 3;
        let n = 2 * half;
        for x in 0..half {
            for y in 0..half {
                let cells = orbit(x, y, half);
                for (cx, cy) in cells {
                    let turned = rotate_quadrant(cx, cy, n);
                    assert!(cells.contains(&turned));
                }
            }
        }
    }
}
