//! Axis-aligned rectangular prisms.

use glam::DVec3;

use crate::error::{SolidError, SolidResult};

/// An axis-aligned rectangular prism given by its two extreme corners.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use grille_solid::Cuboid;
///
/// let c = Cuboid::new(DVec3::new(2.0, 4.0, 6.0), DVec3::ZERO).unwrap();
/// assert_eq!(c.min(), DVec3::new(-1.0, -2.0, -3.0));
/// assert_eq!(c.volume(), 48.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    min: DVec3,
    max: DVec3,
}

impl Cuboid {
    /// Create a cuboid of `size` centered at `center`.
    ///
    /// Every component of `size` must be finite and strictly positive.
    pub fn new(size: DVec3, center: DVec3) -> SolidResult<Self> {
        if !size.is_finite() || !center.is_finite() {
            return Err(SolidError::Geometry(format!(
                "cuboid size {size} / center {center} must be finite"
            )));
        }
        if size.min_element() <= 0.0 {
            return Err(SolidError::Geometry(format!(
                "cuboid size {size} must be positive"
            )));
        }

        let half = size / 2.0;
        Ok(Self {
            min: center - half,
            max: center + half,
        })
    }

    /// Corner with the smallest coordinates.
    #[must_use]
    pub fn min(&self) -> DVec3 {
        self.min
    }

    /// Corner with the largest coordinates.
    #[must_use]
    pub fn max(&self) -> DVec3 {
        self.max
    }

    #[must_use]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// Construct from corners without validation (used for tight bounds).
    pub(crate) fn from_corners(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_offset_center() {
        let c = Cuboid::new(DVec3::new(5.0, 5.0, 10.0), DVec3::new(-28.0, 4.0, 0.0)).unwrap();
        assert_eq!(c.min(), DVec3::new(-30.5, 1.5, -5.0));
        assert_eq!(c.max(), DVec3::new(-25.5, 6.5, 5.0));
        assert_eq!(c.center(), DVec3::new(-28.0, 4.0, 0.0));
        assert_eq!(c.size(), DVec3::new(5.0, 5.0, 10.0));
    }

    #[test]
    fn test_cuboid_rejects_zero_size() {
        let err = Cuboid::new(DVec3::new(1.0, 0.0, 1.0), DVec3::ZERO).unwrap_err();
        assert!(matches!(err, SolidError::Geometry(_)));
    }

    #[test]
    fn test_cuboid_rejects_nan() {
        let err = Cuboid::new(DVec3::splat(1.0), DVec3::new(f64::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, SolidError::Geometry(_)));
    }
}
