//! Axis-aligned sampling region.
//!
//! [`Bounds`] describes a box whose local origin sits at its minimum corner. Samplers work on
//! the 2D footprint spanned by the X and Z extents; Y is the vertical axis and is only tested
//! through [`Bounds::contains_vertical`].
use glam::{Vec2, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest extent any axis may have after [`Bounds::validated`].
pub const MIN_EXTENT: f32 = 0.1;

/// Axis-aligned box describing a sampling region.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Extent along each axis in world units.
    pub size: Vec3,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(50.0, 50.0, 50.0)
    }
}

impl Bounds {
    /// Creates bounds from per-axis extents. No clamping is applied.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_size(Vec3::new(x, y, z))
    }

    pub fn from_size(size: Vec3) -> Self {
        Self { size }
    }

    /// Returns a copy with every extent clamped to at least [`MIN_EXTENT`].
    pub fn validated(self) -> Self {
        Self {
            size: self.size.max(Vec3::splat(MIN_EXTENT)),
        }
    }

    /// The sampling footprint `(size.x, size.z)`.
    #[inline]
    pub fn footprint(&self) -> Vec2 {
        Vec2::new(self.size.x, self.size.z)
    }

    /// Returns `true` if a footprint position lies in `[0, size.x) x [0, size.z)`.
    ///
    /// The `y` component of `p` maps onto the world Z axis.
    #[inline]
    pub fn contains_2d(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.size.x && p.y >= 0.0 && p.y < self.size.z
    }

    /// Returns `true` if a local height lies within `[-size.y / 2, size.y / 2]`.
    #[inline]
    pub fn contains_vertical(&self, y: f32) -> bool {
        let half = self.size.y / 2.0;
        y >= -half && y <= half
    }

    /// Half the size, i.e. the offset between the corner origin and the box centre.
    #[inline]
    pub fn footprint_center_offset(&self) -> Vec3 {
        self.size / 2.0
    }

    /// Converts a centred world origin into the world position of the corner origin.
    #[inline]
    pub fn offset_from(&self, origin: Vec3) -> Vec3 {
        origin - self.footprint_center_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_clamps_every_axis() {
        let b = Bounds::new(-1.0, 0.0, 0.05).validated();
        assert_eq!(b.size, Vec3::splat(MIN_EXTENT));

        let untouched = Bounds::new(4.0, 2.0, 8.0).validated();
        assert_eq!(untouched.size, Vec3::new(4.0, 2.0, 8.0));
    }

    #[test]
    fn validated_is_idempotent() {
        let once = Bounds::new(-3.0, 7.0, 0.0).validated();
        assert_eq!(once, once.validated());
    }

    #[test]
    fn contains_2d_uses_x_and_z_extents() {
        let b = Bounds::new(10.0, 1.0, 4.0);
        assert!(b.contains_2d(Vec2::new(0.0, 0.0)));
        assert!(b.contains_2d(Vec2::new(9.99, 3.99)));
        assert!(!b.contains_2d(Vec2::new(10.0, 1.0)));
        assert!(!b.contains_2d(Vec2::new(1.0, 4.0)));
        assert!(!b.contains_2d(Vec2::new(-0.01, 1.0)));
        // y extent plays no part in the footprint test.
        assert!(b.contains_2d(Vec2::new(1.0, 3.0)));
    }

    #[test]
    fn contains_vertical_is_centred_and_inclusive() {
        let b = Bounds::new(1.0, 6.0, 1.0);
        assert!(b.contains_vertical(3.0));
        assert!(b.contains_vertical(-3.0));
        assert!(b.contains_vertical(0.0));
        assert!(!b.contains_vertical(3.01));
        assert!(!b.contains_vertical(-3.01));
    }

    #[test]
    fn offsets_use_half_size() {
        let b = Bounds::new(10.0, 4.0, 6.0);
        assert_eq!(b.footprint_center_offset(), Vec3::new(5.0, 2.0, 3.0));
        assert_eq!(
            b.offset_from(Vec3::new(100.0, 0.0, -50.0)),
            Vec3::new(95.0, -2.0, -53.0)
        );
        assert_eq!(b.footprint(), Vec2::new(10.0, 6.0));
    }
}
