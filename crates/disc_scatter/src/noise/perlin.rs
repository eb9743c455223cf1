//! Perlin gradient noise, normalised to `[0, 1]`.
use std::sync::LazyLock;

use ::noise::NoiseFn;
use glam::Vec2;

use super::{NoiseKernel, KERNEL_SEED};

/// 2D Perlin noise. Exactly `0.5` on integer lattice points.
#[derive(Debug, Clone, Copy)]
pub struct Perlin {
    source: ::noise::Perlin,
}

impl Default for Perlin {
    fn default() -> Self {
        Self::new(KERNEL_SEED)
    }
}

impl Perlin {
    pub fn new(seed: u32) -> Self {
        Self {
            source: ::noise::Perlin::new(seed),
        }
    }

    /// Instance shared by every [`super::NoiseField`] using [`super::NoiseAlgorithm::Perlin`].
    pub fn shared() -> &'static Perlin {
        static SHARED: LazyLock<Perlin> = LazyLock::new(Perlin::default);
        &SHARED
    }
}

impl NoiseKernel for Perlin {
    #[inline]
    fn evaluate(&self, position: Vec2) -> f32 {
        let n = self.source.get([position.x as f64, position.y as f64]) as f32;
        (0.5 * (n + 1.0)).clamp(0.0, 1.0)
    }
}

/// Perlin noise of the shared kernel at `p`, in `[0, 1]`.
#[inline]
pub fn perlin_2d(p: Vec2) -> f32 {
    Perlin::shared().evaluate(p)
}

/// One-dimensional slice through [`perlin_2d`] along `y = 0`.
#[inline]
pub fn perlin_1d(x: f32) -> f32 {
    perlin_2d(Vec2::new(x, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_points_are_midpoint() {
        for (x, y) in [(0.0, 0.0), (3.0, 7.0), (-12.0, 5.0), (255.0, 256.0)] {
            assert_eq!(perlin_2d(Vec2::new(x, y)), 0.5);
        }
    }

    #[test]
    fn output_stays_in_unit_interval() {
        for i in 0..400 {
            for j in 0..40 {
                let p = Vec2::new(i as f32 * 0.173 - 30.0, j as f32 * 0.311 + 2.5);
                let v = perlin_2d(p);
                assert!((0.0..=1.0).contains(&v), "perlin({p}) = {v}");
            }
        }
    }

    #[test]
    fn varies_between_lattice_points() {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for i in 0..200 {
            let v = perlin_2d(Vec2::new(i as f32 * 0.37 + 0.11, i as f32 * 0.23 + 0.7));
            min = min.min(v);
            max = max.max(v);
        }
        assert!(max - min > 0.1, "range [{min}, {max}]");
    }

    #[test]
    fn is_continuous() {
        let p = Vec2::new(1.37, 2.91);
        let d = Vec2::splat(1e-3);
        assert!((perlin_2d(p) - perlin_2d(p + d)).abs() < 1e-2);
    }

    #[test]
    fn seeded_kernels_are_reproducible() {
        let p = Vec2::new(0.41, 0.63);
        let seeded = Perlin::new(KERNEL_SEED + 1).evaluate(p);
        let seeded_again = Perlin::new(KERNEL_SEED + 1).evaluate(p);
        assert_eq!(seeded, seeded_again);
        assert_eq!(Perlin::default().evaluate(p), perlin_2d(p));
    }
}
