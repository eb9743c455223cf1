//! Cellular (Worley) noise.
//!
//! Both kernels scatter one jittered feature point per lattice cell and return the distance to
//! the second-nearest feature point (F2). [`Cellular3x3`] searches the full 3x3 neighbourhood;
//! [`Cellular2x2`] searches only the four nearest cells with reduced jitter, which is cheaper
//! but occasionally misses the true nearest points.
use std::sync::LazyLock;

use fastnoise_lite::{CellularDistanceFunction, CellularReturnType, FastNoiseLite, NoiseType};
use glam::{Vec2, Vec4};

use super::{NoiseKernel, KERNEL_SEED};

/// 1 / 7
const K: f32 = 0.142_857_15;
/// 1 / 14
const K2: f32 = 0.071_428_57;

const JITTER_2X2: f32 = 0.8;

/// Second-nearest feature distance with a 3x3 search window.
pub struct Cellular3x3 {
    source: FastNoiseLite,
}

impl Default for Cellular3x3 {
    fn default() -> Self {
        Self::new(KERNEL_SEED as i32)
    }
}

impl Cellular3x3 {
    pub fn new(seed: i32) -> Self {
        let mut source = FastNoiseLite::with_seed(seed);
        source.set_noise_type(Some(NoiseType::Cellular));
        source.set_frequency(Some(1.0));
        source.set_cellular_distance_function(Some(CellularDistanceFunction::Euclidean));
        source.set_cellular_return_type(Some(CellularReturnType::Distance2));
        source.set_cellular_jitter(Some(1.0));
        Self { source }
    }

    pub fn shared() -> &'static Cellular3x3 {
        static SHARED: LazyLock<Cellular3x3> = LazyLock::new(Cellular3x3::default);
        &SHARED
    }
}

impl NoiseKernel for Cellular3x3 {
    #[inline]
    fn evaluate(&self, position: Vec2) -> f32 {
        // Distance2 comes back shifted down by one.
        self.source.get_noise_2d(position.x, position.y) + 1.0
    }
}

/// Second-nearest feature distance with a 2x2 search window.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cellular2x2;

impl NoiseKernel for Cellular2x2 {
    #[inline]
    fn evaluate(&self, position: Vec2) -> f32 {
        cellular_2x2(position).y
    }
}

// Permutation-polynomial lattice hash. All arithmetic stays in f32 and below 2^24, so the
// permutation is exact.

#[inline]
fn mod289(x: f32) -> f32 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_4(x: Vec4) -> Vec4 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod7_4(x: Vec4) -> Vec4 {
    x - (x * (1.0 / 7.0)).floor() * 7.0
}

#[inline]
fn permute_4(x: Vec4) -> Vec4 {
    mod289_4((x * 34.0 + Vec4::ONE) * x)
}

/// Returns `(F1, F2)` using only the 2x2 block of cells nearest to `p`.
pub fn cellular_2x2(p: Vec2) -> Vec2 {
    let cell = p.floor();
    let pi = Vec2::new(mod289(cell.x), mod289(cell.y));
    let pf = p - cell;

    let pfx = Vec4::splat(pf.x) + Vec4::new(-0.5, -1.5, -0.5, -1.5);
    let pfy = Vec4::splat(pf.y) + Vec4::new(-0.5, -0.5, -1.5, -1.5);

    let hash = permute_4(Vec4::splat(pi.x) + Vec4::new(0.0, 1.0, 0.0, 1.0));
    let hash = permute_4(hash + Vec4::splat(pi.y) + Vec4::new(0.0, 0.0, 1.0, 1.0));
    let ox = mod7_4(hash) * K + Vec4::splat(K2);
    let oy = mod7_4((hash * K).floor()) * K + Vec4::splat(K2);

    let dx = pfx + JITTER_2X2 * ox;
    let dy = pfy + JITTER_2X2 * oy;
    let d = dx * dx + dy * dy;

    let (f1, f2) = two_smallest(&d.to_array());
    Vec2::new(f1.sqrt(), f2.sqrt())
}

/// The smallest and second-smallest of `values` (which must hold at least two entries).
#[inline]
fn two_smallest(values: &[f32]) -> (f32, f32) {
    let mut first = f32::INFINITY;
    let mut second = f32::INFINITY;
    for &v in values {
        if v < first {
            second = first;
            first = v;
        } else if v < second {
            second = v;
        }
    }
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> impl Iterator<Item = Vec2> {
        (0..50).flat_map(|i| {
            (0..50).map(move |j| Vec2::new(i as f32 * 0.29 - 7.0, j as f32 * 0.41 + 1.0))
        })
    }

    #[test]
    fn two_smallest_orders_values() {
        assert_eq!(two_smallest(&[4.0, 1.0, 3.0, 0.5]), (0.5, 1.0));
        assert_eq!(two_smallest(&[2.0, 2.0]), (2.0, 2.0));
    }

    #[test]
    fn permute_stays_in_range() {
        let p = permute_4(Vec4::new(0.0, 17.0, 288.0, 5.0));
        for v in p.to_array() {
            assert!((0.0..289.0).contains(&v));
            assert_eq!(v, v.floor());
        }
        assert_eq!(mod289(290.0), 1.0);
        assert_eq!(mod289(-1.0), 288.0);
    }

    #[test]
    fn second_distance_not_below_first() {
        for p in sample_points() {
            let b = cellular_2x2(p);
            assert!(b.x <= b.y, "2x2 at {p}: {b}");
            assert!(b.x >= 0.0);
        }
    }

    #[test]
    fn kernel_returns_second_channel() {
        let p = Vec2::new(3.3, -8.75);
        assert_eq!(Cellular2x2.evaluate(p), cellular_2x2(p).y);
    }

    #[test]
    fn distances_stay_within_search_window() {
        // Feature points never leave their neighbourhood, so F2 is bounded.
        let kernel = Cellular3x3::shared();
        for p in sample_points() {
            let full = kernel.evaluate(p);
            assert!(full > 0.0 && full < 2.5, "3x3 at {p}: {full}");
            assert!(cellular_2x2(p).y < 2.5);
        }
    }

    #[test]
    fn full_window_varies_and_is_reproducible() {
        let kernel = Cellular3x3::shared();
        let values: Vec<f32> = sample_points().map(|p| kernel.evaluate(p)).collect();
        let min = values.iter().copied().fold(f32::MAX, f32::min);
        let max = values.iter().copied().fold(f32::MIN, f32::max);
        assert!(max - min > 0.2, "range [{min}, {max}]");

        let p = Vec2::new(4.2, 9.1);
        assert_eq!(Cellular3x3::default().evaluate(p), kernel.evaluate(p));
    }
}
