//! Point sampling strategies over the footprint of a [`Bounds`].
//!
//! This module defines the [`PointSampling`] trait, the concrete strategies, and the random
//! draw helpers whose exact draw counts make seeded runs reproducible.
use mint::Vector3;
use rand::RngCore;

use crate::bounds::Bounds;
use crate::error::Result;
use crate::point::ProceduralPoint;

pub mod grid;
pub mod poisson_disc;
pub mod regular_grid;

pub use grid::SpatialGrid;
pub use poisson_disc::{generate_points, PoissonDiscSampling, PoissonDiscSettings};
pub use regular_grid::GridSampling;

/// Largest number of spatial grid cells allowed along either axis.
pub const MAX_GRID_DIMENSION: usize = 1500;

/// Trait for point sampling over a region.
pub trait PointSampling: Send + Sync {
    /// Generates points in the corner-origin frame of `bounds`.
    ///
    /// `world_offset` is the world position of the region's corner origin; strategies that
    /// sample world-space noise use it to keep patterns continuous across regions.
    fn generate(
        &self,
        world_offset: Vector3<f32>,
        bounds: &Bounds,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ProceduralPoint>>;
}

/// Generate a random float in the range [0, 1).
///
/// Consumes exactly one `u32` from `rng`.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    // 24 bits keep the result strictly below 1.0 after the float conversion.
    (rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

/// Generate a random float in `[min, max)`, or exactly `min` when `max <= min`.
///
/// Consumes one `u32`.
#[inline]
pub(crate) fn rand_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    let v = min + rand01(rng) * (max - min);
    if max > min {
        // The product can round up onto `max` near the top of the unit draw.
        v.min(max.next_down())
    } else {
        v
    }
}

/// Generate a random index in `0..len`. Consumes one `u64`; `len` must be non-zero.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0);
    ((rng.next_u64() as u128 * len as u128) >> 64) as usize
}

/// Grid dimensions covering `extent` with square cells of `cell_size`.
#[inline]
pub(crate) fn grid_dims(extent: glam::Vec2, cell_size: f32) -> (usize, usize) {
    (
        (extent.x / cell_size).ceil() as usize,
        (extent.y / cell_size).ceil() as usize,
    )
}
