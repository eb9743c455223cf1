//! Regular grid point sampling strategy.
use glam::{Vec2, Vec3};
use mint::Vector3;
use rand::RngCore;
use tracing::{info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::point::ProceduralPoint;
use crate::sampling::poisson_disc::HARD_POINT_CEILING;
use crate::sampling::{grid_dims, PointSampling, MAX_GRID_DIMENSION};

/// Smallest cell size accepted by [`GridSampling`].
pub const MIN_CELL_SIZE: f32 = 0.5;

/// Places one point at the centre of every grid cell whose centre lies inside the footprint.
///
/// Draws nothing from the RNG.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GridSampling {
    /// Cell edge length in world units.
    pub cell_size: f32,
}

impl Default for GridSampling {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl GridSampling {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Returns a copy with the cell size clamped to at least [`MIN_CELL_SIZE`].
    pub fn validated(&self) -> Self {
        Self {
            cell_size: self.cell_size.max(MIN_CELL_SIZE),
        }
    }

    fn sample(&self, bounds: &Bounds) -> Result<Vec<ProceduralPoint>> {
        if bounds.size.x < 0.0 || bounds.size.z < 0.0 {
            return Ok(Vec::new());
        }

        let cell_size = self.cell_size.max(MIN_CELL_SIZE);
        let (width, height) = grid_dims(bounds.footprint(), cell_size);
        if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            warn!(
                "Could not generate grid samples: requested grid {}x{} exceeds {} cells per axis.",
                width, height, MAX_GRID_DIMENSION
            );
            return Err(Error::GridTooLarge {
                width,
                height,
                max: MAX_GRID_DIMENSION,
            });
        }

        let radius = cell_size / 2.0;
        let mut points = Vec::with_capacity((width * height).min(HARD_POINT_CEILING));
        for y in 0..height {
            for x in 0..width {
                let centre = (Vec2::new(x as f32, y as f32) + Vec2::splat(0.5)) * cell_size;
                if !bounds.contains_2d(centre) {
                    continue;
                }
                if points.len() >= HARD_POINT_CEILING {
                    info!("Grid points reached the fixed limit of {}.", HARD_POINT_CEILING);
                    return Ok(points);
                }
                points.push(ProceduralPoint::new(
                    Vec3::new(centre.x, 0.0, centre.y),
                    radius,
                ));
            }
        }

        Ok(points)
    }
}

impl PointSampling for GridSampling {
    fn generate(
        &self,
        _world_offset: Vector3<f32>,
        bounds: &Bounds,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<ProceduralPoint>> {
        self.sample(bounds)
    }
}
