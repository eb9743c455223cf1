//! Poisson-disc (dart-throwing) point sampling with optional noise-modulated radii.
use std::f32::consts::{SQRT_2, TAU};

use glam::{Vec2, Vec3};
use mint::Vector3;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::events::{EventSink, RunStats, SamplingEvent, SamplingEventKind};
use crate::noise::NoiseField;
use crate::point::ProceduralPoint;
use crate::sampling::{rand01, rand_index, rand_range, PointSampling, SpatialGrid};

/// Absolute floor for a configured radius.
pub const MIN_RADIUS: f32 = 0.08;
/// Floor applied to the radius when a run starts and after every noise modulation.
pub const MIN_GENERATION_RADIUS: f32 = 0.5;
/// Floor for the radius that sizes the spatial grid.
const MIN_GRID_RADIUS: f32 = 1.0;
/// Point cap while [`PoissonDiscSettings::limit_points`] is enabled.
pub const POINTS_LIMIT: usize = 2000;
/// Point cap when the limiter is disabled.
pub const HARD_POINT_CEILING: usize = 60_000;
pub const DEFAULT_ATTEMPTS: usize = 25;
const MIN_ATTEMPTS: usize = 2;

/// Configuration for [`PoissonDiscSampling`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonDiscSettings {
    /// Seed used by [`PoissonDiscSampling::generate_seeded`].
    pub seed: u64,
    /// Minimum spacing between points in world units.
    pub radius: f32,
    /// Candidates proposed around a spawn point before it is retired. Smaller values run
    /// faster but leave more gaps.
    pub attempts_before_rejection: usize,
    /// Noise that shrinks or grows the radius per accepted point. Disabled with
    /// [`crate::noise::NoiseAlgorithm::None`].
    pub radius_noise: NoiseField,
    /// Stops at [`POINTS_LIMIT`] instead of [`HARD_POINT_CEILING`].
    pub limit_points: bool,
}

impl Default for PoissonDiscSettings {
    fn default() -> Self {
        Self::new(4.0, NoiseField::disabled(), DEFAULT_ATTEMPTS)
    }
}

impl PoissonDiscSettings {
    pub fn new(radius: f32, radius_noise: NoiseField, attempts_before_rejection: usize) -> Self {
        Self {
            seed: 0,
            radius,
            attempts_before_rejection,
            radius_noise,
            limit_points: true,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_limit_points(mut self, limit_points: bool) -> Self {
        self.limit_points = limit_points;
        self
    }

    /// Returns a validated copy with the radius and attempt count clamped to their floors.
    pub fn validated(&self) -> Result<Self> {
        if self.radius.is_nan() {
            return Err(Error::InvalidConfig("radius must not be NaN".into()));
        }
        Ok(Self {
            radius: self.radius.max(MIN_RADIUS),
            attempts_before_rejection: self.attempts_before_rejection.max(MIN_ATTEMPTS),
            radius_noise: self.radius_noise.validated()?,
            ..self.clone()
        })
    }

    /// Point count at which generation stops early.
    pub fn point_cap(&self) -> usize {
        if self.limit_points {
            POINTS_LIMIT
        } else {
            HARD_POINT_CEILING
        }
    }
}

/// Poisson-disc sampling strategy.
#[derive(Debug, Clone, Default)]
pub struct PoissonDiscSampling {
    pub settings: PoissonDiscSettings,
}

impl PointSampling for PoissonDiscSampling {
    fn generate(
        &self,
        world_offset: Vector3<f32>,
        bounds: &Bounds,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ProceduralPoint>> {
        self.generate_with_events(Vec3::from(world_offset), bounds, rng, &mut ())
    }
}

impl PoissonDiscSampling {
    pub fn new(settings: PoissonDiscSettings) -> Self {
        Self { settings }
    }

    /// Generates with a fresh RNG seeded from [`PoissonDiscSettings::seed`].
    pub fn generate_seeded(
        &self,
        world_offset: Vec3,
        bounds: &Bounds,
    ) -> Result<Vec<ProceduralPoint>> {
        let mut rng = StdRng::seed_from_u64(self.settings.seed);
        self.generate_with_events(world_offset, bounds, &mut rng, &mut ())
    }

    /// Fills the footprint of `bounds` with non-overlapping points.
    ///
    /// Returns an empty list for negative X/Z extents and [`Error::GridTooLarge`] when the
    /// footprint needs more than [`crate::sampling::MAX_GRID_DIMENSION`] cells per axis.
    /// Reaching the point cap is not an error; the points accepted so far are returned.
    pub fn generate_with_events(
        &self,
        world_offset: Vec3,
        bounds: &Bounds,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<Vec<ProceduralPoint>> {
        if bounds.size.x < 0.0 || bounds.size.z < 0.0 {
            debug!(
                "Poisson disc region has negative extent ({}, {}); nothing to sample.",
                bounds.size.x, bounds.size.z
            );
            return Ok(Vec::new());
        }

        let settings = &self.settings;
        let base_radius = settings.radius.max(MIN_GENERATION_RADIUS);
        let mut radius = base_radius.max(MIN_GRID_RADIUS);
        let cell_size = radius / SQRT_2;
        let footprint = bounds.footprint();

        let mut grid = match SpatialGrid::try_new(footprint, cell_size) {
            Ok(grid) => grid,
            Err(Error::GridTooLarge { width, height, max }) => {
                warn!(
                    "Could not generate Poisson disc samples: requested grid {}x{} exceeds {} cells per axis.",
                    width, height, max
                );
                if sink.wants(SamplingEventKind::GridTooLarge) {
                    sink.send(SamplingEvent::GridTooLarge { width, height });
                }
                return Err(Error::GridTooLarge { width, height, max });
            }
            Err(err) => return Err(err),
        };

        let point_cap = settings.point_cap();
        let attempts = settings.attempts_before_rejection.max(MIN_ATTEMPTS);
        let radius_noise = (!settings.radius_noise.algorithm.is_none())
            .then_some(&settings.radius_noise);

        if sink.wants(SamplingEventKind::RunStarted) {
            sink.send(SamplingEvent::RunStarted {
                grid_size: (grid.width(), grid.height()),
                radius,
                point_cap,
            });
        }

        let mut points: Vec<ProceduralPoint> = Vec::new();
        let mut spawn_points = vec![footprint / 2.0];
        let mut stats = RunStats::default();

        while !spawn_points.is_empty() {
            stats.iterations += 1;
            let spawn_index = rand_index(rng, spawn_points.len());
            let centre = spawn_points[spawn_index];

            let accepted = propose_candidate(centre, radius, attempts, bounds, &grid, &points, rng);

            if let Some(candidate) = accepted {
                if let Some(noise) = radius_noise {
                    let modulation = noise.sample_2d(candidate, world_offset, rng).value;
                    radius = (base_radius * (1.0 - modulation))
                        .abs()
                        .max(MIN_GENERATION_RADIUS);
                }

                let index = points.len();
                let point = ProceduralPoint::new(Vec3::new(candidate.x, 0.0, candidate.y), radius);
                points.push(point);
                spawn_points.push(candidate);
                grid.insert(candidate, index);
                stats.accepted += 1;

                if sink.wants(SamplingEventKind::PointAccepted) {
                    sink.send(SamplingEvent::PointAccepted { index, point });
                }
            } else {
                spawn_points.remove(spawn_index);
                stats.discarded += 1;

                if sink.wants(SamplingEventKind::SpawnPointRetired) {
                    sink.send(SamplingEvent::SpawnPointRetired { position: centre });
                }
            }

            if points.len() >= point_cap.saturating_sub(1) {
                info!(
                    "Poisson disc points reached {}. Point limiter is {}.",
                    point_cap,
                    if settings.limit_points {
                        "enabled"
                    } else {
                        "disabled and has reached the fixed limit"
                    }
                );
                if sink.wants(SamplingEventKind::PointCapReached) {
                    sink.send(SamplingEvent::PointCapReached {
                        cap: point_cap,
                        limiter_enabled: settings.limit_points,
                    });
                }
                break;
            }
        }

        debug!(
            "Poisson disc run: iterations={}, accepted={}, discarded={}.",
            stats.iterations, stats.accepted, stats.discarded
        );
        if sink.wants(SamplingEventKind::RunFinished) {
            sink.send(SamplingEvent::RunFinished { stats });
        }

        Ok(points)
    }
}

/// Runs `settings` once with an RNG seeded from `seed`.
pub fn generate_points(
    seed: u64,
    settings: &PoissonDiscSettings,
    world_offset: Vec3,
    bounds: &Bounds,
) -> Result<Vec<ProceduralPoint>> {
    let mut rng = StdRng::seed_from_u64(seed);
    PoissonDiscSampling::new(settings.clone()).generate_with_events(
        world_offset,
        bounds,
        &mut rng,
        &mut (),
    )
}

/// Throws up to `attempts` darts into the annulus `[0.8r, 2r)` around `centre` and returns the
/// first one that lands inside the region and clear of every accepted point.
fn propose_candidate(
    centre: Vec2,
    radius: f32,
    attempts: usize,
    bounds: &Bounds,
    grid: &SpatialGrid,
    points: &[ProceduralPoint],
    rng: &mut dyn RngCore,
) -> Option<Vec2> {
    for _ in 0..attempts {
        let angle = rand01(rng) * TAU;
        let distance = rand_range(rng, 0.8 * radius, 2.0 * radius);
        let candidate = centre + Vec2::new(angle.sin(), angle.cos()) * distance;

        if is_candidate_valid(candidate, bounds, radius, grid, points) {
            return Some(candidate);
        }
    }
    None
}

fn is_candidate_valid(
    candidate: Vec2,
    bounds: &Bounds,
    radius: f32,
    grid: &SpatialGrid,
    points: &[ProceduralPoint],
) -> bool {
    if !bounds.contains_2d(candidate) {
        return false;
    }

    let radius_squared = radius * radius;
    !grid.any_nearby(candidate, |i| {
        let p = points[i].position;
        Vec2::new(p.x, p.z).distance_squared(candidate) < radius_squared
    })
}
