#![forbid(unsafe_code)]
//! disc_scatter: Poisson-disc point distributions with noise-modulated radii.
//!
//! Modules:
//! - bounds: the axis-aligned sampling region and its footprint tests
//! - noise: Perlin, simplex and cellular kernels behind a gated, remapped [`noise::NoiseField`]
//! - sampling: spatial grid index, Poisson-disc and regular grid strategies
//! - point: output records and the preview display contract
//! - events: observing sampling runs
//! - curve: noise-driven 24-hour keyframe curves
//!
//! All randomness flows through an explicit `&mut dyn RngCore`; seeding the same RNG reproduces
//! the same output.
pub mod bounds;
pub mod curve;
pub mod error;
pub mod events;
pub mod noise;
pub mod point;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use disc_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::bounds::Bounds;
    pub use crate::curve::{Keyframe, KeyframeCurve, ProceduralCurve};
    pub use crate::error::{Error, Result};
    pub use crate::events::{
        EventSink, FnSink, RunStats, SamplingEvent, SamplingEventKind, VecSink,
    };
    pub use crate::noise::{NoiseAlgorithm, NoiseField, NoiseKernel, NoiseSample, NoiseSpace};
    pub use crate::point::{point_tint, ProceduralPoint, VisualizationMode, PREVIEW_POINT_LIMIT};
    pub use crate::sampling::{
        generate_points, GridSampling, PointSampling, PoissonDiscSampling, PoissonDiscSettings,
        SpatialGrid,
    };
}
