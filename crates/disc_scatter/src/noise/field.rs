//! Configurable noise sampler with range remapping and a stochastic density gate.
use glam::{Vec2, Vec3};
use rand::RngCore;
use tracing::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::noise::NoiseAlgorithm;
use crate::sampling::rand01;

/// Coordinate frame noise is evaluated in.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseSpace {
    /// Region-local positions; the pattern moves with the region.
    #[default]
    Local,
    /// Positions offset by the region's world origin.
    World,
}

/// Outcome of [`NoiseField::sample_2d`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseSample {
    /// Whether the sample passed the density gate.
    pub accepted: bool,
    /// Remapped noise value, or `0.0` when rejected.
    pub value: f32,
}

impl NoiseSample {
    const REJECTED: Self = Self {
        accepted: false,
        value: 0.0,
    };
}

/// Noise sampling configuration. Immutable for the duration of a sampling run.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    pub algorithm: NoiseAlgorithm,
    pub space: NoiseSpace,
    /// Output interval `(min, max)` that `[0, 1]` is remapped onto.
    pub range: Vec2,
    /// Spatial frequency applied to positions before evaluation.
    pub scale: f32,
    pub amplitude: f32,
    /// Added to the raw noise after multiplying by `amplitude`.
    pub sample_offset: f32,
    /// Gate threshold in `[0, 1]`; higher rejects more samples.
    pub threshold: f32,
    /// Probability in `[0, 1]` of accepting a sample without running the threshold test.
    pub luck_threshold: f32,
}

impl Default for NoiseField {
    fn default() -> Self {
        Self {
            algorithm: NoiseAlgorithm::Perlin,
            space: NoiseSpace::Local,
            range: Vec2::new(0.0, 1.0),
            scale: 0.08,
            amplitude: 1.0,
            sample_offset: 0.0,
            threshold: 0.0,
            luck_threshold: 0.0,
        }
    }
}

impl NoiseField {
    pub fn new(algorithm: NoiseAlgorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// A field that never modulates anything.
    pub fn disabled() -> Self {
        Self::new(NoiseAlgorithm::None)
    }

    pub fn with_space(mut self, space: NoiseSpace) -> Self {
        self.space = space;
        self
    }

    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.range = Vec2::new(min, max);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_sample_offset(mut self, sample_offset: f32) -> Self {
        self.sample_offset = sample_offset;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_luck_threshold(mut self, luck_threshold: f32) -> Self {
        self.luck_threshold = luck_threshold;
        self
    }

    /// Returns a validated copy.
    ///
    /// Both thresholds are clamped into `[0, 1]`. An inverted or non-finite `range`, or a
    /// non-finite `scale`, is rejected rather than silently remapped backwards.
    pub fn validated(&self) -> Result<Self> {
        if !self.range.is_finite() || self.range.x > self.range.y {
            return Err(Error::InvalidConfig(format!(
                "noise range must satisfy min <= max, got ({}, {})",
                self.range.x, self.range.y
            )));
        }
        if !self.scale.is_finite() {
            return Err(Error::InvalidConfig("noise scale must be finite".into()));
        }

        let threshold = self.threshold.clamp(0.0, 1.0);
        let luck_threshold = self.luck_threshold.clamp(0.0, 1.0);
        if threshold != self.threshold || luck_threshold != self.luck_threshold {
            warn!(
                "Noise thresholds clamped to [0, 1] (threshold {} -> {}, luck {} -> {}).",
                self.threshold, threshold, self.luck_threshold, luck_threshold
            );
        }

        Ok(Self {
            threshold,
            luck_threshold,
            ..self.clone()
        })
    }

    /// Raw noise value before gating and remapping.
    ///
    /// Returns `None` for [`NoiseAlgorithm::None`].
    pub fn raw(&self, position: Vec2, world_offset: Vec3) -> Option<f32> {
        let kernel = self.algorithm.kernel()?;

        let mut p = position;
        if self.space == NoiseSpace::World {
            p += Vec2::new(world_offset.x, world_offset.z);
        }
        p *= self.scale;

        let mut n = kernel.evaluate(p);
        if self.algorithm == NoiseAlgorithm::Perlin {
            n = n.clamp(0.0, 1.0);
        }
        Some(self.amplitude * self.sample_offset + n)
    }

    /// Samples the field at a footprint position.
    ///
    /// Draws nothing from `rng` when the algorithm is [`NoiseAlgorithm::None`]; otherwise one
    /// or two draws, see [`NoiseField::test_sample`].
    pub fn sample_2d(
        &self,
        position: Vec2,
        world_offset: Vec3,
        rng: &mut dyn RngCore,
    ) -> NoiseSample {
        let Some(raw) = self.raw(position, world_offset) else {
            return NoiseSample {
                accepted: true,
                value: 1.0,
            };
        };

        if !self.test_sample(raw, rng) {
            return NoiseSample::REJECTED;
        }

        NoiseSample {
            accepted: true,
            value: self.remap(raw),
        }
    }

    /// Density gate.
    ///
    /// The first draw accepts outright when below `luck_threshold`, in which case no second draw
    /// happens. Otherwise the sample is rejected when `raw * u < threshold` for a second draw `u`.
    pub fn test_sample(&self, raw: f32, rng: &mut dyn RngCore) -> bool {
        if rand01(rng) < self.luck_threshold {
            return true;
        }
        raw * rand01(rng) >= self.threshold
    }

    /// Linearly maps `raw` from `[0, 1]` onto `range`. Values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn remap(&self, raw: f32) -> f32 {
        self.range.x + raw * (self.range.y - self.range.x)
    }
}
