//! Noise-driven 24-hour curves.
//!
//! [`ProceduralCurve::generate`] bakes a [`KeyframeCurve`] from Perlin noise shaped by a falloff
//! curve. It draws from a clone of the caller's RNG, so generating a curve never advances the
//! RNG the caller goes on to use for sampling.
use glam::Vec2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::noise::perlin::perlin_1d;
use crate::noise::NoiseField;
use crate::sampling::rand_range;

/// Length of the curve's time domain.
pub const CURVE_HOURS: f32 = 24.0;
const MIN_ACCURACY: f32 = 0.01;
const MAX_ACCURACY: f32 = 10.0;

/// A single `(time, value)` key.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Piecewise-linear curve through keys sorted by time.
///
/// Evaluates to `0.0` when empty and holds the end values outside the key range.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyframeCurve {
    keys: Vec<Keyframe>,
}

impl KeyframeCurve {
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// A curve holding `value` everywhere.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![Keyframe::new(0.0, value)])
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Appends a key. Keys must be pushed in ascending time order.
    pub fn push(&mut self, key: Keyframe) {
        debug_assert!(self.keys.last().is_none_or(|last| last.time <= key.time));
        self.keys.push(key);
    }

    pub fn evaluate(&self, time: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        let upper = self.keys.partition_point(|k| k.time <= time);
        let a = self.keys[upper - 1];
        let b = self.keys[upper];
        let span = b.time - a.time;
        if span <= 0.0 {
            return b.value;
        }
        a.value + (b.value - a.value) * ((time - a.time) / span)
    }
}

/// Configuration and baked output of a noise curve over `[0, 24]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ProceduralCurve {
    /// Keys per hour step; clamped to `[0.01, 10]` when generating.
    pub accuracy: f32,
    /// Uses `amplitude`, `scale` and `sample_offset`.
    pub noise: NoiseField,
    /// Range the per-curve amplitude multiplier is drawn from.
    pub amplitude_range: Vec2,
    pub falloff: KeyframeCurve,
    output: KeyframeCurve,
}

impl Default for ProceduralCurve {
    fn default() -> Self {
        Self::new(1.0, NoiseField::default())
    }
}

impl ProceduralCurve {
    pub fn new(accuracy: f32, noise: NoiseField) -> Self {
        Self {
            accuracy,
            noise,
            amplitude_range: Vec2::new(0.3, 1.0),
            falloff: KeyframeCurve::default(),
            output: KeyframeCurve::default(),
        }
    }

    pub fn with_falloff(mut self, falloff: KeyframeCurve) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn with_amplitude_range(mut self, min: f32, max: f32) -> Self {
        self.amplitude_range = Vec2::new(min, max);
        self
    }

    /// The curve baked by the last [`ProceduralCurve::generate`].
    pub fn output(&self) -> &KeyframeCurve {
        &self.output
    }

    /// Value of the baked curve at `hour`, clamped into `[0, 24]`.
    pub fn evaluate(&self, hour: f32) -> f32 {
        self.output.evaluate(hour.clamp(0.0, CURVE_HOURS))
    }

    /// Re-bakes the output curve using a clone of `rng`.
    pub fn generate<R: RngCore + Clone>(&mut self, rng: &R) {
        let mut rng = rng.clone();
        let rng: &mut dyn RngCore = &mut rng;

        let seed = rand_range(rng, -100_000.0, 100_000.0).floor();
        let multiplier = rand_range(rng, self.amplitude_range.x, self.amplitude_range.y);
        let amplitude = self.noise.amplitude * rand_range(rng, 0.4, 1.0);

        let accuracy = self.accuracy.clamp(MIN_ACCURACY, MAX_ACCURACY);
        let step = 1.0 / accuracy;
        let length = CURVE_HOURS * accuracy;
        let key_count = (length / step).ceil() as usize;

        self.output.clear();
        for k in 0..key_count {
            let time = k as f32 * step * step;
            let frequency = self.noise.scale * rand_range(rng, 0.8, 1.0);
            let falloff = self.falloff.evaluate(time) * multiplier;
            let value = amplitude * perlin_1d(seed + time * frequency);
            let offset = falloff * self.noise.sample_offset;

            self.output.push(Keyframe::new(time, offset + value * falloff));
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn keyframe_curve_interpolates_and_holds_ends() {
        let curve = KeyframeCurve::new(vec![
            Keyframe::new(10.0, 4.0),
            Keyframe::new(0.0, 0.0),
            Keyframe::new(20.0, 4.0),
        ]);
        assert_eq!(curve.keys()[0].time, 0.0);
        assert_eq!(curve.evaluate(-5.0), 0.0);
        assert_eq!(curve.evaluate(5.0), 2.0);
        assert_eq!(curve.evaluate(15.0), 4.0);
        assert_eq!(curve.evaluate(99.0), 4.0);
        assert_eq!(KeyframeCurve::default().evaluate(3.0), 0.0);
        assert_eq!(KeyframeCurve::constant(1.5).evaluate(12.0), 1.5);
    }

    #[test]
    fn generate_leaves_caller_rng_untouched() {
        let rng = StdRng::seed_from_u64(77);
        let mut reference = rng.clone();

        let mut curve = ProceduralCurve::default().with_falloff(KeyframeCurve::constant(1.0));
        curve.generate(&rng);

        let mut rng = rng;
        assert_eq!(rng.next_u64(), reference.next_u64());
    }

    #[test]
    fn generate_is_deterministic_for_same_rng_state() {
        let rng = StdRng::seed_from_u64(5);
        let mut a = ProceduralCurve::default().with_falloff(KeyframeCurve::constant(1.0));
        let mut b = a.clone();
        a.generate(&rng);
        b.generate(&rng);
        assert_eq!(a.output(), b.output());
    }

    #[test]
    fn one_key_per_hour_at_unit_accuracy() {
        let mut curve = ProceduralCurve::new(1.0, NoiseField::default());
        curve.generate(&StdRng::seed_from_u64(1));
        let keys = curve.output().keys();
        assert_eq!(keys.len(), 24);
        assert_eq!(keys[0].time, 0.0);
        assert_eq!(keys[23].time, 23.0);
    }

    #[test]
    fn zero_falloff_flattens_the_curve() {
        let mut curve = ProceduralCurve::new(2.0, NoiseField::default().with_sample_offset(3.0))
            .with_falloff(KeyframeCurve::constant(0.0));
        curve.generate(&StdRng::seed_from_u64(3));
        assert!(curve.output().keys().iter().all(|k| k.value == 0.0));
    }

    #[test]
    fn values_follow_offset_and_amplitude_bounds() {
        let noise = NoiseField::default().with_amplitude(2.0).with_sample_offset(1.0);
        let mut curve = ProceduralCurve::new(1.0, noise)
            .with_falloff(KeyframeCurve::constant(1.0))
            .with_amplitude_range(1.0, 1.0);
        curve.generate(&StdRng::seed_from_u64(9));
        for k in curve.output().keys() {
            // offset (1.0) + [0, 2] * perlin in [0, 1]
            assert!((1.0..=3.0).contains(&k.value), "{k:?}");
        }
    }

    #[test]
    fn evaluate_clamps_to_day() {
        let mut curve = ProceduralCurve::default().with_falloff(KeyframeCurve::constant(1.0));
        curve.generate(&StdRng::seed_from_u64(12));
        assert_eq!(curve.evaluate(-3.0), curve.evaluate(0.0));
        assert_eq!(curve.evaluate(30.0), curve.evaluate(24.0));
    }
}
