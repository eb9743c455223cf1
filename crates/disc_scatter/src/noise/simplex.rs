//! 2D simplex noise.
//!
//! Output is signed and roughly within `[-1, 1]`; callers that need a unit range must remap it
//! themselves.
use std::sync::LazyLock;

use ::noise::NoiseFn;
use glam::Vec2;

use super::{NoiseKernel, KERNEL_SEED};

/// 2D simplex noise.
#[derive(Debug, Clone, Copy)]
pub struct Simplex {
    source: ::noise::Simplex,
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new(KERNEL_SEED)
    }
}

impl Simplex {
    pub fn new(seed: u32) -> Self {
        Self {
            source: ::noise::Simplex::new(seed),
        }
    }

    pub fn shared() -> &'static Simplex {
        static SHARED: LazyLock<Simplex> = LazyLock::new(Simplex::default);
        &SHARED
    }
}

impl NoiseKernel for Simplex {
    #[inline]
    fn evaluate(&self, position: Vec2) -> f32 {
        self.source.get([position.x as f64, position.y as f64]) as f32
    }
}

/// Simplex noise of the shared kernel at `v`.
#[inline]
pub fn simplex_2d(v: Vec2) -> f32 {
    Simplex::shared().evaluate(v)
}
