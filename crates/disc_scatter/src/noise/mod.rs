//! Procedural scalar noise used to modulate radii and gate point density.
//!
//! Each algorithm is a [`NoiseKernel`] with a single `evaluate` capability. [`NoiseAlgorithm`]
//! is the closed set of kernels a [`NoiseField`] can be configured with; the field owns the
//! remapping and the stochastic accept/reject gate on top of the raw kernel value.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod cellular;
pub mod field;
pub mod perlin;
pub mod simplex;

pub use cellular::{Cellular2x2, Cellular3x3};
pub use field::{NoiseField, NoiseSample, NoiseSpace};
pub use perlin::Perlin;
pub use simplex::Simplex;

/// Seed of the shared Perlin, simplex and 3x3 cellular kernels.
pub const KERNEL_SEED: u32 = 0;

/// A stateless 2D scalar noise function.
pub trait NoiseKernel: Send + Sync {
    fn evaluate(&self, position: Vec2) -> f32;
}

/// Noise algorithms available to a [`NoiseField`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoiseAlgorithm {
    /// Always yields an accepted sample of `1.0`.
    None,
    /// Gradient noise in `[0, 1]`.
    #[default]
    Perlin,
    /// Signed simplex noise, roughly `[-1, 1]`.
    Simplex,
    /// Distance to the second-nearest feature point, 2x2 search window.
    Cellular2x2,
    /// Distance to the second-nearest feature point, 3x3 search window.
    Cellular3x3,
}

impl NoiseAlgorithm {
    /// The kernel implementing this algorithm, or `None` for [`NoiseAlgorithm::None`].
    pub fn kernel(self) -> Option<&'static dyn NoiseKernel> {
        match self {
            NoiseAlgorithm::None => None,
            NoiseAlgorithm::Perlin => Some(Perlin::shared()),
            NoiseAlgorithm::Simplex => Some(Simplex::shared()),
            NoiseAlgorithm::Cellular2x2 => Some(&Cellular2x2),
            NoiseAlgorithm::Cellular3x3 => Some(Cellular3x3::shared()),
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, NoiseAlgorithm::None)
    }
}
