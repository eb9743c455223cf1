//! Output records produced by the samplers and the display contract for previews.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Previews skip drawing when handed more points than this.
pub const PREVIEW_POINT_LIMIT: usize = 2000;

/// Radius at which [`VisualizationMode::DensityTint`] reaches full white.
const DENSITY_TINT_RADIUS: f32 = 8.2;

/// A generated point and the acceptance radius in effect when it was placed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProceduralPoint {
    /// Position in the region's corner-origin frame. `y` is always `0`.
    pub position: Vec3,
    /// Effective acceptance radius in world units.
    pub radius: f32,
}

impl ProceduralPoint {
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }
}

/// How a preview collaborator colours points.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizationMode {
    /// Draw nothing.
    None,
    /// Uniform colour; marker size follows the radius.
    #[default]
    RadiusTint,
    /// Red for small radii fading to white for large ones.
    DensityTint,
}

/// Linear RGB tint for `point` under `mode`, or `None` if it should not be drawn.
pub fn point_tint(mode: VisualizationMode, point: &ProceduralPoint) -> Option<[f32; 3]> {
    match mode {
        VisualizationMode::None => None,
        VisualizationMode::RadiusTint => Some([1.0, 1.0, 1.0]),
        VisualizationMode::DensityTint => {
            let t = (point.radius / DENSITY_TINT_RADIUS).clamp(0.0, 1.0);
            Some([1.0, t, t])
        }
    }
}
