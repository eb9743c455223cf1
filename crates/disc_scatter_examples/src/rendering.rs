use std::path::Path;

use disc_scatter::prelude::*;
use glam::Vec2;
use image::{Rgb, RgbImage};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honouring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Settings for rendering points to an image.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image size in pixels.
    pub image_size: (u32, u32),
    /// Footprint extent (x, z) mapped onto the image.
    pub footprint: Vec2,
    pub background: [u8; 3],
    pub mode: VisualizationMode,
    /// Marker radius as a fraction of the point radius.
    pub marker_scale: f32,
    /// Also outline the acceptance disc of every point.
    pub draw_discs: bool,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), bounds: &Bounds) -> Self {
        Self {
            image_size,
            footprint: bounds.footprint(),
            background: [26, 26, 26],
            mode: VisualizationMode::RadiusTint,
            marker_scale: 0.2,
            draw_discs: false,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_mode(mut self, mode: VisualizationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_discs(mut self, draw_discs: bool) -> Self {
        self.draw_discs = draw_discs;
        self
    }

    fn pixels_per_unit(&self) -> Vec2 {
        Vec2::new(
            self.image_size.0 as f32 / self.footprint.x.max(f32::EPSILON),
            self.image_size.1 as f32 / self.footprint.y.max(f32::EPSILON),
        )
    }
}

/// Renders `points` to a PNG at `path`. Inputs are read-only.
pub fn render_points_to_png(
    points: &[ProceduralPoint],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    if points.len() > PREVIEW_POINT_LIMIT {
        warn!(
            "Drawing {} points exceeds the preview limit of {}; markers will be small.",
            points.len(),
            PREVIEW_POINT_LIMIT
        );
    }

    let scale = config.pixels_per_unit();
    for point in points {
        let Some(tint) = point_tint(config.mode, point) else {
            continue;
        };
        let color = Rgb(tint.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8));
        let centre = Vec2::new(point.position.x, point.position.z) * scale;

        if config.draw_discs {
            draw_ring(&mut img, centre, point.radius * scale.x * 0.5, [90, 90, 90]);
        }
        let marker = (point.radius * config.marker_scale * scale.x).max(1.0);
        fill_disc(&mut img, centre, marker, color);
    }

    img.save(path.as_ref())?;
    Ok(())
}

fn fill_disc(img: &mut RgbImage, centre: Vec2, radius: f32, color: Rgb<u8>) {
    let r2 = radius * radius;
    for_each_pixel_near(img, centre, radius, |img, x, y, d2| {
        if d2 <= r2 {
            img.put_pixel(x, y, color);
        }
    });
}

fn draw_ring(img: &mut RgbImage, centre: Vec2, radius: f32, color: [u8; 3]) {
    let inner = (radius - 0.75).max(0.0);
    let outer = radius + 0.75;
    for_each_pixel_near(img, centre, outer, |img, x, y, d2| {
        if d2 >= inner * inner && d2 <= outer * outer {
            img.put_pixel(x, y, Rgb(color));
        }
    });
}

fn for_each_pixel_near(
    img: &mut RgbImage,
    centre: Vec2,
    radius: f32,
    mut f: impl FnMut(&mut RgbImage, u32, u32, f32),
) {
    let (w, h) = img.dimensions();
    let min_x = (centre.x - radius).floor().max(0.0) as u32;
    let min_y = (centre.y - radius).floor().max(0.0) as u32;
    let max_x = ((centre.x + radius).ceil() as i64).clamp(0, w as i64 - 1) as u32;
    let max_y = ((centre.y + radius).ceil() as i64).clamp(0, h as i64 - 1) as u32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - centre;
            f(img, x, y, d.length_squared());
        }
    }
}
