use disc_scatter::prelude::*;
use disc_scatter_examples::{init_tracing, render_points_to_png, RenderConfig};
use glam::Vec3;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let bounds = Bounds::new(100.0, 10.0, 100.0).validated();
    let settings = PoissonDiscSettings::new(3.0, NoiseField::disabled(), 25).validated()?;

    let points = generate_points(2025, &settings, Vec3::ZERO, &bounds)?;
    println!("generated {} points", points.len());

    let config = RenderConfig::new((1000, 1000), &bounds).with_discs(true);
    render_points_to_png(&points, &config, "poisson-disc-basic.png")?;
    Ok(())
}
