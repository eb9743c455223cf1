use disc_scatter::prelude::*;
use disc_scatter_examples::{init_tracing, render_points_to_png, RenderConfig};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let bounds = Bounds::new(120.0, 10.0, 120.0).validated();
    // World-space noise keeps the pattern continuous if neighbouring regions are sampled too.
    let origin = Vec3::new(400.0, 0.0, -200.0);
    let world_offset = bounds.offset_from(origin);

    let radius_noise = NoiseField::new(NoiseAlgorithm::Perlin)
        .with_space(NoiseSpace::World)
        .with_scale(0.04)
        .with_range(0.0, 0.85);
    let settings = PoissonDiscSettings::new(6.0, radius_noise, 25).validated()?;

    let mut rng = StdRng::seed_from_u64(7);
    let mut sink = VecSink::only([SamplingEventKind::RunFinished]);
    let points = PoissonDiscSampling::new(settings).generate_with_events(
        world_offset,
        &bounds,
        &mut rng,
        &mut sink,
    )?;

    if let Some(SamplingEvent::RunFinished { stats }) = sink.as_slice().first() {
        println!(
            "{} points, {} iterations, {} spawn points retired",
            points.len(),
            stats.iterations,
            stats.discarded
        );
    }

    let config = RenderConfig::new((1200, 1200), &bounds)
        .with_mode(VisualizationMode::DensityTint)
        .with_background([20, 24, 32]);
    render_points_to_png(&points, &config, "poisson-disc-radius-noise.png")?;
    Ok(())
}
