use disc_scatter::prelude::*;
use disc_scatter_examples::{init_tracing, render_points_to_png, RenderConfig};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let bounds = Bounds::new(100.0, 10.0, 100.0).validated();
    let settings = PoissonDiscSettings::new(1.5, NoiseField::disabled(), 25)
        .with_limit_points(false)
        .validated()?;
    let mut rng = StdRng::seed_from_u64(99);
    let candidates =
        PoissonDiscSampling::new(settings).generate(Vec3::ZERO.into(), &bounds, &mut rng)?;

    // Thin the blue-noise set with a cellular density gate; a little luck keeps sparse areas alive.
    let gate = NoiseField::new(NoiseAlgorithm::Cellular3x3)
        .with_scale(0.06)
        .with_range(0.5, 2.0)
        .with_threshold(0.35)
        .with_luck_threshold(0.05)
        .validated()?;

    let kept: Vec<ProceduralPoint> = candidates
        .iter()
        .filter_map(|p| {
            let footprint = Vec2::new(p.position.x, p.position.z);
            let sample = gate.sample_2d(footprint, Vec3::ZERO, &mut rng);
            sample
                .accepted
                .then(|| ProceduralPoint::new(p.position, p.radius * sample.value))
        })
        .collect();

    println!("kept {} of {} candidates", kept.len(), candidates.len());

    let config =
        RenderConfig::new((1000, 1000), &bounds).with_mode(VisualizationMode::DensityTint);
    render_points_to_png(&kept, &config, "noise-field-density-gate.png")?;
    Ok(())
}
