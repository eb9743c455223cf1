use disc_scatter::prelude::*;
use disc_scatter_examples::{init_tracing, render_points_to_png, RenderConfig};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let bounds = Bounds::new(60.0, 10.0, 60.0).validated();
    let strategies: [(&str, Box<dyn PointSampling>); 2] = [
        ("grid", Box::new(GridSampling::new(3.0).validated())),
        (
            "poisson",
            Box::new(PoissonDiscSampling::new(PoissonDiscSettings::new(
                3.0,
                NoiseField::disabled(),
                25,
            ))),
        ),
    ];

    for (name, strategy) in strategies {
        let mut rng = StdRng::seed_from_u64(2025);
        let points = strategy.generate(Vec3::ZERO.into(), &bounds, &mut rng)?;
        println!("{name}: {} points", points.len());

        let config = RenderConfig::new((600, 600), &bounds).with_discs(true);
        render_points_to_png(&points, &config, format!("samplers-grid-vs-poisson-{name}.png"))?;
    }
    Ok(())
}
