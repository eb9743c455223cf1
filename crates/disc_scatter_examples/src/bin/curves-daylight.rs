use disc_scatter::prelude::*;
use disc_scatter_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let falloff = KeyframeCurve::new(vec![
        Keyframe::new(0.0, 0.0),
        Keyframe::new(6.0, 0.2),
        Keyframe::new(13.0, 1.0),
        Keyframe::new(20.0, 0.2),
        Keyframe::new(24.0, 0.0),
    ]);
    let noise = NoiseField::default().with_scale(0.6).with_sample_offset(0.5);
    let mut curve = ProceduralCurve::new(2.0, noise).with_falloff(falloff);

    let rng = StdRng::seed_from_u64(11);
    curve.generate(&rng);

    for hour in 0..=24 {
        let value = curve.evaluate(hour as f32);
        let bar = "#".repeat((value.max(0.0) * 40.0) as usize);
        println!("{hour:>2}h {value:>6.3} {bar}");
    }
    Ok(())
}
