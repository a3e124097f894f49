use galaxy_scatter::prelude::*;
use galaxy_scatter_examples::{init_tracing, render_galaxy_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GalaxyConfig::default().with_rotation_speed(20.0);
    let assembler = GalaxyAssembler::try_new(config)?;

    let mut rng = StdRng::seed_from_u64(7);
    let galaxy = assembler.generate(&mut rng)?;

    // 5 degree steps at a slight elevation: 72 frames per loop.
    let orbit = OrbitConfig::default();
    let frames = orbit.frames()?;
    let interval = frame_interval(assembler.config().rotation_speed)?;
    info!(
        "Rendering {} orbit frames; play back at {:?} per frame.",
        frames.len(),
        interval
    );

    let rc = RenderConfig::fitting((640, 640), &galaxy).with_background([5, 5, 12]);
    for (i, frame) in frames.iter().enumerate() {
        let out = format!("galaxy-orbit/frame_{i:03}.png");
        render_galaxy_to_png(&galaxy, frame, &rc, out)?;
    }

    Ok(())
}
