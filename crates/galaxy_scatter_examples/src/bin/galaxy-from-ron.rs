use galaxy_scatter::prelude::*;
use galaxy_scatter_examples::{init_tracing, render_galaxy_to_png, RenderConfig, SceneFile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

const DEFAULT_SCENE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/galaxy.ron");

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SCENE.to_owned());
    let scene = SceneFile::load(&path)?;

    let mut rng = StdRng::seed_from_u64(scene.seed);
    let mut sink = FnSink::new(|event| match event {
        GalaxyEvent::ArmGenerated {
            index,
            group,
            star_count,
            ..
        } => info!("arm {index}: {star_count} stars -> {}", group.label()),
        GalaxyEvent::Warning { context, message } => warn!("{context}: {message}"),
        _ => {}
    });
    let galaxy = assemble_with_events(&scene.galaxy, &mut rng, &mut sink)?;

    let rc = RenderConfig::fitting(scene.image_size, &galaxy);
    let frames = scene.orbit.frames()?;
    let first = frames.first().copied().unwrap_or_default();

    render_galaxy_to_png(&galaxy, &first, &rc, "galaxy-from-ron.png")?;

    Ok(())
}
