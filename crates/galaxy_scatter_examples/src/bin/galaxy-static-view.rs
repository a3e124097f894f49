use galaxy_scatter::prelude::*;
use galaxy_scatter_examples::{init_tracing, render_galaxy_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Classic layout: 350 units wide, b = -0.3, 1000 stars per arm, 2000 in the core.
    let config = GalaxyConfig::new(350.0)
        .with_spiral_openness(-0.3)
        .with_stars_per_arm(1000)
        .with_core_star_count(2000)
        .with_height_scale(10.0);

    let mut rng = StdRng::seed_from_u64(2025);
    let galaxy = assemble(&config, &mut rng)?;

    let rc = RenderConfig::fitting((1000, 1000), &galaxy);

    render_galaxy_to_png(
        &galaxy,
        &CameraFrame::ISOMETRIC,
        &rc,
        "galaxy-static-view.png",
    )?;

    // Looking straight down the z axis shows the arm layout best.
    let top_down = CameraFrame::new(0.0, -0.001, 2.0);
    render_galaxy_to_png(&galaxy, &top_down, &rc, "galaxy-top-down.png")?;

    Ok(())
}
