#![forbid(unsafe_code)]

mod rendering;
mod scene;

pub use rendering::{
    init_tracing, render_galaxy, render_galaxy_to_png, GroupStyle, RenderConfig,
};
pub use scene::SceneFile;
