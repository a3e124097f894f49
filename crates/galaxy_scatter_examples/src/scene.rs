//! RON scene files: galaxy parameters, orbit settings and the RNG seed.
use std::path::Path;

use galaxy_scatter::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything needed to reproduce one rendered scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFile {
    pub seed: u64,
    pub galaxy: GalaxyConfig,
    pub orbit: OrbitConfig,
    pub image_size: (u32, u32),
}

impl Default for SceneFile {
    fn default() -> Self {
        Self {
            seed: 2025,
            galaxy: GalaxyConfig::default(),
            orbit: OrbitConfig::default(),
            image_size: (1000, 1000),
        }
    }
}

impl SceneFile {
    /// Parses a scene from RON text and validates its galaxy configuration.
    pub fn from_ron_str(text: &str) -> anyhow::Result<Self> {
        let scene: SceneFile = ron::from_str(text)?;
        scene.galaxy.validate()?;
        Ok(scene)
    }

    /// Loads and validates a scene from a `.ron` file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let scene = Self::from_ron_str(&text)?;
        info!("Loaded scene from {}", path.display());
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_scene_falls_back_to_defaults() {
        let scene =
            SceneFile::from_ron_str("(seed: 7, galaxy: (arm_scale: 200.0, stars_per_arm: 600))")
                .expect("valid scene");
        assert_eq!(scene.seed, 7);
        assert_eq!(scene.galaxy.arm_scale, 200.0);
        assert_eq!(scene.galaxy.stars_per_arm, 600);
        assert_eq!(scene.galaxy.core_star_count, 2000);
        assert_eq!(scene.orbit, OrbitConfig::default());
    }

    #[test]
    fn invalid_galaxy_is_rejected() {
        assert!(SceneFile::from_ron_str("(galaxy: (arm_scale: 0.0))").is_err());
    }

    #[test]
    fn bulge_profile_parses_by_name() {
        let scene = SceneFile::from_ron_str("(galaxy: (bulge_profile: Gaussian))").expect("valid");
        assert_eq!(scene.galaxy.bulge_profile, BulgeProfile::Gaussian);
    }
}
