//! Per-point hue values for color-scale mapping.
use rand::RngCore;

use crate::random::RandomSource;

/// Draws one independent hue in `[0, 1)` per point.
pub fn assign_hues(count: usize, rng: &mut dyn RngCore) -> Vec<f32> {
    (0..count).map(|_| rng.uniform01()).collect()
}
