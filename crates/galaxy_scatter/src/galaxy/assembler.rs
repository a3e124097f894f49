//! Assembles complete galaxies from a [`GalaxyConfig`].
//!
//! Arms are generated in layout order and appended to the trailing group (even
//! index) or the leading group (odd index). The core follows, then hues for the
//! leading, trailing and core groups. This fixed order of random draws makes a
//! seeded generation reproducible.
use glam::Vec3;
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::galaxy::arm::generate_arm;
use crate::galaxy::bulge::BulgeSampling;
use crate::galaxy::config::{arm_layout, ArmSpec, GalaxyConfig};
use crate::galaxy::events::{EventSink, GalaxyEvent, GalaxyEventKind};
use crate::galaxy::{Galaxy, GroupKind, PointGroup};

/// Generates a galaxy for `config`.
pub fn assemble(config: &GalaxyConfig, rng: &mut dyn RngCore) -> Result<Galaxy> {
    assemble_with_events(config, rng, &mut ())
}

/// Generates a galaxy for `config`, reporting progress to `sink`.
///
/// The configuration and the bulge radius are checked before anything is drawn
/// or emitted, so an error leaves both `rng` and `sink` untouched.
pub fn assemble_with_events(
    config: &GalaxyConfig,
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
) -> Result<Galaxy> {
    config.validate()?;
    let bulge = BulgeSampling::try_new(
        config.core_star_count,
        config.core_radius(),
        config.height_scale,
    )?
    .with_profile(config.bulge_profile);

    if sink.wants(GalaxyEventKind::GenerationStarted) {
        sink.send(GalaxyEvent::GenerationStarted {
            config: config.clone(),
        });
    }
    report_config_warnings(config, sink);

    let arms = arm_layout(config.arm_scale);
    let (leading, trailing) = build_arms(
        config.spiral_openness,
        &arms,
        config.stars_per_arm,
        config.height_scale,
        rng,
        sink,
    );

    let core = bulge.generate_points(rng);
    debug!(
        "Generated core: {} stars, radius {:.3}, profile {:?}.",
        core.len(),
        bulge.radius(),
        bulge.profile()
    );
    if sink.wants(GalaxyEventKind::CoreGenerated) {
        sink.send(GalaxyEvent::CoreGenerated {
            radius: bulge.radius(),
            star_count: core.len(),
        });
    }

    let galaxy = Galaxy {
        leading: PointGroup::with_random_hues(leading, rng),
        trailing: PointGroup::with_random_hues(trailing, rng),
        core: PointGroup::with_random_hues(core, rng),
    };

    info!(
        "Galaxy generated: {} leading, {} trailing, {} core stars.",
        galaxy.leading.len(),
        galaxy.trailing.len(),
        galaxy.core.len()
    );
    if sink.wants(GalaxyEventKind::GenerationFinished) {
        sink.send(GalaxyEvent::GenerationFinished {
            leading: galaxy.leading.len(),
            trailing: galaxy.trailing.len(),
            core: galaxy.core.len(),
        });
    }

    Ok(galaxy)
}

/// Generates every arm of `arms` and splits them into `(leading, trailing)` point lists.
pub fn build_spiral_arms(
    openness: f32,
    arms: &[ArmSpec],
    stars_per_arm: usize,
    height_scale: f32,
    rng: &mut dyn RngCore,
) -> (Vec<Vec3>, Vec<Vec3>) {
    build_arms(openness, arms, stars_per_arm, height_scale, rng, &mut ())
}

fn build_arms(
    openness: f32,
    arms: &[ArmSpec],
    stars_per_arm: usize,
    height_scale: f32,
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
) -> (Vec<Vec3>, Vec<Vec3>) {
    let half = arms.len().div_ceil(2) * stars_per_arm;
    let mut leading = Vec::with_capacity(half);
    let mut trailing = Vec::with_capacity(half);

    for (index, arm) in arms.iter().enumerate() {
        let stars = generate_arm(
            openness,
            arm.radius_signed,
            arm.rotation_factor,
            arm.fuzz_factor,
            stars_per_arm,
            height_scale,
            rng,
        );
        let group = GroupKind::for_arm_index(index);
        debug!(
            "Generated arm {} ({:?}): r = {}, rotation = {}, fuzz = {}.",
            index, group, arm.radius_signed, arm.rotation_factor, arm.fuzz_factor
        );
        if sink.wants(GalaxyEventKind::ArmGenerated) {
            sink.send(GalaxyEvent::ArmGenerated {
                index,
                arm: *arm,
                group,
                star_count: stars.len(),
            });
        }

        match group {
            GroupKind::Leading => leading.extend(stars),
            _ => trailing.extend(stars),
        }
    }

    (leading, trailing)
}

fn report_config_warnings(config: &GalaxyConfig, sink: &mut dyn EventSink) {
    if config.spiral_openness > 0.0 {
        warn!(
            "Spiral openness {} is positive; arm radii grow as exp(b·θ) and may get very large.",
            config.spiral_openness
        );
        if sink.wants(GalaxyEventKind::Warning) {
            sink.send(GalaxyEvent::Warning {
                context: "spiral_openness".into(),
                message: format!(
                    "Positive openness {} unwinds the arms outward",
                    config.spiral_openness
                ),
            });
        }
    }
    if !config.within_suggested_ranges() {
        debug!("Configuration lies outside the suggested parameter ranges: {config:?}.");
    }
}

/// Generator bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct GalaxyAssembler {
    config: GalaxyConfig,
}

impl GalaxyAssembler {
    /// Creates an assembler, validating the configuration.
    pub fn try_new(config: GalaxyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    /// Generates a new galaxy from the stored configuration.
    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<Galaxy> {
        assemble(&self.config, rng)
    }

    pub fn generate_with_events(
        &self,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<Galaxy> {
        assemble_with_events(&self.config, rng, sink)
    }
}
