//! Galaxy configuration and the fixed arm layout.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::camera::frame_interval;
use crate::error::{Error, Result};

/// Parameter ranges offered by interactive front-ends.
///
/// Generation accepts any value that passes [`GalaxyConfig::validate`]; these are
/// only the ranges a control panel is expected to expose.
pub mod ranges {
    use core::ops::RangeInclusive;

    pub const STARS_PER_ARM: RangeInclusive<usize> = 500..=5000;
    pub const CORE_STAR_COUNT: RangeInclusive<usize> = 1000..=5000;
    pub const SPIRAL_OPENNESS: RangeInclusive<f32> = -0.5..=0.0;
    pub const ARM_SCALE: RangeInclusive<f32> = 100.0..=500.0;
    pub const ROTATION_SPEED: RangeInclusive<f32> = 10.0..=100.0;
    pub const HEIGHT_SCALE: RangeInclusive<f32> = 1.0..=100.0;
}

/// Divisor applied to the arm scale to obtain the bulge radius.
pub const CORE_RADIUS_DIVISOR: f32 = 15.0;

/// Radial profile used to sample the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BulgeProfile {
    /// Uniform volumetric density inside a sphere, flattened along z.
    #[default]
    Uniform,
    /// Isotropic Gaussian cloud with `sigma = radius`, flattened along z.
    Gaussian,
}

/// Parameters for one galaxy generation request.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GalaxyConfig {
    /// Disc radius magnitude. Must be finite and non-zero.
    pub arm_scale: f32,
    /// Logarithmic-spiral growth constant `b`. The sign sets handedness.
    pub spiral_openness: f32,
    /// Number of stars sampled along each of the eight arms.
    pub stars_per_arm: usize,
    /// Number of stars in the core.
    pub core_star_count: usize,
    /// Vertical spread of the disc and the core.
    pub height_scale: f32,
    /// Animation frames per second used to pace camera orbits.
    pub rotation_speed: f32,
    /// Sampling profile of the core.
    pub bulge_profile: BulgeProfile,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            arm_scale: 350.0,
            spiral_openness: -0.3,
            stars_per_arm: 1000,
            core_star_count: 2000,
            height_scale: 10.0,
            rotation_speed: 10.0,
            bulge_profile: BulgeProfile::Uniform,
        }
    }
}

impl GalaxyConfig {
    /// Creates a default configuration with the given arm scale.
    pub fn new(arm_scale: f32) -> Self {
        Self {
            arm_scale,
            ..Default::default()
        }
    }

    /// Sets the spiral openness `b`.
    pub fn with_spiral_openness(mut self, spiral_openness: f32) -> Self {
        self.spiral_openness = spiral_openness;
        self
    }

    /// Sets the number of stars per arm.
    pub fn with_stars_per_arm(mut self, stars_per_arm: usize) -> Self {
        self.stars_per_arm = stars_per_arm;
        self
    }

    /// Sets the number of core stars.
    pub fn with_core_star_count(mut self, core_star_count: usize) -> Self {
        self.core_star_count = core_star_count;
        self
    }

    /// Sets the vertical spread.
    pub fn with_height_scale(mut self, height_scale: f32) -> Self {
        self.height_scale = height_scale;
        self
    }

    /// Sets the animation rotation speed.
    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    /// Sets the core sampling profile.
    pub fn with_bulge_profile(mut self, bulge_profile: BulgeProfile) -> Self {
        self.bulge_profile = bulge_profile;
        self
    }

    /// Radius of the core derived from the arm scale.
    pub fn core_radius(&self) -> f32 {
        self.arm_scale.abs() / CORE_RADIUS_DIVISOR
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.arm_scale.is_finite() || self.arm_scale == 0.0 {
            return Err(Error::invalid("arm_scale must be finite and != 0"));
        }
        if !self.spiral_openness.is_finite() {
            return Err(Error::invalid("spiral_openness must be finite"));
        }
        if self.stars_per_arm < 1 {
            return Err(Error::invalid("stars_per_arm must be >= 1"));
        }
        if self.core_star_count < 1 {
            return Err(Error::invalid("core_star_count must be >= 1"));
        }
        if !self.height_scale.is_finite() || self.height_scale < 0.0 {
            return Err(Error::invalid("height_scale must be finite and >= 0"));
        }
        frame_interval(self.rotation_speed)?;

        Ok(())
    }

    /// Returns true if every parameter lies inside the ranges in [`ranges`].
    pub fn within_suggested_ranges(&self) -> bool {
        ranges::STARS_PER_ARM.contains(&self.stars_per_arm)
            && ranges::CORE_STAR_COUNT.contains(&self.core_star_count)
            && ranges::SPIRAL_OPENNESS.contains(&self.spiral_openness)
            && ranges::ARM_SCALE.contains(&self.arm_scale)
            && ranges::ROTATION_SPEED.contains(&self.rotation_speed)
            && ranges::HEIGHT_SCALE.contains(&self.height_scale)
    }
}

/// Placement parameters for a single spiral arm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArmSpec {
    /// Arm radius; the sign mirrors the arm through the origin.
    pub radius_signed: f32,
    /// Phase offset in multiples of π.
    pub rotation_factor: f32,
    /// Multiplier applied to the positional fuzz.
    pub fuzz_factor: f32,
}

impl ArmSpec {
    pub const fn new(radius_signed: f32, rotation_factor: f32, fuzz_factor: f32) -> Self {
        Self {
            radius_signed,
            rotation_factor,
            fuzz_factor,
        }
    }
}

/// Number of arms in every galaxy.
pub const ARM_COUNT: usize = 8;

/// Fixed arm layout as `(radius sign, rotation factor, fuzz factor)`.
///
/// Even entries form the trailing group, odd entries the leading group.
pub const ARM_LAYOUT: [(f32, f32, f32); ARM_COUNT] = [
    (1.0, 1.0, 1.5),
    (1.0, 0.91, 1.5),
    (-1.0, 1.0, 1.5),
    (-1.0, -1.09, 1.5),
    (-1.0, 0.5, 1.5),
    (-1.0, 0.4, 1.5),
    (-1.0, -0.5, 1.5),
    (-1.0, -0.6, 1.5),
];

/// Instantiates [`ARM_LAYOUT`] for the given scale.
pub fn arm_layout(scale: f32) -> [ArmSpec; ARM_COUNT] {
    ARM_LAYOUT.map(|(sign, rotation, fuzz)| ArmSpec::new(sign * scale, rotation, fuzz))
}
