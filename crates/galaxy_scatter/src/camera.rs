//! Camera orbit generation for animating a view of the galaxy.
//!
//! The orbit is a fixed-elevation circle around the scene origin. Only the eye
//! positions are produced here; stepping through them at a steady pace is up to
//! the renderer, for which [`frame_interval`] provides the delay between frames.
use std::time::Duration;

use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One camera eye position, relative to the scene origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraFrame {
    pub eye_x: f32,
    pub eye_y: f32,
    pub eye_z: f32,
}

impl CameraFrame {
    /// Static three-quarter view used when no animation is running.
    pub const ISOMETRIC: CameraFrame = CameraFrame::new(1.25, 1.25, 1.25);

    pub const fn new(eye_x: f32, eye_y: f32, eye_z: f32) -> Self {
        Self {
            eye_x,
            eye_y,
            eye_z,
        }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(self.eye_x, self.eye_y, self.eye_z)
    }

    /// Unit vector from the eye towards the origin, or zero if the eye sits at the origin.
    pub fn look_direction(&self) -> Vec3 {
        (-self.eye()).normalize_or_zero()
    }
}

impl Default for CameraFrame {
    fn default() -> Self {
        Self::ISOMETRIC
    }
}

impl From<CameraFrame> for Vec3 {
    fn from(frame: CameraFrame) -> Self {
        frame.eye()
    }
}

/// Generates one full orbit: angles `0, step, 2·step, …` below 360 degrees.
///
/// Frame `k` sits at `(radius·cos a, radius·sin a, elevation)` with `a = k·step`.
/// A step of 0 is rejected. Steps of 360 or more produce the single frame at 0°.
pub fn generate_orbit(
    angle_step_degrees: u32,
    elevation: f32,
    radius_factor: f32,
) -> Result<Vec<CameraFrame>> {
    if angle_step_degrees == 0 {
        return Err(Error::invalid("angle_step_degrees must be > 0"));
    }
    if !elevation.is_finite() || !radius_factor.is_finite() {
        return Err(Error::invalid(
            "orbit elevation and radius_factor must be finite",
        ));
    }

    Ok((0..360)
        .step_by(angle_step_degrees as usize)
        .map(|angle: u32| {
            let a = (angle as f32).to_radians();
            CameraFrame::new(radius_factor * a.cos(), radius_factor * a.sin(), elevation)
        })
        .collect())
}

/// Delay between orbit frames for the given rotation speed (frames per second).
///
/// Speeds so small that the delay overflows [`Duration`] are rejected.
pub fn frame_interval(rotation_speed: f32) -> Result<Duration> {
    if !rotation_speed.is_finite() || rotation_speed <= 0.0 {
        return Err(Error::invalid("rotation_speed must be finite and > 0"));
    }
    Duration::try_from_secs_f64(1.0 / rotation_speed as f64)
        .map_err(|_| Error::invalid("rotation_speed too small for a frame interval"))
}

/// Parameters of a camera orbit.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrbitConfig {
    /// Angular distance between consecutive frames, in degrees.
    pub angle_step_degrees: u32,
    /// Constant eye height.
    pub elevation: f32,
    /// Distance of the eye from the z axis.
    pub radius_factor: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            angle_step_degrees: 5,
            elevation: 0.3,
            radius_factor: 1.5,
        }
    }
}

impl OrbitConfig {
    pub fn with_angle_step(mut self, angle_step_degrees: u32) -> Self {
        self.angle_step_degrees = angle_step_degrees;
        self
    }

    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_radius_factor(mut self, radius_factor: f32) -> Self {
        self.radius_factor = radius_factor;
        self
    }

    /// Number of frames in one loop.
    pub fn frame_count(&self) -> usize {
        if self.angle_step_degrees == 0 {
            return 0;
        }
        360usize.div_ceil(self.angle_step_degrees as usize)
    }

    /// Generates the frames of one loop.
    pub fn frames(&self) -> Result<Vec<CameraFrame>> {
        generate_orbit(self.angle_step_degrees, self.elevation, self.radius_factor)
    }
}
