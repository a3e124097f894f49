#![forbid(unsafe_code)]
//! galaxy_scatter: Procedural spiral galaxy point clouds.
//!
//! Modules:
//! - galaxy: spiral arm and bulge samplers, hue assignment, galaxy assembly and events
//! - camera: fixed-elevation orbit frames and frame pacing for animated views
//! - random: draw helpers on top of any injected `RngCore`
//!
//! For examples and docs, see README and docs.rs.
pub mod camera;
pub mod error;
pub mod galaxy;
pub mod random;

/// Convenient re-exports for common types. Import with `use galaxy_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::camera::{frame_interval, generate_orbit, CameraFrame, OrbitConfig};
    pub use crate::error::{Error, Result};
    pub use crate::galaxy::arm::{generate_arm, SpiralArmSampling};
    pub use crate::galaxy::assembler::{
        assemble, assemble_with_events, build_spiral_arms, GalaxyAssembler,
    };
    pub use crate::galaxy::bulge::{generate_bulge, BulgeSampling};
    pub use crate::galaxy::color::assign_hues;
    pub use crate::galaxy::config::{
        arm_layout, ArmSpec, BulgeProfile, GalaxyConfig, ARM_COUNT, ARM_LAYOUT,
    };
    pub use crate::galaxy::events::{
        EventSink, FilteredSink, FnSink, GalaxyEvent, GalaxyEventKind, VecSink,
    };
    pub use crate::galaxy::{Galaxy, GroupKind, PointGroup, PointSampling};
    pub use crate::random::RandomSource;
}
