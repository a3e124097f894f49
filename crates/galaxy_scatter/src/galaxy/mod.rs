//! Galaxy point generation: spiral arms, the central bulge and their grouping.
//!
//! The samplers in [`arm`] and [`bulge`] produce raw positions, [`color`] attaches
//! per-point hues and [`assembler`] combines everything into a [`Galaxy`].
use glam::Vec3;
use mint::Vector3;
use rand::RngCore;

use crate::error::{Error, Result};

pub mod arm;
pub mod assembler;
pub mod bulge;
pub mod color;
pub mod config;
pub mod events;

pub use arm::SpiralArmSampling;
pub use assembler::GalaxyAssembler;
pub use bulge::BulgeSampling;
pub use config::{ArmSpec, BulgeProfile, GalaxyConfig};

/// Trait for samplers producing 3D point sets.
pub trait PointSampling: Send + Sync {
    fn generate(&self, rng: &mut dyn RngCore) -> Vec<Vector3<f32>>;
}

/// Which of the three renderable clusters a point set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Leading,
    Trailing,
    Core,
}

impl GroupKind {
    /// Group an arm contributes to, by its index in the arm layout.
    pub fn for_arm_index(index: usize) -> Self {
        if index % 2 == 0 {
            GroupKind::Trailing
        } else {
            GroupKind::Leading
        }
    }

    /// Display label for legends.
    pub fn label(self) -> &'static str {
        match self {
            GroupKind::Leading => "Leading Arm",
            GroupKind::Trailing => "Trailing Arm",
            GroupKind::Core => "Core",
        }
    }
}

/// Points of one renderable cluster with a parallel hue per point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointGroup {
    points: Vec<Vec3>,
    hues: Vec<f32>,
}

impl PointGroup {
    /// Creates a group, rejecting mismatched point and hue counts.
    pub fn try_new(points: Vec<Vec3>, hues: Vec<f32>) -> Result<Self> {
        if points.len() != hues.len() {
            return Err(Error::invalid(format!(
                "point group has {} points but {} hues",
                points.len(),
                hues.len()
            )));
        }
        Ok(Self { points, hues })
    }

    /// Creates a group and draws one hue per point.
    pub fn with_random_hues(points: Vec<Vec3>, rng: &mut dyn RngCore) -> Self {
        let hues = color::assign_hues(points.len(), rng);
        Self { points, hues }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn hues(&self) -> &[f32] {
        &self.hues
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates `(point, hue)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        self.points.iter().copied().zip(self.hues.iter().copied())
    }

    /// Splits the group into separate coordinate columns, the layout scatter plots expect.
    pub fn columns(&self) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
        let mut xs = Vec::with_capacity(self.len());
        let mut ys = Vec::with_capacity(self.len());
        let mut zs = Vec::with_capacity(self.len());
        for p in &self.points {
            xs.push(p.x);
            ys.push(p.y);
            zs.push(p.z);
        }
        (xs, ys, zs)
    }

    pub fn into_parts(self) -> (Vec<Vec3>, Vec<f32>) {
        (self.points, self.hues)
    }
}

/// A generated galaxy: two arm groups and the core.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Galaxy {
    pub leading: PointGroup,
    pub trailing: PointGroup,
    pub core: PointGroup,
}

impl Galaxy {
    /// Returns the group of the given kind.
    pub fn group(&self, kind: GroupKind) -> &PointGroup {
        match kind {
            GroupKind::Leading => &self.leading,
            GroupKind::Trailing => &self.trailing,
            GroupKind::Core => &self.core,
        }
    }

    /// Iterates the groups in render order: leading, trailing, core.
    pub fn groups(&self) -> impl Iterator<Item = (GroupKind, &PointGroup)> {
        [GroupKind::Leading, GroupKind::Trailing, GroupKind::Core]
            .into_iter()
            .map(move |kind| (kind, self.group(kind)))
    }

    pub fn total_points(&self) -> usize {
        self.leading.len() + self.trailing.len() + self.core.len()
    }
}
