//! Central bulge sampling.
//!
//! The uniform profile samples a solid sphere by inverse transform: a uniform
//! azimuth, a uniform `cos θ` and a cube-root radius give constant volumetric
//! density. The sphere is then flattened by scaling z with `height_scale / radius`,
//! so `|z|` never exceeds `height_scale`. The flattening makes the density
//! anisotropic; that is accepted for a visual bulge.
use core::f32::consts::TAU;

use glam::Vec3;
use mint::Vector3;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::galaxy::config::BulgeProfile;
use crate::galaxy::PointSampling;
use crate::random::RandomSource;

/// Generates `num_points` uniformly distributed core stars.
///
/// Returns [`Error::DegenerateRadius`] without drawing anything if `radius` is not
/// a finite positive number.
pub fn generate_bulge(
    num_points: usize,
    radius: f32,
    height_scale: f32,
    rng: &mut dyn RngCore,
) -> Result<Vec<Vec3>> {
    let sampler = BulgeSampling::try_new(num_points, radius, height_scale)?;
    Ok(sampler.generate_points(rng))
}

/// Bulge sampler with a validated radius.
#[derive(Debug, Clone)]
pub struct BulgeSampling {
    count: usize,
    radius: f32,
    height_scale: f32,
    profile: BulgeProfile,
}

impl BulgeSampling {
    /// Creates a uniform-profile sampler.
    pub fn try_new(count: usize, radius: f32, height_scale: f32) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::DegenerateRadius { radius });
        }
        Ok(Self {
            count,
            radius,
            height_scale,
            profile: BulgeProfile::Uniform,
        })
    }

    /// Sets the radial profile (builder-style).
    pub fn with_profile(mut self, profile: BulgeProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn profile(&self) -> BulgeProfile {
        self.profile
    }

    /// Factor applied to z to flatten the sphere into a bulge.
    #[inline]
    pub fn flattening(&self) -> f32 {
        self.height_scale / self.radius
    }

    /// Generates the bulge as glam vectors.
    pub fn generate_points(&self, rng: &mut dyn RngCore) -> Vec<Vec3> {
        let flatten = self.flattening();
        let mut out = Vec::with_capacity(self.count);

        match self.profile {
            BulgeProfile::Uniform => {
                for _ in 0..self.count {
                    let phi = rng.uniform_range(0.0, TAU);
                    let cos_theta = rng.uniform_range(-1.0, 1.0);
                    let u = rng.uniform01();

                    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
                    let r = self.radius * u.cbrt();

                    out.push(Vec3::new(
                        r * sin_theta * phi.cos(),
                        r * sin_theta * phi.sin(),
                        r * cos_theta * flatten,
                    ));
                }
            }
            BulgeProfile::Gaussian => {
                for _ in 0..self.count {
                    let x = rng.standard_normal() * self.radius;
                    let y = rng.standard_normal() * self.radius;
                    let z = rng.standard_normal() * self.radius;
                    out.push(Vec3::new(x, y, z * flatten));
                }
            }
        }

        out
    }
}

impl PointSampling for BulgeSampling {
    fn generate(&self, rng: &mut dyn RngCore) -> Vec<Vector3<f32>> {
        self.generate_points(rng)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::random::tests::FixedRng;

    #[test]
    fn non_positive_or_non_finite_radius_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = generate_bulge(10, radius, 5.0, &mut rng).unwrap_err();
            assert!(matches!(err, Error::DegenerateRadius { .. }), "{radius}");
        }
    }

    #[test]
    fn returns_exact_count_including_zero() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(generate_bulge(0, 10.0, 5.0, &mut rng)
            .expect("valid")
            .is_empty());
        assert_eq!(
            generate_bulge(2000, 10.0, 5.0, &mut rng)
                .expect("valid")
                .len(),
            2000
        );
    }

    #[test]
    fn z_magnitude_bounded_by_height_for_any_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        let height = 4.0;
        for radius in [0.5, 23.3, 1000.0] {
            let pts = generate_bulge(3000, radius, height, &mut rng).expect("valid");
            for p in &pts {
                assert!(p.z.abs() <= height * (1.0 + 1e-5), "z = {}", p.z);
                let planar = (p.x * p.x + p.y * p.y).sqrt();
                assert!(planar <= radius * (1.0 + 1e-5));
            }
        }
    }

    #[test]
    fn cube_root_radius_spreads_points_through_the_volume() {
        // Half the volume of a unit sphere lies beyond r = 0.5^(1/3) ≈ 0.794.
        let mut rng = StdRng::seed_from_u64(99);
        let radius = 1.0;
        let pts = generate_bulge(20_000, radius, radius, &mut rng).expect("valid");
        let outer = pts.iter().filter(|p| p.length() > 0.7937).count();
        let share = outer as f32 / pts.len() as f32;
        assert!((share - 0.5).abs() < 0.03, "outer share {share}");
    }

    #[test]
    fn fixed_rng_lands_on_the_south_pole_axis() {
        // u01 = 0 everywhere: φ = 0, cos θ = -1, r = 0.
        let mut rng = FixedRng { value: 0 };
        let pts = generate_bulge(1, 10.0, 2.0, &mut rng).expect("valid");
        assert_eq!(pts[0], Vec3::ZERO);
    }

    #[test]
    fn gaussian_profile_is_flattened() {
        let mut rng = StdRng::seed_from_u64(5);
        let sampler = BulgeSampling::try_new(5000, 20.0, 2.0)
            .expect("valid")
            .with_profile(BulgeProfile::Gaussian);
        let pts = sampler.generate_points(&mut rng);
        assert_eq!(pts.len(), 5000);

        let spread = |f: fn(&Vec3) -> f32| {
            (pts.iter().map(|p| f(p) * f(p)).sum::<f32>() / pts.len() as f32).sqrt()
        };
        let sx = spread(|p| p.x);
        let sz = spread(|p| p.z);
        assert!((sx - 20.0).abs() < 1.5, "sx {sx}");
        assert!((sz - 2.0).abs() < 0.2, "sz {sz}");
    }

    #[test]
    fn determinism_for_same_seed() {
        let sampler = BulgeSampling::try_new(128, 23.0, 10.0).expect("valid");
        let mut rng_a = StdRng::seed_from_u64(31);
        let mut rng_b = StdRng::seed_from_u64(31);
        assert_eq!(sampler.generate(&mut rng_a), sampler.generate(&mut rng_b));
    }
}
