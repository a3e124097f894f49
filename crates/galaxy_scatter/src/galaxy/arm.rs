//! Logarithmic spiral arm sampling.
use core::f32::consts::PI;

use glam::Vec3;
use mint::Vector3;
use rand::RngCore;

use crate::galaxy::config::ArmSpec;
use crate::galaxy::PointSampling;
use crate::random::RandomSource;

/// Fraction of the arm radius used as the integer fuzz budget.
pub const FUZZ_RATIO: f32 = 0.030;

/// Integer fuzz budget for an arm of radius `r`: `floor(0.030 * |r|)`.
#[inline]
pub fn fuzz_budget(r: f32) -> i32 {
    (FUZZ_RATIO * r.abs()).floor() as i32
}

/// Generates the stars of one spiral arm.
///
/// Star `i` sits at angle `θ = radians(i)` on the spiral `r·exp(bθ)`, rotated by
/// `π·rot_fac`. Indices past 360 wrap around and overlap earlier turns, which
/// thickens the arm. Each of x and y is displaced by an independent integer draw
/// in `[-fuzz, fuzz]` scaled by `fuz_fac`, where `fuzz = floor(0.030·|r|)`; z is
/// uniform in `[-height_scale/2, height_scale/2]`.
pub fn generate_arm(
    b: f32,
    r: f32,
    rot_fac: f32,
    fuz_fac: f32,
    num_stars: usize,
    height_scale: f32,
    rng: &mut dyn RngCore,
) -> Vec<Vec3> {
    let fuzz = fuzz_budget(r);
    let half_height = height_scale * 0.5;
    let phase = PI * rot_fac;

    let mut out = Vec::with_capacity(num_stars);
    for i in 0..num_stars {
        let theta = (i as f32).to_radians();
        let growth = r * (b * theta).exp();
        let angle = theta - phase;

        let x = growth * angle.cos() + rng.uniform_int(-fuzz, fuzz) as f32 * fuz_fac;
        let y = growth * angle.sin() + rng.uniform_int(-fuzz, fuzz) as f32 * fuz_fac;
        let z = rng.uniform_range(-half_height, half_height);

        out.push(Vec3::new(x, y, z));
    }

    out
}

/// Spiral arm sampler bound to one [`ArmSpec`].
#[derive(Debug, Clone)]
pub struct SpiralArmSampling {
    /// Spiral openness `b`.
    pub openness: f32,
    /// Arm placement parameters.
    pub arm: ArmSpec,
    /// Number of stars to generate.
    pub count: usize,
    /// Vertical spread of the arm.
    pub height_scale: f32,
}

impl SpiralArmSampling {
    pub fn new(openness: f32, arm: ArmSpec, count: usize, height_scale: f32) -> Self {
        Self {
            openness,
            arm,
            count,
            height_scale,
        }
    }

    /// Generates the arm as glam vectors.
    pub fn generate_points(&self, rng: &mut dyn RngCore) -> Vec<Vec3> {
        generate_arm(
            self.openness,
            self.arm.radius_signed,
            self.arm.rotation_factor,
            self.arm.fuzz_factor,
            self.count,
            self.height_scale,
            rng,
        )
    }
}

impl PointSampling for SpiralArmSampling {
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
    fn generates_exactly_num_stars() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_arm(-0.3, 350.0, 1.0, 1.5, 0, 10.0, &mut rng).is_empty());
        assert_eq!(
            generate_arm(-0.3, 350.0, 1.0, 1.5, 1234, 10.0, &mut rng).len(),
            1234
        );
    }

    #[test]
    fn fuzz_budget_floors_three_percent_of_radius() {
        assert_eq!(fuzz_budget(350.0), 10);
        assert_eq!(fuzz_budget(-350.0), 10);
        assert_eq!(fuzz_budget(20.0), 0);
        assert_eq!(fuzz_budget(100.0), 3);
    }

    #[test]
    fn z_stays_within_half_height() {
        let mut rng = StdRng::seed_from_u64(42);
        let height = 7.0;
        let pts = generate_arm(-0.3, -350.0, 0.5, 1.5, 5000, height, &mut rng);
        for p in pts {
            assert!(p.z >= -height / 2.0 && p.z <= height / 2.0, "z = {}", p.z);
        }
    }

    #[test]
    fn first_star_sits_near_rotated_base_point() {
        // θ = 0, so the base point is r·(cos(-π), sin(-π)) = (-350, 0).
        let mut rng = StdRng::seed_from_u64(2024);
        let pts = generate_arm(-0.3, 350.0, 1.0, 1.5, 1000, 10.0, &mut rng);
        let bound = fuzz_budget(350.0) as f32 * 1.5 + 1e-3;
        assert!((pts[0].x + 350.0).abs() <= bound, "x = {}", pts[0].x);
        assert!(pts[0].y.abs() <= bound, "y = {}", pts[0].y);
        assert!(bound <= 15.75);
    }

    #[test]
    fn fixed_rng_gives_exact_minimum_fuzz() {
        let mut rng = FixedRng { value: 0 };
        let pts = generate_arm(-0.3, 350.0, 1.0, 1.5, 1, 10.0, &mut rng);
        assert!((pts[0].x - (-365.0)).abs() < 1e-3);
        assert!((pts[0].y - (-15.0)).abs() < 1e-3);
        assert_eq!(pts[0].z, -5.0);
    }

    #[test]
    fn fuzz_never_exceeds_budget() {
        let mut rng = StdRng::seed_from_u64(8);
        let b = -0.3;
        let r = 350.0;
        let bound = fuzz_budget(r) as f32 * 1.5 + 1e-2;
        let pts = generate_arm(b, r, 0.91, 1.5, 720, 1.0, &mut rng);
        for (i, p) in pts.iter().enumerate() {
            let theta = (i as f32).to_radians();
            let growth = r * (b * theta).exp();
            let angle = theta - PI * 0.91;
            assert!((p.x - growth * angle.cos()).abs() <= bound);
            assert!((p.y - growth * angle.sin()).abs() <= bound);
        }
    }

    #[test]
    fn small_radius_has_no_fuzz() {
        let mut rng = StdRng::seed_from_u64(3);
        let pts = generate_arm(0.0, 10.0, 0.0, 1.5, 90, 0.0, &mut rng);
        for (i, p) in pts.iter().enumerate() {
            let theta = (i as f32).to_radians();
            assert!((p.x - 10.0 * theta.cos()).abs() < 1e-4);
            assert!((p.y - 10.0 * theta.sin()).abs() < 1e-4);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn determinism_for_same_seed() {
        let s = SpiralArmSampling::new(-0.3, ArmSpec::new(-350.0, -1.09, 1.5), 256, 10.0);

        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let pa = s.generate(&mut rng_a);
        let pb = s.generate(&mut rng_b);
        assert_eq!(pa, pb);

        let mut rng_c = StdRng::seed_from_u64(456);
        let pc = s.generate(&mut rng_c);
        assert_ne!(pa, pc);
    }
}
