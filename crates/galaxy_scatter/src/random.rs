//! Random draws used by the generators.
//!
//! Every generator takes a `&mut dyn RngCore`, so any seeded or fixed RNG can be
//! injected. [`RandomSource`] is an extension trait on top of it that provides the
//! handful of draws the galaxy needs: uniform floats, inclusive integer ranges and
//! standard normal samples.
use rand::RngCore;

/// Draw helpers available on every [`RngCore`].
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn uniform01(&mut self) -> f32;

    /// Uniform float in `[lo, hi)`. Returns `lo` when the range is empty.
    fn uniform_range(&mut self, lo: f32, hi: f32) -> f32;

    /// Uniform integer in the inclusive range `[lo, hi]`. Returns `lo` when `hi <= lo`.
    fn uniform_int(&mut self, lo: i32, hi: i32) -> i32;

    /// Sample from the standard normal distribution `N(0, 1)`.
    fn standard_normal(&mut self) -> f32;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    #[inline]
    fn uniform01(&mut self) -> f32 {
        rand01(self)
    }

    #[inline]
    fn uniform_range(&mut self, lo: f32, hi: f32) -> f32 {
        if !(hi > lo) {
            return lo;
        }
        lo + rand01(self) * (hi - lo)
    }

    #[inline]
    fn uniform_int(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi as i64 - lo as i64 + 1) as u64;
        // Multiply-shift maps a u32 onto [0, span) without a modulo.
        let offset = ((self.next_u32() as u64) * span) >> 32;
        (lo as i64 + offset as i64) as i32
    }

    fn standard_normal(&mut self) -> f32 {
        let u1 = (1.0 - rand01(self)).clamp(f32::MIN_POSITIVE, 1.0);
        let u2 = rand01(self);

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * core::f32::consts::PI * u2;

        r * theta.cos()
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
fn rand01<R: RngCore + ?Sized>(rng: &mut R) -> f32 {
    // 24 random bits keep every result exactly representable and strictly below 1.
    (rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}
