//! Android fling spline.
//!
//! The platform scroller samples a fixed tension curve to decide how far a
//! fling has travelled at a given fraction of its duration. The curve is
//! tabulated once and linearly interpolated afterwards.

use std::sync::LazyLock;

const INFLECTION: f32 = 0.35;
const START_TENSION: f32 = 0.5;
const END_TENSION: f32 = 1.0;
const P1: f32 = START_TENSION * INFLECTION;
const P2: f32 = 1.0 - END_TENSION * (1.0 - INFLECTION);

/// Number of samples in the lookup table.
const NB_SAMPLES: usize = 100;

/// Bisection tolerance when inverting the curve.
const TOLERANCE: f32 = 1e-5;

static SPLINE_POSITIONS: LazyLock<[f32; NB_SAMPLES + 1]> = LazyLock::new(|| {
    let mut positions = [0.0f32; NB_SAMPLES + 1];
    let mut lower = 0.0f32;

    for (i, slot) in positions.iter_mut().take(NB_SAMPLES).enumerate() {
        let alpha = i as f32 / NB_SAMPLES as f32;
        let (x, coef) = invert(alpha, &mut lower, |x, c| {
            c * ((1.0 - x) * P1 + x * P2) + x * x * x
        });
        *slot = coef * ((1.0 - x) * START_TENSION + x) + x * x * x;
    }

    positions[NB_SAMPLES] = 1.0;
    positions
});

/// Finds `x` in `[lower, 1]` such that `curve(x) == alpha`.
///
/// `lower` is carried across calls because alpha grows monotonically while the
/// table is built. Returns `x` together with the `3x(1-x)` coefficient.
fn invert(alpha: f32, lower: &mut f32, curve: impl Fn(f32, f32) -> f32) -> (f32, f32) {
    let mut upper = 1.0f32;
    loop {
        let mid = *lower + (upper - *lower) / 2.0;
        let coef = 3.0 * mid * (1.0 - mid);
        let value = curve(mid, coef);
        if (value - alpha).abs() < TOLERANCE {
            return (mid, coef);
        }
        if value > alpha {
            upper = mid;
        } else {
            *lower = mid;
        }
    }
}

/// A sample of the fling spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSample {
    /// Fraction of the total fling distance covered, `0.0..=1.0`.
    pub distance_coefficient: f32,
    /// Slope of the curve at this point.
    pub velocity_coefficient: f32,
}

/// Samples the spline at `fraction` of the fling duration.
pub fn sample(fraction: f32) -> SplineSample {
    let t = fraction.clamp(0.0, 1.0);
    let index = (NB_SAMPLES as f32 * t) as usize;
    if index >= NB_SAMPLES {
        return SplineSample {
            distance_coefficient: 1.0,
            velocity_coefficient: 0.0,
        };
    }

    let t_inf = index as f32 / NB_SAMPLES as f32;
    let t_sup = (index + 1) as f32 / NB_SAMPLES as f32;
    let d_inf = SPLINE_POSITIONS[index];
    let d_sup = SPLINE_POSITIONS[index + 1];
    let slope = (d_sup - d_inf) / (t_sup - t_inf);

    SplineSample {
        distance_coefficient: d_inf + (t - t_inf) * slope,
        velocity_coefficient: slope,
    }
}
