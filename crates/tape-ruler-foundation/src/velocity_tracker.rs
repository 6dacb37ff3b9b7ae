//! Single-axis velocity tracking for fling detection.
//!
//! Uses the impulse strategy: the velocity is derived from the kinetic energy
//! the pointer imparted over the recent samples, which is robust against the
//! uneven event spacing touch hardware produces.

use smallvec::SmallVec;

/// Ring buffer size.
const HISTORY_SIZE: usize = 20;

/// Only samples this recent contribute to the velocity.
const HORIZON_MS: i64 = 100;

/// Samples older than this, measured from the newest, mean the pointer stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Tracks positions along one axis and estimates release velocity.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records the absolute `position` at `time_ms`.
    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Velocity in units per second, or 0.0 with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        let window = self.recent_window();
        if window.len() < 2 {
            return 0.0;
        }
        impulse_velocity(&window) * 1000.0
    }

    /// Velocity in units per second, clamped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.calculate_velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }

        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    /// Samples inside the horizon, oldest first, as `(time relative to newest, position)`.
    fn recent_window(&self) -> SmallVec<[(f32, f32); HISTORY_SIZE]> {
        let mut window = SmallVec::new();
        let Some(newest) = self.samples[self.index] else {
            return window;
        };

        let mut cursor = self.index;
        for _ in 0..HISTORY_SIZE {
            let Some(sample) = self.samples[cursor] else {
                break;
            };
            let age = newest.time_ms - sample.time_ms;
            if age > HORIZON_MS || age.abs() > ASSUME_STOPPED_MS {
                break;
            }
            window.push((-(age as f32), sample.position));
            cursor = (cursor + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        window.reverse();
        window
    }
}

/// Impulse velocity over `samples` ordered oldest first, in units per millisecond.
fn impulse_velocity(samples: &[(f32, f32)]) -> f32 {
    let mut work = 0.0f32;
    for i in 1..samples.len() {
        let (t0, x0) = samples[i - 1];
        let (t1, x1) = samples[i];
        if t1 == t0 {
            continue;
        }
        let v_curr = (x1 - x0) / (t1 - t0);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == 1 {
            work *= 0.5;
        }
    }
    kinetic_energy_to_velocity(work)
}

/// E = ½·v² with unit mass.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_returns_zero() {
        assert_eq!(VelocityTracker1D::new().calculate_velocity(), 0.0);
    }

    #[test]
    fn single_point_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn constant_motion() {
        let mut tracker = VelocityTracker1D::new();
        // 100 px every 10 ms
        for step in 0..4 {
            tracker.add_data_point(step * 10, step as f32 * 100.0);
        }
        let velocity = tracker.calculate_velocity();
        assert!((velocity - 10_000.0).abs() < 1.0, "got {velocity}");
    }

    #[test]
    fn leftward_motion_is_negative() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 300.0);
        tracker.add_data_point(10, 200.0);
        tracker.add_data_point(20, 100.0);
        assert!(tracker.calculate_velocity() < 0.0);
    }

    #[test]
    fn capped_in_both_directions() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(1, 10_000.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

        tracker.reset();
        tracker.add_data_point(0, 10_000.0);
        tracker.add_data_point(1, 0.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
    }

    #[test]
    fn invalid_cap_yields_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 100.0);
        assert_eq!(tracker.calculate_velocity_with_max(0.0), 0.0);
        assert_eq!(tracker.calculate_velocity_with_max(f32::NAN), 0.0);
    }

    #[test]
    fn samples_outside_horizon_ignored() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 5_000.0);
        tracker.add_data_point(150, 100.0);
        tracker.add_data_point(160, 200.0);
        tracker.add_data_point(170, 300.0);
        let velocity = tracker.calculate_velocity();
        assert!((velocity - 10_000.0).abs() < 1.0, "got {velocity}");
    }

    #[test]
    fn pause_before_release_means_stopped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn samples_older_than_stop_threshold_ignored() {
        let mut tracker = VelocityTracker1D::new();
        // Reversal 50 and 60 ms before release; only the last 40 ms count.
        tracker.add_data_point(0, 1_000.0);
        tracker.add_data_point(10, 500.0);
        for step in 0..5 {
            tracker.add_data_point(20 + step * 10, step as f32 * 100.0);
        }
        let velocity = tracker.calculate_velocity();
        assert!((velocity - 10_000.0).abs() < 1.0, "got {velocity}");
    }

    #[test]
    fn reset_clears_history() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 100.0);
        tracker.reset();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }
}
