//! Bounded fling deceleration.
//!
//! Mirrors the platform scroller: the total travel for an initial velocity is
//! computed up front, the rest position is clamped to the scroll bounds, and
//! each frame interpolates toward that rest position along the fling spline.
//! A fling that would overshoot therefore decelerates into the bound instead of
//! bouncing off it.

use crate::spline;

/// Earth's gravity in SI units (m/s²).
const GRAVITY_EARTH: f32 = 9.80665;
/// Inches per meter.
const INCHES_PER_METER: f32 = 39.37;
/// `ln(0.78) / ln(0.9)`
const DECELERATION_RATE: f64 = 2.358_201_6;
const INFLECTION: f64 = 0.35;

/// Computes fling duration and travel for an initial velocity.
#[derive(Debug, Clone, Copy)]
pub struct FlingCalculator {
    friction: f32,
    physical_coefficient: f32,
}

impl FlingCalculator {
    /// Default scroll friction of the platform view configuration.
    pub const DEFAULT_FRICTION: f32 = 0.015;

    /// `density` is the display scale factor (1.0 for 160 dpi).
    pub fn new(friction: f32, density: f32) -> Self {
        let ppi = density * 160.0;
        Self {
            friction,
            physical_coefficient: GRAVITY_EARTH * INCHES_PER_METER * ppi * 0.84,
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        (INFLECTION * velocity.abs() as f64
            / (self.friction as f64 * self.physical_coefficient as f64))
            .ln()
    }

    /// Fling duration in milliseconds.
    pub fn duration_ms(&self, velocity: f32) -> u64 {
        if velocity == 0.0 {
            return 0;
        }
        let l = self.spline_deceleration(velocity);
        (1000.0 * (l / (DECELERATION_RATE - 1.0)).exp()) as u64
    }

    /// Unsigned distance travelled before the fling comes to rest.
    pub fn distance(&self, velocity: f32) -> f32 {
        if velocity == 0.0 {
            return 0.0;
        }
        let l = self.spline_deceleration(velocity);
        let scale = self.friction as f64 * self.physical_coefficient as f64;
        (scale * (DECELERATION_RATE / (DECELERATION_RATE - 1.0) * l).exp()) as f32
    }
}

/// Position of a trajectory at one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingFrame {
    pub position: f32,
    pub finished: bool,
}

/// A running single-axis deceleration.
pub trait FlingTrajectory {
    /// Advances the trajectory to `frame_time_nanos`.
    ///
    /// The first call latches the start time, so the first frame always reports
    /// the start position.
    fn step(&mut self, frame_time_nanos: u64) -> FlingFrame;

    /// Clamped rest position computed when the fling started.
    fn final_position(&self) -> f32;
}

/// Deceleration model that turns a release velocity into a trajectory.
pub trait Flinger {
    fn start_fling(&self, start: f32, velocity: f32, min: f32, max: f32)
        -> Box<dyn FlingTrajectory>;
}

/// Flinger backed by the platform fling spline.
#[derive(Debug, Clone, Copy)]
pub struct SplineFlinger {
    calculator: FlingCalculator,
}

impl SplineFlinger {
    pub fn new(calculator: FlingCalculator) -> Self {
        Self { calculator }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(FlingCalculator::with_density(density))
    }

    /// Builds the concrete trajectory without boxing it.
    pub fn trajectory(&self, start: f32, velocity: f32, min: f32, max: f32) -> SplineTrajectory {
        let start = start.round();
        let travel = self.calculator.distance(velocity) * velocity.signum();
        let final_position = (start + travel.round()).clamp(min, max);
        let duration_nanos = self.calculator.duration_ms(velocity) * 1_000_000;

        log::debug!(
            "fling: start={start}, velocity={velocity}, final={final_position}, duration={}ms",
            duration_nanos / 1_000_000
        );

        SplineTrajectory {
            start,
            final_position,
            min,
            max,
            duration_nanos,
            start_time_nanos: None,
        }
    }
}

impl Flinger for SplineFlinger {
    fn start_fling(
        &self,
        start: f32,
        velocity: f32,
        min: f32,
        max: f32,
    ) -> Box<dyn FlingTrajectory> {
        Box::new(self.trajectory(start, velocity, min, max))
    }
}

/// Trajectory produced by [`SplineFlinger`].
#[derive(Debug, Clone)]
pub struct SplineTrajectory {
    start: f32,
    final_position: f32,
    min: f32,
    max: f32,
    duration_nanos: u64,
    start_time_nanos: Option<u64>,
}

impl SplineTrajectory {
    pub fn duration_nanos(&self) -> u64 {
        self.duration_nanos
    }
}

impl FlingTrajectory for SplineTrajectory {
    fn step(&mut self, frame_time_nanos: u64) -> FlingFrame {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start_time);

        if elapsed >= self.duration_nanos {
            return FlingFrame {
                position: self.final_position,
                finished: true,
            };
        }

        let fraction = elapsed as f32 / self.duration_nanos as f32;
        let coefficient = spline::sample(fraction).distance_coefficient;
        let position = (self.start + (coefficient * (self.final_position - self.start)).round())
            .clamp(self.min, self.max);

        FlingFrame {
            position,
            finished: position == self.final_position,
        }
    }

    fn final_position(&self) -> f32 {
        self.final_position
    }
}

#[cfg(test)]
#[path = "tests/fling_tests.rs"]
mod tests;
