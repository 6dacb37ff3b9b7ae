//! Frame-driven fling progression.
//!
//! The animator owns at most one trajectory. The host calls [`FlingAnimator::step`]
//! once per frame; intermediate frames go through the same clamp and truncate
//! path as a drag, and only the frame that lands on the trajectory's rest
//! position snaps to the nearest tick.

use tape_ruler_animation::{FlingTrajectory, Flinger};

use crate::error::Result;
use crate::state::{RulerState, ViewportGeometry};

/// Outcome of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorStep {
    /// No fling is running.
    Idle,
    /// The fling moved; another frame is needed.
    InFlight { value: i32 },
    /// The fling came to rest and snapped to `value`.
    Settled { value: i32 },
    /// The trajectory ended away from its rest position. The value was
    /// updated without snapping and no further frame is needed.
    Stopped { value: i32 },
}

impl AnimatorStep {
    pub fn value(&self) -> Option<i32> {
        match *self {
            AnimatorStep::Idle => None,
            AnimatorStep::InFlight { value }
            | AnimatorStep::Settled { value }
            | AnimatorStep::Stopped { value } => Some(value),
        }
    }

    pub fn needs_next_frame(&self) -> bool {
        matches!(self, AnimatorStep::InFlight { .. })
    }
}

pub struct FlingAnimator {
    flinger: Box<dyn Flinger>,
    trajectory: Option<Box<dyn FlingTrajectory>>,
}

impl FlingAnimator {
    pub fn new(flinger: Box<dyn Flinger>) -> Self {
        Self {
            flinger,
            trajectory: None,
        }
    }

    /// Starts a fling, replacing any running one.
    pub fn start(&mut self, start: f32, velocity: f32, min: f32, max: f32) {
        self.trajectory = Some(self.flinger.start_fling(start, velocity, min, max));
    }

    /// Stops immediately without snapping. Returns whether a fling was running.
    pub fn abort(&mut self) -> bool {
        let was_running = self.trajectory.take().is_some();
        if was_running {
            log::debug!("fling aborted");
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.trajectory.is_some()
    }

    pub fn step(
        &mut self,
        state: &mut RulerState,
        geometry: &ViewportGeometry,
        frame_time_nanos: u64,
    ) -> Result<AnimatorStep> {
        let Some(trajectory) = self.trajectory.as_mut() else {
            return Ok(AnimatorStep::Idle);
        };

        let frame = trajectory.step(frame_time_nanos);
        let at_rest = frame.position == trajectory.final_position();

        if frame.finished {
            self.trajectory = None;
        }

        if frame.finished && at_rest {
            state.current_distance = frame.position;
            let value = state.settle()?;
            log::debug!("fling finished at value={value}");
            return Ok(AnimatorStep::Settled { value });
        }

        let value = state.scroll_to(geometry, frame.position)?;
        if frame.finished {
            Ok(AnimatorStep::Stopped { value })
        } else {
            Ok(AnimatorStep::InFlight { value })
        }
    }
}

impl std::fmt::Debug for FlingAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlingAnimator")
            .field("running", &self.is_running())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
