//! Pointer gesture interpretation.
//!
//! A touch sequence starts pending. It becomes a drag once the pointer has
//! travelled past the touch slop horizontally and the latest movement is at
//! least as horizontal as it is vertical; that decision holds until release.
//! On release a drag either settles onto the nearest tick or hands a fling to
//! the animator, depending on the release velocity.

use tape_ruler_foundation::ViewConfiguration;

use crate::error::{ensure_finite, Result};
use crate::state::{RulerState, ViewportGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    /// Pointer is down but has not been classified as a drag yet.
    PendingDrag,
    Dragging,
}

/// Per-touch bookkeeping, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureSession {
    pub down_x: i32,
    pub down_y: i32,
    pub last_x: i32,
    pub last_y: i32,
    pub is_moving: bool,
}

impl GestureSession {
    fn new(x: i32, y: i32) -> Self {
        Self {
            down_x: x,
            down_y: y,
            last_x: x,
            last_y: y,
            is_moving: false,
        }
    }
}

/// What the host-facing control has to do after an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// New touch; a running fling must stop where it is.
    Pressed,
    /// Nothing changed.
    Ignored,
    /// The ruler moved and `value` is the truncated value.
    Dragged { value: i32 },
    /// The drag ended slowly and snapped to `value`.
    Settled { value: i32 },
    /// The drag ended fast; animate from `start` with `velocity` in px/s of
    /// scroll distance.
    Fling { start: f32, velocity: f32 },
    /// Released without ever dragging.
    Tapped,
    /// The touch was cancelled; a running fling must stop without snapping.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    session: Option<GestureSession>,
    touch_slop: i32,
    min_fling_velocity: i32,
    max_fling_velocity: i32,
}

impl GestureInterpreter {
    pub fn new(view_configuration: &ViewConfiguration) -> Self {
        Self {
            session: None,
            touch_slop: view_configuration.scaled_touch_slop(),
            min_fling_velocity: view_configuration.scaled_minimum_fling_velocity(),
            max_fling_velocity: view_configuration.scaled_maximum_fling_velocity(),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        match self.session {
            None => GesturePhase::Idle,
            Some(session) if session.is_moving => GesturePhase::Dragging,
            Some(_) => GesturePhase::PendingDrag,
        }
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn touch_slop(&self) -> i32 {
        self.touch_slop
    }

    pub fn min_fling_velocity(&self) -> i32 {
        self.min_fling_velocity
    }

    pub fn max_fling_velocity(&self) -> i32 {
        self.max_fling_velocity
    }

    pub fn pointer_down(&mut self, x: i32, y: i32) -> GestureAction {
        self.session = Some(GestureSession::new(x, y));
        GestureAction::Pressed
    }

    pub fn pointer_move(
        &mut self,
        state: &mut RulerState,
        geometry: &ViewportGeometry,
        x: i32,
        y: i32,
    ) -> Result<GestureAction> {
        let Some(session) = self.session.as_mut() else {
            return Ok(GestureAction::Ignored);
        };

        let dx = x.saturating_sub(session.last_x);
        let dy = y.saturating_sub(session.last_y);
        session.last_x = x;
        session.last_y = y;

        if !session.is_moving {
            let travel = x.saturating_sub(session.down_x).saturating_abs();
            if travel <= self.touch_slop || dx.saturating_abs() < dy.saturating_abs() {
                return Ok(GestureAction::Ignored);
            }
            session.is_moving = true;
            log::trace!("drag started at x={x}");
        }

        let value = state.scroll_to(geometry, state.current_distance - dx as f32)?;
        Ok(GestureAction::Dragged { value })
    }

    /// Ends the touch. `velocity_x` is the horizontal finger velocity in px/s.
    pub fn pointer_up(
        &mut self,
        state: &mut RulerState,
        _x: i32,
        _y: i32,
        velocity_x: f32,
    ) -> Result<GestureAction> {
        let velocity_x = ensure_finite(velocity_x, "release velocity")?;
        let Some(session) = self.session.take() else {
            return Ok(GestureAction::Ignored);
        };
        if !session.is_moving {
            return Ok(GestureAction::Tapped);
        }

        let cap = self.max_fling_velocity as f32;
        let velocity = velocity_x.clamp(-cap, cap) as i32;
        log::debug!("up: velocity_x={velocity}");

        if velocity.abs() < self.min_fling_velocity {
            let value = state.settle()?;
            Ok(GestureAction::Settled { value })
        } else {
            // Finger moving right scrolls toward smaller distances.
            Ok(GestureAction::Fling {
                start: state.current_distance,
                velocity: -(velocity as f32),
            })
        }
    }

    pub fn pointer_cancel(&mut self) -> GestureAction {
        self.session = None;
        GestureAction::Cancelled
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
