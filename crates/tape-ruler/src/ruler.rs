//! The tape ruler control as seen by its host.

use std::rc::Rc;

use tape_ruler_animation::{FlingCalculator, Flinger, SplineFlinger};
use tape_ruler_foundation::{
    FrameScheduler, PointerEvent, PointerEventKind, VelocityTracker1D, ViewConfiguration,
};

use crate::animator::{AnimatorStep, FlingAnimator};
use crate::config::{validate_selection, RulerConfig};
use crate::error::{ensure_finite, Result, RulerError};
use crate::gesture::{GestureAction, GestureInterpreter, GesturePhase};
use crate::mapper;
use crate::state::{RulerState, ViewportGeometry};
use crate::ticks::{self, RulerCanvas, TickLayout};

/// Single subscriber for value changes. Called synchronously, possibly once
/// per pointer event or frame.
pub type ValueChangedListener = Box<dyn FnMut(i32)>;

/// Horizontal tape-measure value picker.
///
/// The host forwards pointer events and frame callbacks; the ruler updates its
/// value, notifies the listener and asks the host for redraws and frames
/// through its [`FrameScheduler`].
pub struct TapeRuler {
    state: RulerState,
    geometry: ViewportGeometry,
    gestures: GestureInterpreter,
    animator: FlingAnimator,
    velocity_tracker: VelocityTracker1D,
    view_configuration: ViewConfiguration,
    scheduler: Rc<dyn FrameScheduler>,
    listener: Option<ValueChangedListener>,
}

impl TapeRuler {
    pub fn new(
        config: RulerConfig,
        view_configuration: ViewConfiguration,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Result<Self> {
        let density = ensure_finite(view_configuration.density, "density")?;
        let state = RulerState::new(&config, config.unit_gap_dp * density)?;
        let geometry = ViewportGeometry::new(&state, 0, 0);
        let flinger = SplineFlinger::new(FlingCalculator::new(
            view_configuration.scroll_friction,
            density,
        ));

        Ok(Self {
            state,
            geometry,
            gestures: GestureInterpreter::new(&view_configuration),
            animator: FlingAnimator::new(Box::new(flinger)),
            velocity_tracker: VelocityTracker1D::new(),
            view_configuration,
            scheduler,
            listener: None,
        })
    }

    /// Replaces the deceleration model used for flings.
    pub fn with_flinger(mut self, flinger: Box<dyn Flinger>) -> Self {
        self.animator = FlingAnimator::new(flinger);
        self
    }

    pub fn set_on_value_changed(&mut self, listener: impl FnMut(i32) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_on_value_changed(&mut self) {
        self.listener = None;
    }

    pub fn value(&self) -> i32 {
        self.state.current_value
    }

    pub fn balance(&self) -> i32 {
        self.state.balance_value
    }

    pub fn state(&self) -> &RulerState {
        &self.state
    }

    pub fn geometry(&self) -> &ViewportGeometry {
        &self.geometry
    }

    pub fn view_configuration(&self) -> &ViewConfiguration {
        &self.view_configuration
    }

    pub fn current_distance(&self) -> f32 {
        self.state.current_distance
    }

    pub fn range_distance(&self) -> f32 {
        self.geometry.range_distance
    }

    pub fn width_range_value(&self) -> i32 {
        self.geometry.width_range_value
    }

    pub fn max_value(&self) -> i32 {
        self.state.max_value
    }

    pub fn value_unit(&self) -> i32 {
        self.state.value_unit
    }

    pub fn value_per_count(&self) -> i32 {
        self.state.value_per_count
    }

    pub fn unit_gap(&self) -> f32 {
        self.state.unit_gap
    }

    pub fn is_flinging(&self) -> bool {
        self.animator.is_running()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    /// Host layout pass: stores the measured size.
    pub fn on_size_changed(&mut self, width: i32, height: i32) {
        self.geometry.resize(&self.state, width, height);
        log::debug!(
            "size: {}x{}, width_range_value={}",
            self.geometry.width,
            self.geometry.height,
            self.geometry.width_range_value
        );
        self.scheduler.request_redraw();
    }

    /// Handles one pointer event, tracking velocity for the release.
    ///
    /// Always consumes the event.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Result<bool> {
        if !event.is_finite() {
            return Err(RulerError::NonFiniteInput {
                what: "pointer position",
            });
        }
        log::trace!("pointer: {:?} at ({}, {})", event.kind, event.x, event.y);

        if event.kind == PointerEventKind::Down {
            self.velocity_tracker.reset();
        }
        if event.kind != PointerEventKind::Cancel {
            self.velocity_tracker.add_data_point(event.time_ms, event.x);
        }

        let x = event.x as i32;
        let y = event.y as i32;
        match event.kind {
            PointerEventKind::Down => self.pointer_down(x, y),
            PointerEventKind::Move => self.pointer_move(x, y)?,
            PointerEventKind::Up => {
                let cap = self.gestures.max_fling_velocity() as f32;
                let velocity = self.velocity_tracker.calculate_velocity_with_max(cap);
                self.pointer_up(x, y, velocity)?;
            }
            PointerEventKind::Cancel => self.pointer_cancel(),
        }
        Ok(true)
    }

    pub fn pointer_down(&mut self, x: i32, y: i32) {
        let action = self.gestures.pointer_down(x, y);
        self.apply(action);
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) -> Result<()> {
        let action = self
            .gestures
            .pointer_move(&mut self.state, &self.geometry, x, y)?;
        self.apply(action);
        Ok(())
    }

    /// Ends the touch with an externally tracked horizontal velocity in px/s.
    pub fn pointer_up(&mut self, x: i32, y: i32, velocity_x: f32) -> Result<()> {
        let action = self.gestures.pointer_up(&mut self.state, x, y, velocity_x)?;
        self.apply(action);
        Ok(())
    }

    pub fn pointer_cancel(&mut self) {
        let action = self.gestures.pointer_cancel();
        self.apply(action);
    }

    fn apply(&mut self, action: GestureAction) {
        match action {
            GestureAction::Pressed | GestureAction::Cancelled => {
                self.animator.abort();
            }
            GestureAction::Dragged { value } | GestureAction::Settled { value } => {
                self.notify(value);
                self.scheduler.request_redraw();
            }
            GestureAction::Fling { start, velocity } => {
                self.animator
                    .start(start, velocity, 0.0, self.geometry.range_distance);
                self.scheduler.schedule_frame();
                self.scheduler.request_redraw();
            }
            GestureAction::Tapped | GestureAction::Ignored => {}
        }
    }

    /// Advances a running fling. Call once per frame the ruler scheduled.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> Result<()> {
        let step = self
            .animator
            .step(&mut self.state, &self.geometry, frame_time_nanos)?;
        if let Some(value) = step.value() {
            self.notify(value);
            self.scheduler.request_redraw();
        }
        if step.needs_next_frame() {
            self.scheduler.schedule_frame();
        } else if let AnimatorStep::Stopped { value } = step {
            log::debug!("fling stopped short of rest at value={value}");
        }
        Ok(())
    }

    /// Replaces range, selection, balance and units in one step.
    ///
    /// Fails without touching any state if `current_value` is outside
    /// `0..=max_value`, a unit is not positive or their product overflows, or
    /// the range holds more than [`MAX_TICKS`](crate::config::MAX_TICKS)
    /// ticks. On success a running fling is dropped without snapping and the
    /// listener sees the new value.
    pub fn reconfigure(
        &mut self,
        max_value: i32,
        current_value: i32,
        balance_value: i32,
        value_unit: i32,
        value_per_count: i32,
    ) -> Result<()> {
        if let Err(err) =
            validate_selection(max_value, current_value, value_unit, value_per_count)
        {
            log::warn!("reconfigure rejected: {err}");
            return Err(err);
        }

        self.animator.abort();
        self.state.max_value = max_value;
        self.state.current_value = current_value;
        self.state.balance_value = balance_value;
        self.state.value_unit = value_unit;
        self.state.value_per_count = value_per_count;
        self.state.current_distance = mapper::value_to_distance(&self.state, current_value);
        self.geometry.recompute(&self.state);

        self.notify(current_value);
        self.scheduler.request_redraw();
        Ok(())
    }

    /// Moves the balance marker to the tick at or below `value`.
    ///
    /// Fails if that tick does not fit in an `i32`.
    pub fn set_balance(&mut self, value: f32) -> Result<()> {
        let value = ensure_finite(value, "balance")?;
        let unit = self.state.value_unit;
        let ticks = (value / unit as f32).floor();
        if ticks < i32::MIN as f32 || ticks >= i32::MAX as f32 {
            return Err(RulerError::Overflow { what: "balance" });
        }
        self.state.balance_value = (ticks as i32)
            .checked_mul(unit)
            .ok_or(RulerError::Overflow { what: "balance" })?;
        self.scheduler.request_redraw();
        Ok(())
    }

    pub fn tick_layout(&self) -> TickLayout {
        ticks::layout_ticks(&self.state, &self.geometry)
    }

    pub fn draw(&self, canvas: &mut dyn RulerCanvas) {
        ticks::draw(&self.tick_layout(), canvas);
    }

    fn notify(&mut self, value: i32) {
        if let Some(listener) = self.listener.as_mut() {
            listener(value);
        }
    }
}

impl std::fmt::Debug for TapeRuler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TapeRuler")
            .field("state", &self.state)
            .field("geometry", &self.geometry)
            .field("phase", &self.gestures.phase())
            .field("animator", &self.animator)
            .finish()
    }
}
