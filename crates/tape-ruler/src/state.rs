//! Owned state of one ruler instance.

use crate::config::RulerConfig;
use crate::error::{Result, RulerError};
use crate::mapper;

/// Selection and quantization state.
///
/// Outside a drag, `current_distance` is the pixel offset of `current_value`.
/// While dragging or flinging the distance runs ahead and the value trails it,
/// truncated to the lower tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerState {
    pub(crate) current_value: i32,
    pub(crate) current_distance: f32,
    pub(crate) max_value: i32,
    pub(crate) value_unit: i32,
    pub(crate) value_per_count: i32,
    /// Pixels per `value_unit`.
    pub(crate) unit_gap: f32,
    pub(crate) balance_value: i32,
}

impl RulerState {
    /// Builds state from `config` with `unit_gap` already converted to pixels.
    pub fn new(config: &RulerConfig, unit_gap: f32) -> Result<Self> {
        config.validate()?;
        if !unit_gap.is_finite() || unit_gap <= 0.0 {
            return Err(RulerError::InvalidUnitGap { value: unit_gap });
        }
        let mut state = Self {
            current_value: config.current_value,
            current_distance: 0.0,
            max_value: config.max_value,
            value_unit: config.value_unit,
            value_per_count: config.value_per_count,
            unit_gap,
            balance_value: config.balance_value,
        };
        state.current_distance = mapper::value_to_distance(&state, state.current_value);
        Ok(state)
    }

    pub fn current_value(&self) -> i32 {
        self.current_value
    }

    pub fn current_distance(&self) -> f32 {
        self.current_distance
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    pub fn value_unit(&self) -> i32 {
        self.value_unit
    }

    pub fn value_per_count(&self) -> i32 {
        self.value_per_count
    }

    pub fn unit_gap(&self) -> f32 {
        self.unit_gap
    }

    pub fn balance_value(&self) -> i32 {
        self.balance_value
    }

    /// Value span between two labelled major ticks.
    pub fn major_step(&self) -> i32 {
        self.value_per_count.saturating_mul(self.value_unit)
    }

    /// Moves to `distance`, clamped to the scroll range, and recomputes the
    /// value by truncating to the lower tick. Used for every drag move and
    /// every in-flight fling frame.
    pub fn scroll_to(&mut self, geometry: &ViewportGeometry, distance: f32) -> Result<i32> {
        let distance = mapper::clamp_distance(geometry, distance)?;
        self.current_value = mapper::distance_to_value(self, distance)?;
        self.current_distance = distance;
        log::trace!(
            "scroll_to: range={}, distance={}, value={}",
            geometry.range_distance,
            self.current_distance,
            self.current_value
        );
        Ok(self.current_value)
    }

    /// Snaps the current distance onto the nearest tick.
    pub fn settle(&mut self) -> Result<i32> {
        let snapped = mapper::snap_distance_to_nearest_tick(self, self.current_distance)?;
        self.current_value = snapped.value;
        self.current_distance = snapped.distance;
        log::debug!(
            "settle: value={}, distance={}",
            self.current_value,
            self.current_distance
        );
        Ok(self.current_value)
    }
}

/// Viewport-derived quantities, recomputed whenever width or units change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewportGeometry {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) half_width: i32,
    /// Largest scroll distance, reached at `max_value`.
    pub(crate) range_distance: f32,
    /// Value span visible across one viewport width.
    pub(crate) width_range_value: i32,
}

impl ViewportGeometry {
    pub fn new(state: &RulerState, width: i32, height: i32) -> Self {
        let mut geometry = Self::default();
        geometry.resize(state, width, height);
        geometry
    }

    pub(crate) fn resize(&mut self, state: &RulerState, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
        self.half_width = self.width >> 1;
        self.recompute(state);
    }

    pub(crate) fn recompute(&mut self, state: &RulerState) {
        self.range_distance = mapper::range_distance(state);
        self.width_range_value = mapper::width_range_value(state, self.width);
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn half_width(&self) -> i32 {
        self.half_width
    }

    pub fn range_distance(&self) -> f32 {
        self.range_distance
    }

    pub fn width_range_value(&self) -> i32 {
        self.width_range_value
    }
}
