//! Conversions between values and scroll distances.
//!
//! Two quantization rules coexist on purpose. While the ruler moves, a
//! distance maps to the tick at or below it ([`distance_to_value`]), so the
//! reported value lags the finger. At rest the distance snaps to the nearest
//! tick ([`snap_distance_to_nearest_tick`]).

use crate::error::{ensure_finite, Result};
use crate::state::{RulerState, ViewportGeometry};

/// A tick-aligned value with its canonical distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapped {
    pub value: i32,
    pub distance: f32,
}

pub fn value_to_distance(state: &RulerState, value: i32) -> f32 {
    value as f32 / state.value_unit as f32 * state.unit_gap
}

/// Tick at or below `distance`.
pub fn distance_to_value(state: &RulerState, distance: f32) -> Result<i32> {
    let distance = ensure_finite(distance, "distance")?;
    Ok(((distance / state.unit_gap).floor() as i32).saturating_mul(state.value_unit))
}

/// Nearest tick to `distance`, clamped to `0..=max_value`.
pub fn snap_distance_to_nearest_tick(state: &RulerState, distance: f32) -> Result<Snapped> {
    let distance = ensure_finite(distance, "distance")?;
    let value = ((distance / state.unit_gap).round() as i32)
        .saturating_mul(state.value_unit)
        .clamp(0, state.max_value);
    Ok(Snapped {
        value,
        distance: value_to_distance(state, value),
    })
}

pub fn clamp_distance(geometry: &ViewportGeometry, distance: f32) -> Result<f32> {
    let distance = ensure_finite(distance, "distance")?;
    Ok(distance.max(0.0).min(geometry.range_distance))
}

/// Distance of the last whole tick below `max_value`, truncated to whole pixels.
pub(crate) fn range_distance(state: &RulerState) -> f32 {
    ((state.max_value / state.value_unit) as f32 * state.unit_gap).trunc()
}

pub(crate) fn width_range_value(state: &RulerState, width: i32) -> i32 {
    (width as f32 / state.unit_gap * state.value_unit as f32) as i32
}

#[cfg(test)]
#[path = "tests/mapper_tests.rs"]
mod tests;
