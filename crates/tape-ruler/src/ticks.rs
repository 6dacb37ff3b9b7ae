//! Visible tick layout and the drawing surface it is handed to.
//!
//! Only geometry lives here. Colors, stroke widths and fonts belong to the
//! host's [`RulerCanvas`] implementation.

use smallvec::SmallVec;

use crate::state::{RulerState, ViewportGeometry};

/// Extra ticks laid out past each viewport edge.
const EDGE_TICKS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Plain gradation.
    Minor,
    /// Multiple of `value_per_count * value_unit`; drawn long and labelled.
    Major,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub value: i32,
    /// Horizontal position in control coordinates.
    pub x: f32,
    pub kind: TickKind,
    /// Whether this tick carries the balance marker.
    pub is_balance: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickLayout {
    pub ticks: SmallVec<[TickMark; 64]>,
    pub width: f32,
    /// The fixed center pointer.
    pub indicator_x: f32,
}

/// Receives draw calls for one frame of the ruler.
pub trait RulerCanvas {
    fn draw_baseline(&mut self, width: f32);
    fn draw_tick(&mut self, tick: &TickMark);
    fn draw_label(&mut self, value: i32, x: f32);
    fn draw_balance_marker(&mut self, x: f32);
    fn draw_indicator(&mut self, x: f32);
}

/// Ticks covering the viewport around the current distance, plus a margin.
pub fn layout_ticks(state: &RulerState, geometry: &ViewportGeometry) -> TickLayout {
    let unit = state.value_unit;
    let expand = unit.saturating_mul(EDGE_TICKS);
    let half_width = geometry.half_width as f32;

    let first = (((state.current_distance - half_width) / state.unit_gap) as i32)
        .saturating_mul(unit);
    let mut value = first.saturating_sub(expand).max(0);
    let last = value
        .saturating_add(expand)
        .saturating_add(geometry.width_range_value)
        .saturating_add(expand)
        .min(state.max_value);
    let mut x = half_width - (state.current_distance - (value / unit) as f32 * state.unit_gap);

    let major_step = state.major_step();
    let balance = state.balance_value / unit * unit;

    let mut ticks = SmallVec::new();
    while value <= last {
        ticks.push(TickMark {
            value,
            x,
            kind: if value % major_step == 0 {
                TickKind::Major
            } else {
                TickKind::Minor
            },
            is_balance: value == balance,
        });
        let Some(next) = value.checked_add(unit) else {
            break;
        };
        value = next;
        x += state.unit_gap;
    }

    log::trace!(
        "layout_ticks: distance={}, first={:?}, count={}",
        state.current_distance,
        ticks.first().map(|t: &TickMark| t.value),
        ticks.len()
    );

    TickLayout {
        ticks,
        width: geometry.width as f32,
        indicator_x: half_width,
    }
}

pub fn draw(layout: &TickLayout, canvas: &mut dyn RulerCanvas) {
    canvas.draw_baseline(layout.width);
    for tick in &layout.ticks {
        canvas.draw_tick(tick);
        if tick.kind == TickKind::Major {
            canvas.draw_label(tick.value, tick.x);
        }
        if tick.is_balance {
            canvas.draw_balance_marker(tick.x);
        }
    }
    canvas.draw_indicator(layout.indicator_x);
}
