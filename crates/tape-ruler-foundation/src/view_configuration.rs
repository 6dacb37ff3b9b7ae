//! Gesture thresholds shared by touch-driven controls.
//!
//! Values are stored in density-independent pixels and scaled on read, the
//! same way the host platform hands out its "scaled" configuration.

/// Touch slop in dp. Movement below this is treated as finger jitter.
pub const TOUCH_SLOP_DP: f32 = 8.0;

/// Release velocity in dp/s below which a drag settles instead of flinging.
pub const MIN_FLING_VELOCITY_DP: f32 = 50.0;

/// Release velocity cap in dp/s.
pub const MAX_FLING_VELOCITY_DP: f32 = 8_000.0;

/// Default scroll friction.
pub const SCROLL_FRICTION: f32 = 0.015;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfiguration {
    /// Display scale factor; 1.0 is 160 dpi.
    pub density: f32,
    pub touch_slop_dp: f32,
    pub min_fling_velocity_dp: f32,
    pub max_fling_velocity_dp: f32,
    pub scroll_friction: f32,
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self {
            density: 1.0,
            touch_slop_dp: TOUCH_SLOP_DP,
            min_fling_velocity_dp: MIN_FLING_VELOCITY_DP,
            max_fling_velocity_dp: MAX_FLING_VELOCITY_DP,
            scroll_friction: SCROLL_FRICTION,
        }
    }
}

impl ViewConfiguration {
    pub fn with_density(density: f32) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    /// Converts dp to whole pixels, rounding to nearest.
    pub fn dp_to_px(&self, dp: f32) -> i32 {
        (dp * self.density + 0.5) as i32
    }

    pub fn scaled_touch_slop(&self) -> i32 {
        self.dp_to_px(self.touch_slop_dp)
    }

    pub fn scaled_minimum_fling_velocity(&self) -> i32 {
        self.dp_to_px(self.min_fling_velocity_dp)
    }

    pub fn scaled_maximum_fling_velocity(&self) -> i32 {
        self.dp_to_px(self.max_fling_velocity_dp)
    }
}
