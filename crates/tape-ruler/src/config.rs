//! Value range and quantization settings.

use crate::error::{Result, RulerError};

/// Default largest selectable value.
pub const DEFAULT_MAX_VALUE: i32 = 150;
/// Default ticks per labelled major mark.
pub const DEFAULT_VALUE_PER_COUNT: i32 = 10;
/// Default spacing between adjacent ticks, in dp.
pub const DEFAULT_UNIT_GAP_DP: f32 = 6.0;
/// Largest tick count whose distances an `f32` still represents exactly.
pub const MAX_TICKS: i32 = 1 << 24;

/// Settings accepted by [`TapeRuler::new`](crate::TapeRuler::new) and
/// [`TapeRuler::reconfigure`](crate::TapeRuler::reconfigure).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerConfig {
    pub max_value: i32,
    pub current_value: i32,
    /// Secondary marker, independent of the selection.
    pub balance_value: i32,
    /// Value step between adjacent ticks.
    pub value_unit: i32,
    /// Ticks per major mark.
    pub value_per_count: i32,
    pub unit_gap_dp: f32,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            max_value: DEFAULT_MAX_VALUE,
            current_value: 0,
            balance_value: 0,
            value_unit: 1,
            value_per_count: DEFAULT_VALUE_PER_COUNT,
            unit_gap_dp: DEFAULT_UNIT_GAP_DP,
        }
    }
}

impl RulerConfig {
    pub fn with_range(mut self, max_value: i32, current_value: i32) -> Self {
        self.max_value = max_value;
        self.current_value = current_value;
        self
    }

    pub fn with_units(mut self, value_unit: i32, value_per_count: i32) -> Self {
        self.value_unit = value_unit;
        self.value_per_count = value_per_count;
        self
    }

    pub fn with_unit_gap_dp(mut self, unit_gap_dp: f32) -> Self {
        self.unit_gap_dp = unit_gap_dp;
        self
    }

    pub fn with_balance(mut self, balance_value: i32) -> Self {
        self.balance_value = balance_value;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_selection(
            self.max_value,
            self.current_value,
            self.value_unit,
            self.value_per_count,
        )?;
        if !self.unit_gap_dp.is_finite() || self.unit_gap_dp <= 0.0 {
            return Err(RulerError::InvalidUnitGap {
                value: self.unit_gap_dp,
            });
        }
        Ok(())
    }
}

/// Checks the range first, then the units, then the tick count.
pub(crate) fn validate_selection(
    max_value: i32,
    current_value: i32,
    value_unit: i32,
    value_per_count: i32,
) -> Result<()> {
    if current_value < 0 || current_value > max_value {
        return Err(RulerError::ValueOutOfRange {
            value: current_value,
            max: max_value,
        });
    }
    validate_units(value_unit, value_per_count)?;
    if max_value / value_unit > MAX_TICKS {
        return Err(RulerError::RangeTooLarge {
            max_value,
            value_unit,
            limit: MAX_TICKS,
        });
    }
    Ok(())
}

fn validate_units(value_unit: i32, value_per_count: i32) -> Result<()> {
    if value_unit < 1 {
        return Err(RulerError::InvalidUnit {
            name: "value_unit",
            value: value_unit,
        });
    }
    if value_per_count < 1 || value_unit.checked_mul(value_per_count).is_none() {
        return Err(RulerError::InvalidUnit {
            name: "value_per_count",
            value: value_per_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(RulerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn current_value_must_be_in_range() {
        let config = RulerConfig::default().with_range(100, 150);
        assert_eq!(
            config.validate(),
            Err(RulerError::ValueOutOfRange { value: 150, max: 100 })
        );
        let config = RulerConfig::default().with_range(100, -1);
        assert!(matches!(
            config.validate(),
            Err(RulerError::ValueOutOfRange { value: -1, .. })
        ));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(RulerConfig::default().with_range(100, 0).validate().is_ok());
        assert!(RulerConfig::default().with_range(100, 100).validate().is_ok());
    }

    #[test]
    fn zero_units_rejected() {
        let config = RulerConfig::default().with_units(0, 10);
        assert!(matches!(
            config.validate(),
            Err(RulerError::InvalidUnit { name: "value_unit", .. })
        ));
        let config = RulerConfig::default().with_units(1, 0);
        assert!(matches!(
            config.validate(),
            Err(RulerError::InvalidUnit { name: "value_per_count", .. })
        ));
        let config = RulerConfig::default().with_unit_gap_dp(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(RulerError::InvalidUnitGap { .. })
        ));
    }

    #[test]
    fn major_step_must_fit_in_i32() {
        let config = RulerConfig::default().with_units(1 << 16, 1 << 16);
        assert_eq!(
            config.validate(),
            Err(RulerError::InvalidUnit {
                name: "value_per_count",
                value: 1 << 16,
            })
        );
        let config = RulerConfig::default().with_units(i32::MAX, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn tick_count_is_bounded() {
        let config = RulerConfig::default().with_range(i32::MAX, 0);
        assert_eq!(
            config.validate(),
            Err(RulerError::RangeTooLarge {
                max_value: i32::MAX,
                value_unit: 1,
                limit: MAX_TICKS,
            })
        );
        let config = RulerConfig::default().with_range(MAX_TICKS, 0);
        assert!(config.validate().is_ok());
        let config = RulerConfig::default()
            .with_range(i32::MAX, 0)
            .with_units(256, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn large_unit_survives_in_error() {
        let err = validate_units(-2_147_483_000, 10).unwrap_err();
        assert_eq!(err.to_string(), "invalid value_unit: -2147483000");
    }
}
