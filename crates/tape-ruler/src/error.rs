use thiserror::Error;

/// Errors surfaced at the control's public boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulerError {
    /// The requested value lies outside `0..=max`.
    #[error("value {value} is outside 0..={max}")]
    ValueOutOfRange { value: i32, max: i32 },

    /// A tick step is not positive, or `value_unit * value_per_count`
    /// does not fit in an `i32`.
    #[error("invalid {name}: {value}")]
    InvalidUnit { name: &'static str, value: i32 },

    /// The pixel spacing between ticks is zero, negative or not a number.
    #[error("unit gap must be a positive finite size, got {value}")]
    InvalidUnitGap { value: f32 },

    /// More ticks than an `f32` distance can address one by one.
    #[error("max_value {max_value} spans more than {limit} ticks of {value_unit}")]
    RangeTooLarge {
        max_value: i32,
        value_unit: i32,
        limit: i32,
    },

    #[error("{what} does not fit in an i32")]
    Overflow { what: &'static str },

    #[error("{what} is not a finite number")]
    NonFiniteInput { what: &'static str },
}

pub type Result<T> = std::result::Result<T, RulerError>;

/// Rejects NaN and infinities.
pub(crate) fn ensure_finite(value: f32, what: &'static str) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RulerError::NonFiniteInput { what })
    }
}
