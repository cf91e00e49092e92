//! Validated input amounts and unit-interval helpers.
//!
//! Gauges (health, armor, stamina) live in the closed interval `[0.0, 1.0]`.
//! The model operations accept raw `f32` and clamp their results, so any
//! finite input keeps the gauges in range. [`Amount`] is the checked form
//! used at the input boundary, where negative or non-finite values are
//! rejected before they reach the model.

use crate::error::{ErrorSeverity, GameError};

/// Lower bound of every gauge.
pub const GAUGE_MIN: f32 = 0.0;
/// Upper bound of every gauge.
pub const GAUGE_MAX: f32 = 1.0;

/// Clamps a gauge value into `[GAUGE_MIN, GAUGE_MAX]`.
#[inline]
pub fn clamp_gauge(value: f32) -> f32 {
    value.clamp(GAUGE_MIN, GAUGE_MAX)
}

/// A non-negative, finite amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f32", into = "f32"))]
pub struct Amount(f32);

impl Amount {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f32) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value < 0.0 {
            return Err(AmountError::Negative(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Amount {
    type Error = AmountError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f32 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

/// Reasons an input amount is rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum AmountError {
    #[error("amount must not be negative (got {0})")]
    Negative(f32),

    #[error("amount must be a finite number")]
    NotFinite,
}

impl GameError for AmountError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Negative(_) => "amount_negative",
            Self::NotFinite => "amount_not_finite",
        }
    }
}
