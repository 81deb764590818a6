//! Opt-in validation of pin counts.
//!
//! [`ScoreTracker::record_throw`](crate::ScoreTracker::record_throw) accepts
//! any `i32`. Callers that want out-of-range throws rejected check them with
//! [`PinPolicy::Strict`] first.

use serde::{Deserialize, Serialize};

use crate::command::Throw;

/// Most pins a single throw can knock down under the strict policy.
pub const MAX_PINS: i32 = 10;

/// How pin counts are checked before they reach the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PinPolicy {
    /// Every value is scored as-is.
    #[default]
    Permissive,
    /// Only `0..=10` is accepted.
    Strict,
}

impl PinPolicy {
    /// Validates `pins`, returning the throw to record.
    pub fn check(self, pins: i32) -> Result<Throw, KernelError> {
        if self == PinPolicy::Strict {
            if pins < 0 {
                return Err(KernelError::NegativePins(pins));
            }
            if pins > MAX_PINS {
                return Err(KernelError::TooManyPins(pins));
            }
        }
        Ok(Throw::new(pins))
    }
}

/// Errors raised when a pin count fails the strict policy.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    #[error("pin count {0} is negative")]
    NegativePins(i32),

    #[error("pin count {0} exceeds the 10 pins on the lane")]
    TooManyPins(i32),
}
