//! Commands accepted by the kernel.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A single throw: the number of pins knocked down.
///
/// The value is not validated. Negative or oversized counts flow through the
/// arithmetic unchanged; use [`crate::PinPolicy::Strict`] to reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Throw(i32);

impl Throw {
    /// A throw that knocked down nothing.
    pub const GUTTER: Throw = Throw(0);

    pub fn new(pins: i32) -> Self {
        Self(pins)
    }

    pub fn pins(self) -> i32 {
        self.0
    }
}

impl Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Throw {
    fn from(pins: i32) -> Self {
        Self(pins)
    }
}

impl From<Throw> for i32 {
    fn from(throw: Throw) -> Self {
        throw.0
    }
}
