//! Tracker state.
//!
//! A [`ScoreTracker`] is one game in progress. It is plain data (`Copy`) and
//! owned by whoever is scoring the game; there is no process-wide state.
//! Transitions go through [`crate::kernel::apply_throw`], which takes the
//! state by value and returns the next one.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::command::Throw;
use crate::kernel::step;
use crate::policy::{KernelError, PinPolicy};

// ============================================================================
// Multiplier
// ============================================================================

/// Factor applied to the next throw's pins.
///
/// Only two values exist, so the `{1, 2}` invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Multiplier {
    #[default]
    Single,
    Double,
}

impl Multiplier {
    pub fn factor(self) -> i64 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
        }
    }

    /// Points a throw of `pins` is worth under this multiplier.
    pub fn apply(self, pins: i32) -> i64 {
        i64::from(pins) * self.factor()
    }
}

impl Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.factor())
    }
}

// ============================================================================
// Score Tracker
// ============================================================================

/// Accumulated score of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: i64,
    throw_count: u64,
    /// Pins of the last throw that did not complete a bonus pair.
    previous_throw: i32,
    multiplier: Multiplier,
}

impl ScoreTracker {
    /// Creates a tracker for a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one throw.
    ///
    /// The whole transition happens at once: the throw count advances, the
    /// pins are scored under the current multiplier, then the bonus rule
    /// decides the multiplier for the next throw. The pin count is not
    /// validated and this never fails.
    pub fn record_throw(&mut self, pins: i32) {
        let (next, _) = step(*self, Throw::new(pins));
        *self = next;
    }

    /// Checks `pins` against `policy`, then records it.
    ///
    /// On error the tracker is left untouched.
    pub fn try_record_throw(&mut self, pins: i32, policy: PinPolicy) -> Result<(), KernelError> {
        let throw = policy.check(pins)?;
        let (next, _) = step(*self, throw);
        *self = next;
        Ok(())
    }

    /// Returns the accumulated score.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Returns how many throws have been recorded.
    pub fn throw_count(&self) -> u64 {
        self.throw_count
    }

    /// Returns the pins remembered for pairing with the next throw.
    pub fn previous_throw(&self) -> i32 {
        self.previous_throw
    }

    /// Returns the multiplier the next throw will be scored with.
    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// Returns true if the next throw will be doubled.
    pub fn is_bonus_armed(&self) -> bool {
        self.multiplier == Multiplier::Double
    }

    /// Builds the state that follows a throw.
    ///
    /// Internal to the kernel - external code should use `apply_throw` or
    /// `record_throw`, which evaluate the bonus rule.
    pub(crate) fn with_throw(
        mut self,
        points: i64,
        previous_throw: i32,
        multiplier: Multiplier,
    ) -> Self {
        self.throw_count = self.throw_count.saturating_add(1);
        self.score = self.score.saturating_add(points);
        self.previous_throw = previous_throw;
        self.multiplier = multiplier;
        self
    }
}
