//! Effects produced by the kernel.
//!
//! Effects describe what a throw did to the tracker. The kernel is pure - it
//! produces effects but never acts on them; a [`crate::runtime::EffectSink`]
//! decides whether to log, record or ignore them.

use serde::{Deserialize, Serialize};

use crate::state::Multiplier;

/// An effect produced by [`super::kernel::apply_throw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Points were added to the score. Produced by every throw.
    PointsAwarded {
        /// 1-based position of the throw in the game.
        throw_number: u64,
        /// Pins knocked down by the throw.
        pins: i32,
        /// Multiplier that was in force for this throw.
        multiplier: Multiplier,
        /// `pins * multiplier`.
        points: i64,
    },

    /// The throw completed a bonus pair; the next throw is doubled.
    BonusArmed {
        /// 1-based position of the throw that completed the pair.
        throw_number: u64,
    },
}

impl Effect {
    /// Returns the throw this effect belongs to.
    pub fn throw_number(&self) -> u64 {
        match self {
            Effect::PointsAwarded { throw_number, .. } | Effect::BonusArmed { throw_number } => {
                *throw_number
            }
        }
    }
}
