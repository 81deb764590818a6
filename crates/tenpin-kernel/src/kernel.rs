//! The kernel - pure functional core of `Tenpin`.
//!
//! The kernel applies throws to produce a new tracker and effects. It is
//! completely pure: no IO, no clocks, no randomness. The same throws always
//! produce the same score.
//!
//! # Bonus rule
//!
//! After an even-numbered throw (2nd, 4th, ...), if that throw and the one
//! remembered before it sum to exactly 10, the next throw is doubled and the
//! memory is cleared, so the doubled throw cannot pair with a stale value.
//! Parity is by throw number only; there are no frames.
//!
//! # Example
//!
//! ```
//! use tenpin_kernel::{Effect, ScoreTracker, Throw, apply_throw};
//!
//! let state = ScoreTracker::new();
//! let (state, _) = apply_throw(state, Throw::new(6));
//! let (state, effects) = apply_throw(state, Throw::new(4));
//!
//! assert!(effects.contains(&Effect::BonusArmed { throw_number: 2 }));
//! assert!(state.is_bonus_armed());
//! ```

use crate::command::Throw;
use crate::effects::Effect;
use crate::state::{Multiplier, ScoreTracker};

/// Pins a pair must add up to for the bonus.
pub const BONUS_PAIR_SUM: i64 = 10;

/// Applies one throw, producing the next state and its effects.
///
/// Takes the state by value and returns the new one. Always yields a
/// `PointsAwarded` effect, followed by `BonusArmed` when the throw completes
/// a bonus pair.
pub fn apply_throw(state: ScoreTracker, throw: Throw) -> (ScoreTracker, Vec<Effect>) {
    let mut effects = Vec::with_capacity(2);

    let (new_state, bonus) = step(state, throw);
    let throw_number = new_state.throw_count();

    effects.push(Effect::PointsAwarded {
        throw_number,
        pins: throw.pins(),
        multiplier: state.multiplier(),
        points: state.multiplier().apply(throw.pins()),
    });

    if bonus {
        effects.push(Effect::BonusArmed { throw_number });
    }

    // Postcondition: one or two effects, points always first
    debug_assert!(matches!(effects[0], Effect::PointsAwarded { .. }));
    debug_assert!(effects.len() == 1 + usize::from(bonus));

    (new_state, effects)
}

/// Applies a sequence of throws in order.
///
/// Effects from every throw are concatenated in throw order.
pub fn apply_throws(
    state: ScoreTracker,
    throws: impl IntoIterator<Item = Throw>,
) -> (ScoreTracker, Vec<Effect>) {
    let mut all_effects = Vec::new();
    let mut current = state;

    for throw in throws {
        let (next, effects) = apply_throw(current, throw);
        all_effects.extend(effects);
        current = next;
    }

    (current, all_effects)
}

/// The transition itself. Returns the next state and whether the throw
/// completed a bonus pair.
pub(crate) fn step(state: ScoreTracker, throw: Throw) -> (ScoreTracker, bool) {
    let pins = throw.pins();
    let throw_number = state.throw_count().saturating_add(1);
    let points = state.multiplier().apply(pins);

    let bonus = throw_number.is_multiple_of(2)
        && i64::from(state.previous_throw()) + i64::from(pins) == BONUS_PAIR_SUM;

    let new_state = if bonus {
        state.with_throw(points, 0, Multiplier::Double)
    } else {
        state.with_throw(points, pins, Multiplier::Single)
    };

    // Postcondition: exactly one throw was counted
    debug_assert_eq!(new_state.throw_count(), throw_number);
    // Invariant: score never decreases for non-negative pins
    debug_assert!(pins < 0 || new_state.score() >= state.score());

    (new_state, bonus)
}
