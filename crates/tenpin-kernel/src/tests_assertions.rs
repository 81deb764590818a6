//! Tests for the postconditions checked inside the kernel transition.
//!
//! `step` carries `debug_assert!`s for its postconditions; these tests drive
//! the same conditions through the public API so they hold in release builds
//! too.

#[cfg(test)]
mod tests {
    use crate::command::Throw;
    use crate::kernel::apply_throw;
    use crate::state::ScoreTracker;

    #[test]
    fn each_throw_advances_count_by_one() {
        // Tests assertion: exactly one throw counted per transition
        let mut state = ScoreTracker::new();

        for expected in 1..=25u64 {
            let (next, _) = apply_throw(state, Throw::new(5));
            assert_eq!(next.throw_count(), expected);
            state = next;
        }
    }

    #[test]
    fn transition_yields_one_or_two_effects() {
        // Tests assertion: PointsAwarded always, BonusArmed only on a pair
        let (state, effects) = apply_throw(ScoreTracker::new(), Throw::new(3));
        assert_eq!(effects.len(), 1);

        let (_, effects) = apply_throw(state, Throw::new(7));
        assert_eq!(effects.len(), 2);
    }

    #[test]
    fn score_never_decreases_for_valid_pins() {
        // Tests assertion: score monotonic when pins >= 0
        let mut state = ScoreTracker::new();

        for pins in [0, 10, 0, 5, 5, 10, 3, 7, 7, 3] {
            let (next, _) = apply_throw(state, Throw::new(pins));
            assert!(next.score() >= state.score(), "score must never decrease");
            state = next;
        }
    }

    #[test]
    fn negative_pins_skip_monotonic_check() {
        // The monotonic postcondition is guarded on pins >= 0, so a negative
        // throw must not trip it.
        let (state, _) = apply_throw(ScoreTracker::new(), Throw::new(-4));
        assert_eq!(state.score(), -4);
    }

    // Summary of kernel postconditions (3 total):
    //
    // 1. step - throw count advances by exactly one
    // 2. step - score does not decrease for non-negative pins
    // 3. apply_throw - PointsAwarded first, BonusArmed only when a pair completes
}
