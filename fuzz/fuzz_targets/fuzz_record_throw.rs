#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use tenpin_kernel::{Effect, PinPolicy, ScoreTracker, Throw, apply_throws};

#[derive(Debug, Arbitrary)]
struct Game {
    throws: Vec<i32>,
    strict: bool,
}

fuzz_target!(|game: Game| {
    let mut tracker = ScoreTracker::new();
    for &pins in &game.throws {
        tracker.record_throw(pins);
    }

    assert_eq!(tracker.throw_count(), game.throws.len() as u64);

    let (applied, effects) =
        apply_throws(ScoreTracker::new(), game.throws.iter().copied().map(Throw::new));
    assert_eq!(tracker, applied);
    assert_eq!(tracker.compute_state_hash(), applied.compute_state_hash());

    if tracker.is_bonus_armed() {
        assert_eq!(tracker.throw_count() % 2, 0);
        assert!(matches!(effects.last(), Some(Effect::BonusArmed { .. })));
    }

    if game.strict {
        let mut strict = ScoreTracker::new();
        for &pins in &game.throws {
            let before = strict;
            match strict.try_record_throw(pins, PinPolicy::Strict) {
                Ok(()) => assert!(strict.score() >= before.score()),
                Err(_) => assert_eq!(strict, before),
            }
        }
    }
});
