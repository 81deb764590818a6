//! Runtime layer that consumes kernel effects.
//!
//! The kernel is pure and produces effects. The runtime owns a tracker, runs
//! each throw through [`apply_throw`], and hands the resulting effects to an
//! [`EffectSink`].
//!
//! ## Example
//!
//! ```
//! use tenpin_kernel::{RecordingSink, Runtime, Throw};
//!
//! let mut runtime = Runtime::new(RecordingSink::default());
//! runtime.record(Throw::new(7));
//! runtime.record(Throw::new(3));
//!
//! assert_eq!(runtime.tracker().score(), 10);
//! assert_eq!(runtime.sink().effects().len(), 3);
//! ```

use crate::command::Throw;
use crate::effects::Effect;
use crate::kernel::apply_throw;
use crate::state::ScoreTracker;

/// Destination for effects produced by the kernel.
pub trait EffectSink {
    fn apply(&mut self, effect: &Effect);
}

impl<S: EffectSink + ?Sized> EffectSink for &mut S {
    fn apply(&mut self, effect: &Effect) {
        (**self).apply(effect);
    }
}

/// Sink that emits every effect as a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EffectSink for TracingSink {
    fn apply(&mut self, effect: &Effect) {
        match *effect {
            Effect::PointsAwarded {
                throw_number,
                pins,
                multiplier,
                points,
            } => {
                tracing::debug!(
                    throw_number,
                    pins,
                    multiplier = multiplier.factor(),
                    points,
                    "points awarded"
                );
            }
            Effect::BonusArmed { throw_number } => {
                tracing::info!(throw_number, "bonus pair completed, next throw doubled");
            }
        }
    }
}

/// Sink that keeps every effect in memory, in arrival order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    effects: Vec<Effect>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded effects.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Takes the recorded effects, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

impl EffectSink for RecordingSink {
    fn apply(&mut self, effect: &Effect) {
        self.effects.push(*effect);
    }
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSink;

impl EffectSink for NoOpSink {
    fn apply(&mut self, _effect: &Effect) {}
}

/// Runtime that scores throws and forwards effects to a sink.
///
/// Generic over the sink so the same game can be logged in production and
/// recorded in tests.
#[derive(Debug, Default)]
pub struct Runtime<S: EffectSink> {
    tracker: ScoreTracker,
    sink: S,
}

impl<S: EffectSink> Runtime<S> {
    /// Creates a runtime around a fresh tracker.
    pub fn new(sink: S) -> Self {
        Self::with_tracker(ScoreTracker::new(), sink)
    }

    /// Creates a runtime that resumes an existing game.
    pub fn with_tracker(tracker: ScoreTracker, sink: S) -> Self {
        Self { tracker, sink }
    }

    /// Records one throw and forwards its effects.
    pub fn record(&mut self, throw: Throw) {
        let (new_state, effects) = apply_throw(self.tracker, throw);
        for effect in &effects {
            self.sink.apply(effect);
        }
        self.tracker = new_state;
    }

    /// Records every throw in order.
    pub fn record_all(&mut self, throws: impl IntoIterator<Item = Throw>) {
        for throw in throws {
            self.record(throw);
        }
    }

    pub fn tracker(&self) -> &ScoreTracker {
        &self.tracker
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Splits the runtime into the final tracker and the sink.
    pub fn into_parts(self) -> (ScoreTracker, S) {
        (self.tracker, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Multiplier;

    #[test]
    fn runtime_matches_direct_recording() {
        let throws = [5, 5, 3, 4, 6, 4, 2];

        let mut direct = ScoreTracker::new();
        for pins in throws {
            direct.record_throw(pins);
        }

        let mut runtime = Runtime::new(NoOpSink);
        runtime.record_all(throws.map(Throw::new));

        assert_eq!(*runtime.tracker(), direct);
    }

    #[test]
    fn recording_sink_sees_effects_in_order() {
        let mut runtime = Runtime::new(RecordingSink::new());
        runtime.record_all([Throw::new(5), Throw::new(5), Throw::new(3)]);

        let effects = runtime.sink_mut().drain();
        assert_eq!(
            effects,
            vec![
                Effect::PointsAwarded {
                    throw_number: 1,
                    pins: 5,
                    multiplier: Multiplier::Single,
                    points: 5,
                },
                Effect::PointsAwarded {
                    throw_number: 2,
                    pins: 5,
                    multiplier: Multiplier::Single,
                    points: 5,
                },
                Effect::BonusArmed { throw_number: 2 },
                Effect::PointsAwarded {
                    throw_number: 3,
                    pins: 3,
                    multiplier: Multiplier::Double,
                    points: 6,
                },
            ]
        );
        assert!(runtime.sink().effects().is_empty());
    }

    #[test]
    fn borrowed_sink_keeps_effects_for_caller() {
        let mut sink = RecordingSink::new();
        {
            let mut runtime = Runtime::new(&mut sink);
            runtime.record(Throw::new(9));
        }
        assert_eq!(sink.effects().len(), 1);
    }

    #[test]
    fn resumed_runtime_continues_from_tracker() {
        let mut tracker = ScoreTracker::new();
        tracker.record_throw(4);
        tracker.record_throw(6);

        let mut runtime = Runtime::with_tracker(tracker, TracingSink);
        runtime.record(Throw::new(2));

        let (tracker, _) = runtime.into_parts();
        assert_eq!(tracker.score(), 14);
        assert_eq!(tracker.throw_count(), 3);
    }
}
