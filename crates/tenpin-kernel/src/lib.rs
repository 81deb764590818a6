//! # tenpin-kernel: Functional core of `Tenpin`
//!
//! The kernel is the pure, deterministic heart of the scorer. It receives
//! throws and produces a new tracker state plus effects describing what
//! happened.
//!
//! ## Key Principles
//!
//! - **No IO**: The kernel never touches disk, network, or any external resource
//! - **No hidden state**: Every game is an explicitly owned [`ScoreTracker`]
//! - **Never fails**: Any `i32` pin count is accepted by [`ScoreTracker::record_throw`]
//! - **Pure functions**: `apply_throw(state, throw) -> (state, effects)`
//!
//! ## Architecture
//!
//! - [`command`]: The [`Throw`] command
//! - [`effects`]: Effects for the runtime to consume (`PointsAwarded`, `BonusArmed`)
//! - [`state`]: The [`ScoreTracker`] and its [`Multiplier`]
//! - [`kernel`]: The `apply_throw` function that ties it all together
//! - [`policy`]: Opt-in pin validation
//! - [`runtime`]: Drains effects into pluggable sinks
//!
//! ## Example
//!
//! ```
//! use tenpin_kernel::ScoreTracker;
//!
//! let mut tracker = ScoreTracker::new();
//! tracker.record_throw(5);
//! tracker.record_throw(5);
//! tracker.record_throw(3);
//!
//! // The 3 follows a bonus pair and is doubled.
//! assert_eq!(tracker.score(), 16);
//! ```

pub mod command;
pub mod effects;
pub mod kernel;
pub mod policy;
pub mod runtime;
pub mod state;
pub mod state_hash;


#[cfg(test)]
mod tests_assertions;

// Re-export commonly used items
pub use command::Throw;
pub use effects::Effect;
pub use kernel::{apply_throw, apply_throws};
pub use policy::{KernelError, PinPolicy};
pub use runtime::{EffectSink, NoOpSink, RecordingSink, Runtime, TracingSink};
pub use state::{Multiplier, ScoreTracker};
