//! Deterministic state hashing for the tracker.
//!
//! The hash lets two runs be compared without comparing every field: replaying
//! the same throws from a fresh tracker must land on the same hash.
//!
//! # Algorithm
//!
//! BLAKE3 over the four fields in a fixed order, little-endian:
//! score, throw count, previous throw, multiplier factor.

use blake3::Hasher;

use crate::state::ScoreTracker;

impl ScoreTracker {
    /// Computes a deterministic hash of the tracker.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_kernel::ScoreTracker;
    ///
    /// let mut a = ScoreTracker::new();
    /// let mut b = ScoreTracker::new();
    /// a.record_throw(4);
    /// b.record_throw(4);
    ///
    /// assert_eq!(a.compute_state_hash(), b.compute_state_hash());
    /// ```
    pub fn compute_state_hash(&self) -> [u8; 32] {
        let mut hasher = Hasher::new();

        hasher.update(&self.score().to_le_bytes());
        hasher.update(&self.throw_count().to_le_bytes());
        hasher.update(&self.previous_throw().to_le_bytes());
        hasher.update(&self.multiplier().factor().to_le_bytes());

        *hasher.finalize().as_bytes()
    }
}
