//! Deterministic simulation RNG.
//!
//! A KMC run draws from exactly one stream: two uniforms per accepted step
//! (event selection, then waiting time), in that order.  Seeding the stream
//! from configuration makes the sequence of selected moves and clock
//! increments reproducible.

use rand::distributions::Open01;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.  Owned by the stepper; not shared across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A uniform draw from the open interval `(0, 1)`.
    ///
    /// Never returns exactly `0.0` (so `ln(u)` is finite) nor `1.0` (so the
    /// scaled roulette draw stays below the total rate).
    #[inline]
    pub fn open01(&mut self) -> f64 {
        self.0.sample(Open01)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
