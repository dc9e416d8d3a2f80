//! Simulation time model.
//!
//! Unlike a fixed-tick simulation, KMC time is continuous: each accepted
//! event advances the clock by an exponentially distributed waiting time
//!
//!   dt = -ln(u) / R_total,   u ~ U(0, 1)
//!
//! so the clock holds a physical `f64` seconds value plus a step counter.

use std::fmt;

/// Elapsed physical time and accepted-step count.
///
/// Starts at zero and never decreases.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimClock {
    elapsed: f64,
    steps:   u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one accepted step that took `dt` seconds.
    ///
    /// # Panics
    /// Panics in debug mode if `dt` is not a positive finite number.
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        debug_assert!(dt.is_finite() && dt > 0.0, "non-positive waiting time {dt}");
        self.elapsed += dt;
        self.steps += 1;
    }

    /// Elapsed simulated seconds.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of accepted steps.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Draw-to-waiting-time conversion used by the stepper.
    #[inline]
    pub fn waiting_time(u_time: f64, total_rate: f64) -> f64 {
        -u_time.ln() / total_rate
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} (t = {:.6e} s)", self.steps, self.elapsed)
    }
}
