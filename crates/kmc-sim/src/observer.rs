//! Simulation observer trait for rendering, logging, and data collection.

use kmc_core::SimClock;
use kmc_lattice::Lattice;

use crate::{MoveRecord, RunSummary, StallReason};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get read-only views; the
/// lattice can only change through the stepper.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step(&mut self, record: &MoveRecord, _lattice: &Lattice) {
///         if record.step % self.interval == 0 {
///             println!("step {}: t = {:.3e} s", record.step, record.elapsed);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every accepted step.
    fn on_step(&mut self, _record: &MoveRecord, _lattice: &Lattice) {}

    /// Called every `RunConfig::output_interval_steps` steps, and once for the
    /// initial state when a run starts from step 0.
    fn on_snapshot(&mut self, _clock: &SimClock, _lattice: &Lattice) {}

    /// Called when the run stops because no move is possible.
    fn on_stall(&mut self, _clock: &SimClock, _reason: StallReason) {}

    /// Called once when the run loop returns without error.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
