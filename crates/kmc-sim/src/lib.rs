//! `kmc-sim` — the KMC stepper for the surface_kmc engine.
//!
//! # One step
//!
//! ```text
//! ① Enumerate — policy scans the lattice → EventList (sites, directions, rates)
//!               empty or zero total rate → StepOutcome::Stalled
//! ② Select    — u ∈ (0,1); first i with u·R_total < Σ_{j≤i} rate_j
//! ③ Apply     — source → Empty, destination → Occupied
//! ④ Advance   — u_time ∈ (0,1); clock += -ln(u_time) / R_total
//! ```
//!
//! A stall is a normal outcome, not an error: the driver decides whether to
//! stop.  Errors (`KmcError`) mean misconfiguration or a corrupted lattice
//! and abort the run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use kmc_core::KmcConfig;
//! use kmc_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::from_config(&KmcConfig::default())?.build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("{} steps, t = {:.3e} s", summary.total_steps, summary.elapsed);
//! ```

pub mod builder;
pub mod observer;
pub mod outcome;
pub mod select;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use observer::{NoopObserver, SimObserver};
pub use outcome::{MoveRecord, RunSummary, StallReason, StepOutcome, StopReason};
pub use select::select_index;
pub use sim::Sim;
