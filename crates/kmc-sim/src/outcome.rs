//! Step and run results.

use std::fmt;

use kmc_core::{Direction, Site};

/// Why no move could be made.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StallReason {
    /// The enumerator found no mobile atom.
    NoCandidates,
    /// Candidates exist but every rate is zero.
    ZeroTotalRate,
}

impl fmt::Display for StallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StallReason::NoCandidates => f.write_str("no candidate events"),
            StallReason::ZeroTotalRate => f.write_str("total event rate is zero"),
        }
    }
}

/// The move executed by one accepted step.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MoveRecord {
    /// 1-based index of this step within the run.
    pub step:        u64,
    pub source:      Site,
    pub destination: Site,
    pub direction:   Direction,
    /// Rate of the selected event, 1/s.
    pub rate:        f64,
    /// Sum of all candidate rates, 1/s.
    pub total_rate:  f64,
    /// Number of candidates the event was selected from.
    pub candidates:  usize,
    /// Waiting time drawn for this step, s.
    pub dt:          f64,
    /// Clock value after this step, s.
    pub elapsed:     f64,
}

/// Result of [`Sim::step`][crate::Sim::step].
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum StepOutcome {
    Moved(MoveRecord),
    /// Nothing changed; the lattice and clock are as before the call.
    Stalled(StallReason),
}

impl StepOutcome {
    pub fn is_stalled(&self) -> bool {
        matches!(self, StepOutcome::Stalled(_))
    }

    pub fn record(&self) -> Option<&MoveRecord> {
        match self {
            StepOutcome::Moved(r) => Some(r),
            StepOutcome::Stalled(_) => None,
        }
    }
}

/// Why a run loop returned.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum StopReason {
    StepLimit,
    TimeLimit,
    Stalled(StallReason),
}

/// Summary returned by [`Sim::run`][crate::Sim::run] and friends.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RunSummary {
    /// Steps accepted during this call.
    pub steps:       u64,
    /// Steps accepted since the simulation was built.
    pub total_steps: u64,
    /// Clock value when the call returned, s.
    pub elapsed:     f64,
    pub stop:        StopReason,
}
