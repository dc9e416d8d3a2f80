//! Plain data rows written by output backends.

use kmc_core::{Direction, SimClock};
use kmc_lattice::Lattice;
use kmc_sim::MoveRecord;

/// One accepted move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRow {
    pub step:        u64,
    pub elapsed:     f64,
    pub dt:          f64,
    pub source_row:  usize,
    pub source_col:  usize,
    pub dest_row:    usize,
    pub dest_col:    usize,
    pub direction:   Direction,
    pub rate:        f64,
    pub total_rate:  f64,
    pub candidates:  usize,
}

impl From<&MoveRecord> for StepRow {
    fn from(r: &MoveRecord) -> Self {
        Self {
            step:       r.step,
            elapsed:    r.elapsed,
            dt:         r.dt,
            source_row: r.source.row,
            source_col: r.source.col,
            dest_row:   r.destination.row,
            dest_col:   r.destination.col,
            direction:  r.direction,
            rate:       r.rate,
            total_rate: r.total_rate,
            candidates: r.candidates,
        }
    }
}

/// One stored lattice row (guard rows included) at a snapshot instant.
///
/// `cells` uses the `Occupancy::symbol` alphabet: `#` occupied, `.` empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRow {
    pub step:    u64,
    pub elapsed: f64,
    pub row:     usize,
    pub cells:   String,
}

impl SnapshotRow {
    /// All rows of `lattice`, top guard row first.
    pub fn capture(clock: &SimClock, lattice: &Lattice) -> Vec<SnapshotRow> {
        (0..lattice.rows())
            .map(|row| SnapshotRow {
                step:    clock.steps(),
                elapsed: clock.elapsed(),
                row,
                cells:   lattice.row(row).iter().map(|c| c.symbol()).collect(),
            })
            .collect()
    }
}
