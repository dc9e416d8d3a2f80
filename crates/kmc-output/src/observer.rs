//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use kmc_core::SimClock;
use kmc_lattice::Lattice;
use kmc_sim::{MoveRecord, RunSummary, SimObserver};

use crate::row::{SnapshotRow, StepRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every move and every snapshot to an
/// [`OutputWriter`].
///
/// `SimObserver` methods return nothing, so writer errors are stored.  After
/// `sim.run()` returns, check with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    record_steps: bool,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, record_steps: true, last_error: None }
    }

    /// Skip per-step rows and write snapshots only.
    pub fn snapshots_only(mut self) -> Self {
        self.record_steps = false;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect it after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // First error wins.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step(&mut self, record: &MoveRecord, _lattice: &Lattice) {
        if !self.record_steps {
            return;
        }
        let result = self.writer.write_step(&StepRow::from(record));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, clock: &SimClock, lattice: &Lattice) {
        let rows = SnapshotRow::capture(clock, lattice);
        let result = self.writer.write_snapshot(&rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
