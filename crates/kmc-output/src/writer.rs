//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, SnapshotRow, StepRow};

/// Sink for trajectory rows.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Write one accepted move.
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()>;

    /// Write the rows of one lattice snapshot.
    fn write_snapshot(&mut self, rows: &[SnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
