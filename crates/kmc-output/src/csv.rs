//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `steps.csv`
//! - `snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SnapshotRow, StepRow};

pub const STEP_HEADER: [&str; 11] = [
    "step", "elapsed", "dt", "source_row", "source_col", "dest_row", "dest_col",
    "direction", "rate", "total_rate", "candidates",
];

pub const SNAPSHOT_HEADER: [&str; 4] = ["step", "elapsed", "row", "cells"];

/// Writes a trajectory to two CSV files.
pub struct CsvWriter {
    steps:     Writer<File>,
    snapshots: Writer<File>,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.  Existing files are truncated.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut steps = Writer::from_path(dir.join("steps.csv"))?;
        steps.write_record(STEP_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        Ok(Self { steps, snapshots })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()> {
        self.steps.write_record(&[
            row.step.to_string(),
            format!("{:e}", row.elapsed),
            format!("{:e}", row.dt),
            row.source_row.to_string(),
            row.source_col.to_string(),
            row.dest_row.to_string(),
            row.dest_col.to_string(),
            row.direction.as_str().to_owned(),
            format!("{:e}", row.rate),
            format!("{:e}", row.total_rate),
            row.candidates.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshot(&mut self, rows: &[SnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.step.to_string(),
                format!("{:e}", row.elapsed),
                row.row.to_string(),
                row.cells.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.steps.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
