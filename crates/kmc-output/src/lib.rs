//! `kmc-output` — trajectory writers for the surface_kmc engine.
//!
//! | Writer        | Files created                  |
//! |---------------|--------------------------------|
//! | [`CsvWriter`] | `steps.csv`, `snapshots.csv`   |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `kmc_sim::SimObserver`.  The
//! engine itself never touches the filesystem.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kmc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{SnapshotRow, StepRow};
pub use writer::OutputWriter;
