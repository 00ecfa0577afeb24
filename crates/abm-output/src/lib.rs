//! `abm-output` — statistics writers for model runs.
//!
//! | Backend | Files created      |
//! |---------|--------------------|
//! | CSV     | `<dir>/<name>.csv` |
//!
//! Backends implement [`OutputWriter`] and are driven by [`StatsObserver`],
//! which implements `abm_core::StepObserver`.  Any statistics type that
//! implements [`abm_core::StatsRecord`] can be written.
//!
//! # Usage
//!
//! ```rust,ignore
//! use abm_output::{CsvWriter, StatsObserver};
//!
//! let writer = CsvWriter::create(Path::new("./output"), "schelling")?;
//! let mut obs = StatsObserver::new(writer);
//! model.run(100, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsObserver;
pub use writer::OutputWriter;
