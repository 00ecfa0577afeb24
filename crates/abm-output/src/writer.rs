//! The `OutputWriter` trait implemented by all backend writers.

use abm_core::StatsRecord;

use crate::OutputResult;

/// A sink for one statistics row per step.
pub trait OutputWriter<R: StatsRecord> {
    fn write_row(&mut self, row: &R) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
