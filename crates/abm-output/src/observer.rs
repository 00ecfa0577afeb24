//! `StatsObserver<W>` — bridges `StepObserver` to an `OutputWriter`.

use std::marker::PhantomData;

use abm_core::{RunState, StatsRecord, Step, StepObserver};
use tracing::warn;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`StepObserver`] that writes every step's statistics to an
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `StepObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct StatsObserver<W, R> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
    _record:    PhantomData<fn(&R)>,
}

impl<R: StatsRecord, W: OutputWriter<R>> StatsObserver<W, R> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: 0,
            last_error: None,
            _record: PhantomData,
        }
    }

    /// Rows successfully handed to the writer.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "statistics write failed");
                // Keep only the first error.
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
                false
            }
        }
    }
}

impl<R: StatsRecord, W: OutputWriter<R>> StepObserver<R> for StatsObserver<W, R> {
    fn on_step_end(&mut self, _step: Step, stats: &R) {
        let result = self.writer.write_row(stats);
        if self.store_err(result) {
            self.rows += 1;
        }
    }

    fn on_run_end(&mut self, _final_step: Step, _state: RunState) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
