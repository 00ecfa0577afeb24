//! Step observer trait for progress reporting and data collection.

use crate::{RunState, Step};

/// Callbacks invoked by [`run_model`][crate::run_model] around every step.
///
/// All methods default to no-ops so implementors override only what they
/// need.  `S` is the model's per-step statistics type.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl<S: std::fmt::Debug> StepObserver<S> for Printer {
///     fn on_step_end(&mut self, step: Step, stats: &S) {
///         println!("{step}: {stats:?}");
///     }
/// }
/// ```
pub trait StepObserver<S> {
    /// Called before the step that will complete as `upcoming.next()`.
    fn on_step_start(&mut self, _upcoming: Step) {}

    /// Called after each step with the statistics it produced.
    fn on_step_end(&mut self, _step: Step, _stats: &S) {}

    /// Called once when the run reaches a terminal state.
    fn on_run_end(&mut self, _final_step: Step, _state: RunState) {}
}

/// A [`StepObserver`] that does nothing.
pub struct NoopObserver;

impl<S> StepObserver<S> for NoopObserver {}

/// A flat statistics row that output backends can serialize.
pub trait StatsRecord {
    /// Column names, in the order produced by [`fields`](Self::fields).
    const HEADER: &'static [&'static str];

    /// Column values rendered as text.
    fn fields(&self) -> Vec<String>;
}
