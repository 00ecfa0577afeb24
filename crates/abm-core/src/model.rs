//! The `Model` trait and the shared step scheduler.
//!
//! # Run state machine
//!
//! ```text
//! Seeded ──step──▶ Running ──all settled──▶ Converged
//!                     │
//!                     └──step budget spent──▶ Exhausted
//! ```
//!
//! `Converged` and `Exhausted` are terminal.  A model in a terminal state
//! treats further `step` calls as no-ops.

use std::fmt;

use tracing::{debug, info};

use crate::{Step, StepObserver};

/// Lifecycle of a model run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    /// Constructed and populated; no step taken yet.
    #[default]
    Seeded,
    /// At least one step taken, not yet settled.
    Running,
    /// Every agent is satisfied; stepping changes nothing.
    Converged,
    /// The step budget ran out before convergence.
    Exhausted,
}

impl RunState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Converged | RunState::Exhausted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunState::Seeded    => "seeded",
            RunState::Running   => "running",
            RunState::Converged => "converged",
            RunState::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A model that advances in discrete, sequential steps.
///
/// Implementors own their world and agents outright; the scheduler only sees
/// this narrow interface.
pub trait Model {
    /// Statistics reported after each step.
    type Stats;
    /// Error that aborts a step.
    type Error;

    /// Advance by one step and report statistics for it.
    ///
    /// Must be a no-op (returning the current statistics) once the model is
    /// in a terminal state.
    fn step(&mut self) -> Result<Self::Stats, Self::Error>;

    /// Number of completed steps.
    fn steps_taken(&self) -> Step;

    /// `true` once no agent would change anything by stepping.
    fn is_converged(&self) -> bool;
}

/// Step `model` until it converges or has completed `max_steps` steps.
///
/// Observer hooks fire around every step actually taken.  Returns the terminal
/// state reached; the caller records it on the model.
pub fn run_model<M, O>(model: &mut M, max_steps: u64, observer: &mut O) -> Result<RunState, M::Error>
where
    M: Model,
    O: StepObserver<M::Stats>,
{
    let outcome = loop {
        if model.is_converged() {
            break RunState::Converged;
        }
        let now = model.steps_taken();
        if now.0 >= max_steps {
            break RunState::Exhausted;
        }

        observer.on_step_start(now);
        let stats = model.step()?;
        let done = model.steps_taken();
        debug!(step = done.0, "step complete");
        observer.on_step_end(done, &stats);
    };

    let last = model.steps_taken();
    info!(steps = last.0, state = %outcome, "run finished");
    observer.on_run_end(last, outcome);
    Ok(outcome)
}
