//! The `GridModel` struct and its step loop.

use std::collections::HashSet;
use std::fmt;

use abm_core::{Model, RunState, SimRng, Step, StepObserver, run_model};
use abm_grid::{CellState, Grid};
use tracing::{debug, info};

use crate::{GridAgent, SchellingError, SchellingResult, SchellingStats};

/// Similarity an agent must strictly exceed to be happy unless configured
/// otherwise.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.30;

/// A Schelling segregation model: a grid, the agents living on it, and the
/// random source that drives relocation.
///
/// Create via [`GridModelBuilder`][crate::GridModelBuilder].
pub struct GridModel {
    pub(crate) density:              f64,
    pub(crate) minority_fraction:    f64,
    pub(crate) similarity_threshold: f64,
    pub(crate) seed:                 u64,
    pub(crate) grid:                 Grid,
    pub(crate) agents:               Vec<GridAgent>,
    pub(crate) step_count:           Step,
    pub(crate) state:                RunState,
    pub(crate) last_moved:           usize,
    pub(crate) rng:                  SimRng,
}

impl GridModel {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Agents in insertion order.
    pub fn agents(&self) -> &[GridAgent] {
        &self.agents
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn minority_fraction(&self) -> f64 {
        self.minority_fraction
    }

    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn step_count(&self) -> Step {
        self.step_count
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Visit every agent once in insertion order; each unhappy agent moves
    /// to a random empty cell before the next agent is evaluated.
    ///
    /// A model in a terminal state is left untouched and reports its current
    /// statistics with `moved == 0`.
    pub fn step(&mut self) -> SchellingResult<SchellingStats> {
        if self.state.is_terminal() {
            let mut stats = self.stats()?;
            stats.moved = 0;
            return Ok(stats);
        }

        let threshold = self.similarity_threshold;
        let mut moved = 0;
        for agent in self.agents.iter_mut() {
            if !agent.is_happy(&self.grid, threshold)? {
                agent.relocate(&mut self.grid, &mut self.rng)?;
                moved += 1;
            }
        }

        self.step_count = self.step_count.next();
        self.last_moved = moved;
        let stats = self.stats()?;
        self.state = if stats.unhappy == 0 { RunState::Converged } else { RunState::Running };

        debug!(
            step = self.step_count.0,
            moved,
            unhappy = stats.unhappy,
            "schelling step"
        );
        if self.state == RunState::Converged {
            info!(step = self.step_count.0, "all agents happy");
        }
        Ok(stats)
    }

    /// Step until every agent is happy or `step_count` reaches `max_steps`.
    ///
    /// Returns the terminal state, which is also recorded on the model.  A
    /// model already in a terminal state returns that state immediately.
    pub fn run<O>(&mut self, max_steps: u64, observer: &mut O) -> SchellingResult<RunState>
    where
        O: StepObserver<SchellingStats>,
    {
        if self.state.is_terminal() {
            return Ok(self.state);
        }
        let outcome = run_model(self, max_steps, observer)?;
        self.state = outcome;
        Ok(outcome)
    }

    // ── Observation ───────────────────────────────────────────────────────

    /// `true` iff every agent is currently happy.
    pub fn all_happy(&self) -> SchellingResult<bool> {
        for agent in &self.agents {
            if !agent.is_happy(&self.grid, self.similarity_threshold)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Summary of the current population.
    pub fn stats(&self) -> SchellingResult<SchellingStats> {
        let mut happy = 0;
        let mut total_similarity = 0.0;
        for agent in &self.agents {
            let s = agent.similarity(&self.grid)?;
            total_similarity += s;
            if s > self.similarity_threshold {
                happy += 1;
            }
        }
        let agents = self.agents.len();
        Ok(SchellingStats {
            step: self.step_count,
            agents,
            happy,
            unhappy: agents - happy,
            moved: self.last_moved,
            mean_similarity: if agents == 0 { 0.0 } else { total_similarity / agents as f64 },
        })
    }

    /// Text picture of the grid; see [`Grid::render`].
    pub fn render(&self) -> String {
        self.grid.render()
    }

    /// Verify that agents and grid agree: every agent's cell holds its
    /// group, positions are distinct, and no occupied cell lacks an agent.
    pub fn check_invariants(&self) -> SchellingResult<()> {
        let mut seen = HashSet::with_capacity(self.agents.len());
        for agent in &self.agents {
            let found = self.grid.get_cell(agent.position)?;
            if found != agent.group.cell_state() {
                return Err(SchellingError::Inconsistent {
                    cell: agent.position,
                    what: format!("{} expects {:?}, grid holds {found:?}", agent.id, agent.group),
                });
            }
            if !seen.insert(agent.position) {
                return Err(SchellingError::Inconsistent {
                    cell: agent.position,
                    what: format!("{} shares its cell with another agent", agent.id),
                });
            }
        }
        if let Some((cell, state)) = self
            .grid
            .cells()
            .find(|&(cell, state)| state != CellState::Empty && !seen.contains(&cell))
        {
            return Err(SchellingError::Inconsistent {
                cell,
                what: format!("cell holds {state:?} but no agent lives there"),
            });
        }
        Ok(())
    }
}

impl Model for GridModel {
    type Stats = SchellingStats;
    type Error = SchellingError;

    fn step(&mut self) -> SchellingResult<SchellingStats> {
        GridModel::step(self)
    }

    fn steps_taken(&self) -> Step {
        self.step_count
    }

    fn is_converged(&self) -> bool {
        self.state == RunState::Converged
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
