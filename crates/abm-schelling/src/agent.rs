//! Grid-resident agents.
//!
//! A `GridAgent` never stores a reference to its model.  Every method that
//! needs the world borrows the model's [`Grid`] for the length of the call,
//! so ownership stays one way: model → grid, model → agents.

use abm_core::{AgentId, SimRng};
use abm_grid::{Cell, CellState, Grid};
use tracing::trace;

use crate::{SchellingError, SchellingResult};

/// Which of the two populations an agent belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Group {
    /// The minority population, drawn with probability `minority_fraction`.
    A,
    B,
}

impl Group {
    /// The grid state an agent of this group writes into its cell.
    #[inline]
    pub fn cell_state(self) -> CellState {
        match self {
            Group::A => CellState::TypeA,
            Group::B => CellState::TypeB,
        }
    }
}

/// A type-tagged agent sited on one grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridAgent {
    pub id:       AgentId,
    pub position: Cell,
    pub group:    Group,
}

impl GridAgent {
    pub fn new(id: AgentId, position: Cell, group: Group) -> Self {
        Self { id, position, group }
    }

    /// Fraction of occupied Moore neighbors that share this agent's group.
    ///
    /// Empty neighbors are left out of the denominator.  An agent with no
    /// occupied neighbor scores `0.0`.
    pub fn similarity(&self, grid: &Grid) -> SchellingResult<f64> {
        let own = self.group.cell_state();
        let mut same = 0u32;
        let mut occupied = 0u32;
        for n in grid.neighbors(self.position.x, self.position.y)? {
            let state = grid.get_cell(n)?;
            if state.is_empty() {
                continue;
            }
            occupied += 1;
            if state == own {
                same += 1;
            }
        }
        if occupied == 0 {
            return Ok(0.0);
        }
        Ok(f64::from(same) / f64::from(occupied))
    }

    /// `similarity > threshold`.  Equality is not enough.
    pub fn is_happy(&self, grid: &Grid, threshold: f64) -> SchellingResult<bool> {
        Ok(self.similarity(grid)? > threshold)
    }

    /// Move to an empty cell chosen uniformly at random.
    ///
    /// The old cell is cleared and the new one written before returning, so
    /// the grid and `self.position` agree again on success.  Returns the new
    /// position.
    pub fn relocate(&mut self, grid: &mut Grid, rng: &mut SimRng) -> SchellingResult<Cell> {
        let empty = grid.empty_cells();
        let Some(i) = rng.pick_index(empty.len()) else {
            return Err(SchellingError::EmptyChoice { agent: self.id });
        };
        let old = self.position;
        let new = empty[i];

        grid.set_cell(old, CellState::Empty)?;
        self.position = new;
        grid.set_cell(new, self.group.cell_state())?;

        trace!(agent = %self.id, from = %old, to = %new, "relocated");
        Ok(new)
    }
}
