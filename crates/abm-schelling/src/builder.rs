//! Fluent builder for constructing a seeded [`GridModel`].

use abm_core::error::check_fraction;
use abm_core::{AgentId, RunState, SimRng, Step};
use abm_grid::{Cell, Grid};
use tracing::debug;

use crate::model::DEFAULT_SIMILARITY_THRESHOLD;
use crate::{GridAgent, GridModel, Group, SchellingResult};

/// Fluent builder for [`GridModel`].
///
/// # Optional inputs (have defaults)
///
/// | Method                       | Default |
/// |------------------------------|---------|
/// | `.density(p)`                | `0.8`   |
/// | `.minority_fraction(p)`      | `0.5`   |
/// | `.similarity_threshold(t)`   | `0.30`  |
/// | `.seed(s)`                   | `0`     |
///
/// # Example
///
/// ```rust,ignore
/// let model = GridModelBuilder::new(5, 5)
///     .density(0.8)
///     .minority_fraction(0.5)
///     .seed(42)
///     .build()?;
/// ```
#[derive(Clone, Debug)]
pub struct GridModelBuilder {
    width:                usize,
    height:               usize,
    density:              f64,
    minority_fraction:    f64,
    similarity_threshold: f64,
    seed:                 u64,
}

impl GridModelBuilder {
    pub const DEFAULT_DENSITY: f64 = 0.8;
    pub const DEFAULT_MINORITY_FRACTION: f64 = 0.5;

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            density:              Self::DEFAULT_DENSITY,
            minority_fraction:    Self::DEFAULT_MINORITY_FRACTION,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            seed:                 0,
        }
    }

    /// Probability that a cell is occupied at seeding.
    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Probability that an occupied cell holds a [`Group::A`] agent.
    pub fn minority_fraction(mut self, fraction: f64) -> Self {
        self.minority_fraction = fraction;
        self
    }

    /// Similarity an agent must strictly exceed to be happy.
    pub fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate parameters, allocate the grid and seed the population.
    ///
    /// Cells are visited `x` outer, `y` inner.  Each cell draws `r1`; when
    /// `r1 < density` it draws `r2` and receives a [`Group::A`] agent if
    /// `r2 < minority_fraction`, a [`Group::B`] agent otherwise.
    pub fn build(self) -> SchellingResult<GridModel> {
        let density = check_fraction("density", self.density)?;
        let minority_fraction = check_fraction("minority_fraction", self.minority_fraction)?;
        let similarity_threshold = check_fraction("similarity_threshold", self.similarity_threshold)?;

        let mut grid = Grid::new(self.width, self.height)?;
        let mut rng = SimRng::new(self.seed);
        let mut agents = Vec::new();

        for x in 0..self.width {
            for y in 0..self.height {
                if rng.unit() >= density {
                    continue;
                }
                let group = if rng.unit() < minority_fraction { Group::A } else { Group::B };
                let cell = Cell::new(x, y);
                grid.set_cell(cell, group.cell_state())?;
                agents.push(GridAgent::new(AgentId(agents.len() as u32), cell, group));
            }
        }

        debug!(
            width = self.width,
            height = self.height,
            agents = agents.len(),
            seed = self.seed,
            "seeded grid model"
        );

        Ok(GridModel {
            density,
            minority_fraction,
            similarity_threshold,
            seed: self.seed,
            grid,
            agents,
            step_count: Step::ZERO,
            state: RunState::Seeded,
            last_moved: 0,
            rng,
        })
    }
}
