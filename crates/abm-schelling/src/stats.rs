//! Per-step summary of a Schelling run.

use abm_core::{StatsRecord, Step};

/// Population summary taken at the end of a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchellingStats {
    pub step:            Step,
    pub agents:          usize,
    pub happy:           usize,
    pub unhappy:         usize,
    /// Agents that relocated during this step.
    pub moved:           usize,
    /// Mean similarity over all agents; `0.0` for an empty population.
    pub mean_similarity: f64,
}

impl StatsRecord for SchellingStats {
    const HEADER: &'static [&'static str] =
        &["step", "agents", "happy", "unhappy", "moved", "mean_similarity"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.step.0.to_string(),
            self.agents.to_string(),
            self.happy.to_string(),
            self.unhappy.to_string(),
            self.moved.to_string(),
            format!("{:.6}", self.mean_similarity),
        ]
    }
}
