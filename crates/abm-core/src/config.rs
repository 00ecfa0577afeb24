//! Run-level configuration shared by every model.

use crate::{AbmResult, SimRng};

/// Step budget and RNG seed for one run.
///
/// Model parameters (grid size, fractions, …) live in each model's own
/// builder; this struct only carries what the scheduler needs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Upper bound on completed steps before the run is declared exhausted.
    pub max_steps: u64,
}

impl RunConfig {
    pub const DEFAULT_MAX_STEPS: u64 = 100;

    pub fn new(seed: u64, max_steps: u64) -> Self {
        Self { seed, max_steps }
    }

    /// Build a config whose seed follows the `explicit → ABM_SEED → clock`
    /// precedence of [`SimRng::resolve_seed`].
    pub fn resolve(explicit_seed: Option<u64>, max_steps: u64) -> AbmResult<Self> {
        let seed = SimRng::resolve_seed(explicit_seed)?;
        Ok(Self { seed, max_steps })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { seed: 0, max_steps: Self::DEFAULT_MAX_STEPS }
    }
}
