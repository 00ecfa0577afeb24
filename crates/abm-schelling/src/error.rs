//! Error type for the Schelling crate.

use abm_core::{AbmError, AgentId};
use abm_grid::{Cell, GridError};
use thiserror::Error;

/// Failures while building or stepping a [`GridModel`](crate::GridModel).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchellingError {
    #[error(transparent)]
    Config(#[from] AbmError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("{agent} wants to move but the grid has no empty cell")]
    EmptyChoice { agent: AgentId },

    #[error("invariant violated at {cell}: {what}")]
    Inconsistent { cell: Cell, what: String },
}

pub type SchellingResult<T> = Result<T, SchellingError>;
