//! `abm-petrie` — population model without a grid.
//!
//! Actors live in two cohorts (`men`, `women`).  Each step every active
//! hostile actor directs one hostile comment at a random active actor of the
//! other cohort.  An actor who has received `drop_threshold` comments drops
//! out and takes no further part.
//!
//! # Crate layout
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`actor`]        | `Sex`, `Actor` (emit, dropout, intervene)             |
//! | [`intervention`] | `InterventionPolicy` hook, `NoIntervention`           |
//! | [`model`]        | `PopulationConfig`, `PopulationModel`                 |
//! | [`stats`]        | `CohortStats`, `PetrieStats`                          |
//!
//! Errors are [`abm_core::AbmError`]; this crate has no failure mode of its
//! own beyond invalid configuration.

pub mod actor;
pub mod intervention;
pub mod model;
pub mod stats;

#[cfg(test)]
mod tests;

pub use actor::{Actor, Sex};
pub use intervention::{InterventionPolicy, NoIntervention};
pub use model::{DEFAULT_DROP_THRESHOLD, PopulationConfig, PopulationModel};
pub use stats::{CohortStats, PetrieStats};
