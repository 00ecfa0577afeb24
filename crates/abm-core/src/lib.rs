//! `abm-core` — foundational types for the classroom agent-based models.
//!
//! This crate is a dependency of every other `abm-*` crate.  It has no
//! `abm-*` dependencies of its own.
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `AgentId`                                              |
//! | [`step`]       | `Step` counter                                         |
//! | [`rng`]        | `SimRng`, seed resolution (`ABM_SEED`, wall clock)     |
//! | [`config`]     | `RunConfig`                                            |
//! | [`model`]      | `Model` trait, `RunState`, `run_model` scheduler       |
//! | [`observer`]   | `StepObserver`, `NoopObserver`, `StatsRecord`          |
//! | [`error`]      | `AbmError`, `AbmResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to plain data types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod observer;
pub mod rng;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RunConfig;
pub use error::{AbmError, AbmResult};
pub use ids::AgentId;
pub use model::{Model, RunState, run_model};
pub use observer::{NoopObserver, StatsRecord, StepObserver};
pub use rng::{SEED_ENV_VAR, SimRng};
pub use step::Step;
