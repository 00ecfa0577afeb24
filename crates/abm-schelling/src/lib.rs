//! `abm-schelling` — Schelling segregation model.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`agent`]   | `Group`, `GridAgent` (similarity, happiness, relocation)    |
//! | [`builder`] | `GridModelBuilder` — validated construction and seeding     |
//! | [`model`]   | `GridModel` — step loop, termination, rendering             |
//! | [`stats`]   | `SchellingStats` per-step summary                           |
//! | [`error`]   | `SchellingError`, `SchellingResult<T>`                      |
//!
//! # Update order
//!
//! Agents are visited in insertion order and update sequentially: a move by
//! agent `k` is visible to every agent after `k` in the same step.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use abm_core::NoopObserver;
//! use abm_schelling::GridModelBuilder;
//!
//! let mut model = GridModelBuilder::new(20, 20)
//!     .density(0.8)
//!     .minority_fraction(0.3)
//!     .seed(42)
//!     .build()?;
//! let state = model.run(100, &mut NoopObserver)?;
//! println!("{state}\n{model}");
//! ```

pub mod agent;
pub mod builder;
pub mod error;
pub mod model;
pub mod stats;


pub use agent::{GridAgent, Group};
pub use builder::GridModelBuilder;
pub use error::{SchellingError, SchellingResult};
pub use model::{DEFAULT_SIMILARITY_THRESHOLD, GridModel};
pub use stats::SchellingStats;
