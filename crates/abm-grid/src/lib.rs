//! `abm-grid` — passive rectangular cell store.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`cell`]   | `Cell` coordinate, `CellState` (`Empty`, `TypeA`, `TypeB`) |
//! | [`grid`]   | `Grid<C>`, Moore neighborhood, empty-cell scan            |
//! | [`error`]  | `GridError`, `GridResult<T>`                              |
//!
//! The grid holds no policy: agents and models decide what to write where.
//! Coordinates follow `grid[x][y]` with `0 ≤ x < width`, `0 ≤ y < height`.
//! Whole-grid scans visit `x` in the outer loop and `y` in the inner loop.

pub mod cell;
pub mod error;
pub mod grid;


pub use cell::{Cell, CellState};
pub use error::{GridError, GridResult};
pub use grid::Grid;
