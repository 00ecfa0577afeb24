//! `abm-transport` — the toy transport domain.
//!
//! | Module   | Contents                                                  |
//! |----------|-----------------------------------------------------------|
//! | [`road`] | `Road` — validated lane count and a repaving timestamp    |
//! | [`car`]  | `Car`, `Heading`, `Mode` — a mobile on an unbounded plane |
//!
//! Neither type takes part in model stepping.

pub mod car;
pub mod road;


pub use car::{Car, Heading, Mode};
pub use road::Road;
