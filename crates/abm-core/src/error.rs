//! Shared error type.
//!
//! Sub-crates with their own failure modes define their own enums and wrap
//! `AbmError` as one variant via `#[from]`.

use thiserror::Error;

/// Errors common to every `abm-*` crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AbmError {
    /// A constructor or parser contract was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand result type for `abm-core` and its dependents.
pub type AbmResult<T> = Result<T, AbmError>;

/// Reject `value` unless it lies in `[0, 1]`.  NaN is rejected too.
pub fn check_fraction(name: &str, value: f64) -> AbmResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(AbmError::InvalidArgument(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}
