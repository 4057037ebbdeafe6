//! Error types shared across modules.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FortescueError {
    /// Raised when a phase identifier is not one of `a`, `b` or `c`.
    #[error("invalid phase label `{0}`, expected one of a, b, c")]
    InvalidPhaseLabel(String),
    /// Raised when text does not follow the `magnitude@angle` form.
    #[error("invalid phasor text `{0}`, expected `magnitude@angle`")]
    InvalidPhasorText(String),
}
