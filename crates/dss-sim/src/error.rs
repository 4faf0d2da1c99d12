//! Error types for simulation.

use thiserror::Error;

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while running the recurrence.
#[derive(Error, Debug)]
pub enum SimError {
    /// Variant identifier outside the closed set. Recoverable: the caller
    /// reports it and keeps an empty trajectory.
    #[error("Unknown variant: {id}")]
    UnknownVariant { id: String },

    /// Internal consistency failure: validated inputs should never derive
    /// a negative step count.
    #[error("Iteration count is negative: {count}")]
    NegativeIterationCount { count: i64 },

    /// Fatal precondition violation; shapes are never truncated or padded.
    #[error("Shape mismatch: {what}")]
    ShapeMismatch { what: String },

    #[error("Snapshot sink failed: {what}")]
    Snapshot { what: String },
}
