//! Error types for discretization.

use thiserror::Error;

/// Result type for discretization operations.
pub type DiscretizeResult<T> = Result<T, DiscretizeError>;

/// Errors that can occur while converting continuous matrices.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiscretizeError {
    #[error("Matrix {name} must be square, got {rows}x{cols}")]
    NotSquare {
        name: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("Matrix B must have {expected} rows to match A, got {actual}")]
    InputRowMismatch { expected: usize, actual: usize },

    #[error("Truncation order q must be in [{min}, {max}], got {order}")]
    OrderOutOfRange {
        order: usize,
        min: usize,
        max: usize,
    },

    #[error("Sample period T must be in [{min}, {max}], got {value}")]
    SamplePeriodOutOfRange { value: f64, min: f64, max: f64 },
}
