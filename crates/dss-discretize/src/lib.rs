//! dss-discretize: continuous-to-discrete conversion of LTI state matrices.
//!
//! Approximates `F = exp(A*T)` and the discrete input matrix `G` with a
//! truncated matrix-exponential power series over a memoized table of
//! matrix powers. Truncation order is the sole accuracy knob; no error
//! bound is computed.

pub mod engine;
pub mod error;
pub mod power;

pub use engine::{discretize, DiscretePair, DiscretizationConfig, GSeries};
pub use error::{DiscretizeError, DiscretizeResult};
pub use power::power_table;

/// Accepted sample period range (seconds).
pub const SAMPLE_PERIOD_MIN: f64 = 0.001;
pub const SAMPLE_PERIOD_MAX: f64 = 0.1;

/// Accepted truncation order range (highest retained series term).
pub const ORDER_MIN: usize = 2;
pub const ORDER_MAX: usize = 10;
