//! Run definition schema.

use serde::{Deserialize, Serialize};

/// Raw run definition, exactly as it appears in the YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunFile {
    pub system: SystemDef,
    pub parameters: ParametersDef,
    /// Variant identifier ("1", "2", "3"). Unknown identifiers survive
    /// validation; the run layer reports them and yields an empty
    /// trajectory.
    pub variant: String,
}

/// Continuous plant description: state, input and output matrices as row
/// lists, with their declared dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemDef {
    /// State dimension.
    pub n: usize,
    /// Input dimension.
    pub m: usize,
    /// Output dimension.
    pub l: usize,
    /// Continuous state matrix A (n x n).
    pub a: Vec<Vec<f64>>,
    /// Continuous input matrix B (n x m).
    pub b: Vec<Vec<f64>>,
    /// Output matrix C (l x n).
    pub c: Vec<Vec<f64>>,
}

/// Discretization and horizon scalars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParametersDef {
    /// Sample period T in seconds.
    pub sample_period: f64,
    /// Truncation order q of the power series.
    pub order: i64,
    /// Horizon scalar k; the step count is derived from k / T.
    pub horizon: f64,
}
