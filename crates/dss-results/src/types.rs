//! Result data types.

use serde::{Deserialize, Serialize};

/// Summary of one simulation run, stored next to its snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub variant: String,
    pub sample_period: f64,
    pub order: usize,
    pub horizon: f64,
    pub iteration_count: usize,
}
