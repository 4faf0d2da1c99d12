//! dss-results: snapshot persistence and chart-sample extraction.

pub mod chart;
pub mod store;
pub mod types;

pub use chart::{chart_samples, MAX_CHART_POINTS};
pub use store::{SnapshotStore, SnapshotWriter};
pub use types::RunManifest;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
