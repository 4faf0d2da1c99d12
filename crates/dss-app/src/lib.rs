//! dss-app: run orchestration between the project layer and the CLI.

pub mod error;
pub mod run_service;

pub use error::{AppError, AppResult};
pub use run_service::{compute_matrices, run_variant, RunOutcome, RunSummary};
