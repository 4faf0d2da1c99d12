//! Application-level error type.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(#[from] dss_project::ProjectError),

    #[error("Discretization error: {0}")]
    Discretize(#[from] dss_discretize::DiscretizeError),

    #[error("Simulation error: {0}")]
    Sim(#[from] dss_sim::SimError),

    #[error("Results error: {0}")]
    Results(#[from] dss_results::ResultsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
