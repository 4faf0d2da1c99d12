//! dss-project: run definition file format and validation.
//!
//! The laboratory's parameters arrive as a YAML file; validation turns the
//! raw schema into a typed, invariant-checked [`RunDefinition`] so that the
//! numerical core never has to re-check or re-prompt.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{validate_run, RunDefinition, ValidationError};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<RunDefinition> {
    let content = std::fs::read_to_string(path)?;
    let run_file: RunFile = serde_yaml::from_str(&content)?;
    let definition = validate_run(&run_file)?;
    Ok(definition)
}

pub fn save_yaml(path: &std::path::Path, run_file: &RunFile) -> ProjectResult<()> {
    validate_run(run_file)?;
    let content = serde_yaml::to_string(run_file)?;
    std::fs::write(path, content)?;
    Ok(())
}
