use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FdmError {
    #[error("Model could not be loaded: {0}")]
    LoadError(String),

    #[error("Model configuration error: {0}")]
    ConfigError(String),

    #[error("Initial conditions could not be applied: {0}")]
    InitialConditions(String),

    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    #[error("Property '{name}' rejected value {value}")]
    InvalidValue { name: String, value: f64 },

    #[error("Invalid integration step: {0}")]
    InvalidTimestep(f64),

    #[error("Model step failed: {0}")]
    StepFailed(String),
}
