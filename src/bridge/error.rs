use thiserror::Error;

use crate::fdm::FdmError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    #[error("Flight model initialization failed: {0}")]
    Initialization(#[from] FdmError),

    #[error("Flight model is not initialized")]
    NotInitialized,

    #[error("Flight model is already initialized")]
    AlreadyInitialized,

    #[error("Flight model has been terminated")]
    Terminated,

    #[error("Flight model error: {0}")]
    Engine(FdmError),
}
