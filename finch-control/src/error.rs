//! Application error type

use finch_core::engine::ExecutionError;
use finch_core::program::AuthoringError;
use finch_core::routines::RoutineError;
use finch_hal::PortError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::{NameError, StorageError};

/// Any failure surfaced to the operator
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("invalid program name: {0}")]
    Name(#[from] NameError),

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("{0}")]
    Authoring(AuthoringError),

    #[error("{0}")]
    Execution(ExecutionError),

    #[error("{0}")]
    Routine(RoutineError),

    #[error("{0}")]
    Port(PortError),

    #[error("could not connect to the robot")]
    Connect,

    #[error("cannot write output")]
    Output(#[from] std::io::Error),
}

impl From<AuthoringError> for AppError {
    fn from(e: AuthoringError) -> Self {
        AppError::Authoring(e)
    }
}

impl From<ExecutionError> for AppError {
    fn from(e: ExecutionError) -> Self {
        AppError::Execution(e)
    }
}

impl From<RoutineError> for AppError {
    fn from(e: RoutineError) -> Self {
        AppError::Routine(e)
    }
}

impl From<PortError> for AppError {
    fn from(e: PortError) -> Self {
        AppError::Port(e)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
