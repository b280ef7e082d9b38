use thiserror::Error;

use quince_solver::outputs::SolveError;
use quince_solver::ConstraintOperationError;

pub(crate) type QuinceResult<T> = Result<T, QuinceError>;

#[derive(Error, Debug)]
pub(crate) enum QuinceError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The data file was invalid, more details: {0}")]
    InvalidData(String),
    #[error("Failed to build the model, more details: {0}")]
    Model(#[from] ConstraintOperationError),
    #[error("Failed to solve the model, more details: {0}")]
    Solve(#[from] SolveError),
}

impl QuinceError {
    pub(crate) fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }
}
