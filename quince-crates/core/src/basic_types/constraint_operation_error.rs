use thiserror::Error;

use crate::variables::DomainId;

/// Errors related to adding constraints or an objective to the [`Solver`](crate::Solver).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    #[error("Variable {domain} is not part of the model (the model has {num_domains} variables)")]
    InvalidConstraintScope { domain: DomainId, num_domains: u32 },
    #[error("Invalid constraint arguments: {0}")]
    InvalidArguments(String),
}
