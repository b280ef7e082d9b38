//! Storage of the finite integer domains of all variables.
mod domain_id;
mod domain_store;
mod integer_domain;

pub use domain_id::DomainId;
pub(crate) use domain_store::DomainStore;
use integer_domain::IntegerDomain;
use integer_domain::Removal;

/// Returned when a domain operation removed the last value of a domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain;
