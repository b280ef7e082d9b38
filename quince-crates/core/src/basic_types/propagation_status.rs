use crate::engine::domains::EmptyDomain;

/// The result of invoking a filtering algorithm.
pub type PropagationStatus = Result<(), Inconsistency>;

/// The ways in which a filtering algorithm can detect that the current node is infeasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistency {
    /// A domain update left a variable without values.
    EmptyDomain,
    /// The propagator detected a violation without emptying a domain.
    Conflict,
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}
