use super::Constraint;
use crate::propagators::AllDifferentArgs;
use crate::variables::DomainId;

/// Creates the [`Constraint`] that enforces that all the given `variables` are distinct.
///
/// The propagation removes the value of a fixed variable from the others and fails as soon as
/// fewer values remain than there are variables. It does not reason about Hall intervals.
pub fn all_different(variables: impl Into<Box<[DomainId]>>) -> impl Constraint {
    AllDifferentArgs {
        variables: variables.into(),
    }
}
