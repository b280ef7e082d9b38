use super::Constraint;
use crate::propagators::CountAtMostArgs;
use crate::propagators::CountDifferentArgs;
use crate::variables::DomainId;

/// Creates the [`Constraint`] that at most `max_occurrences` of `variables` take `value`.
pub fn count_at_most(
    variables: impl Into<Box<[DomainId]>>,
    value: i32,
    max_occurrences: i32,
) -> impl Constraint {
    CountAtMostArgs {
        variables: variables.into(),
        value,
        max_occurrences,
    }
}

/// Creates the [`Constraint`] that `num_different` equals the number of distinct values taken by
/// `variables`.
pub fn count_different(
    variables: impl Into<Box<[DomainId]>>,
    num_different: DomainId,
) -> impl Constraint {
    CountDifferentArgs {
        variables: variables.into(),
        num_different,
    }
}
