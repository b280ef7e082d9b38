use super::Constraint;
use crate::propagators::DistanceArgs;
use crate::variables::DomainId;

/// Creates the [`Constraint`] `|a - b| >= min_distance`.
///
/// A `min_distance` of at most zero is satisfied by every assignment.
pub fn distance_at_least(a: DomainId, b: DomainId, min_distance: i32) -> impl Constraint {
    DistanceArgs { a, b, min_distance }
}

/// Creates the [`Constraint`] `a != b`.
pub fn not_equals(a: DomainId, b: DomainId) -> impl Constraint {
    distance_at_least(a, b, 1)
}
