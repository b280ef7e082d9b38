//! The building blocks for propagators.
//!
//! A propagator takes a set of variables with their current domains and removes the values which
//! cannot be part of any solution of its constraint: it maps `D ↦ D'` with `D'_i ⊆ D_i` for every
//! variable. For `x ∈ {0}`, `y ∈ {0, 1}` and `x != y`, the not-equals propagator produces
//! `x ∈ {0}`, `y ∈ {1}`.
//!
//! A propagator is at fixpoint when applying it changes nothing. Propagators are not required to
//! reach their own fixpoint in one call; the propagation loop calls them again whenever one of
//! the variables they registered for changes, until no propagator changes any domain.
//!
//! A propagator is created by a [`PropagatorConstructor`], which registers the variables the
//! propagator has to be woken up for through the [`PropagatorConstructorContext`]. The registered
//! variables are also the scope of the constraint: posting a propagator whose scope contains a
//! variable that the solver does not know is rejected.
mod constructor;
mod context;
mod propagator;
mod propagator_id;

pub use constructor::*;
pub use context::*;
pub use propagator::*;
pub use propagator_id::PropagatorId;

pub use crate::basic_types::Inconsistency;
pub use crate::basic_types::PropagationStatus;
