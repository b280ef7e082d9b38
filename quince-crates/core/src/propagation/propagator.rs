use downcast_rs::impl_downcast;
use downcast_rs::Downcast;

use super::PropagationContext;
use crate::basic_types::PropagationStatus;

// Allows going from `Box<dyn Propagator>` back to the concrete type, which the search needs to
// tighten the objective cutoff.
impl_downcast!(Propagator);

/// A propagator removes values from domains which cannot be in any solution, or reports that the
/// current domains are inconsistent with its constraint.
///
/// See the [`crate::propagation`] documentation for more details.
pub trait Propagator: Downcast {
    /// The name of the propagator, used for logging.
    fn name(&self) -> &str;

    /// Remove values which are inconsistent with the constraint, using the update methods of the
    /// [`PropagationContext`].
    ///
    /// Returns `Err` when the constraint cannot be satisfied anymore; either because an update
    /// emptied a domain ([`Inconsistency::EmptyDomain`], which the `?` operator produces from the
    /// context's update methods) or because the propagator detected a violation itself
    /// ([`Inconsistency::Conflict`]).
    ///
    /// [`Inconsistency::EmptyDomain`]: crate::basic_types::Inconsistency::EmptyDomain
    /// [`Inconsistency::Conflict`]: crate::basic_types::Inconsistency::Conflict
    fn propagate(&mut self, context: PropagationContext) -> PropagationStatus;

    /// The priority of the propagator; cheaper propagators should have a higher priority so they
    /// run before the expensive ones.
    fn priority(&self) -> Priority {
        Priority::default()
    }
}

/// The priority with which a propagator is taken off the propagation queue.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Priority {
    High = 0,
    Medium = 1,
    Low = 2,
    #[default]
    VeryLow = 3,
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}
