use super::Propagator;
use crate::variables::DomainId;

/// A propagator constructor creates a fully initialised instance of a [`Propagator`].
///
/// The constructor registers the variables the propagator depends on; these form the scope of
/// the constraint and determine when the propagator is enqueued.
pub trait PropagatorConstructor {
    /// The propagator that is produced by this constructor.
    type PropagatorImpl: Propagator;

    /// Create the propagator instance from `Self`.
    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl;
}

/// Collects the variables a new propagator subscribes to.
#[derive(Debug, Default)]
pub struct PropagatorConstructorContext {
    registered: Vec<DomainId>,
}

impl PropagatorConstructorContext {
    /// Subscribe the propagator to changes of `variable`.
    pub fn register(&mut self, variable: DomainId) {
        self.registered.push(variable);
    }

    /// Subscribe the propagator to changes of every variable in `variables`.
    pub fn register_all(&mut self, variables: impl IntoIterator<Item = DomainId>) {
        self.registered.extend(variables);
    }

    pub(crate) fn into_registered(self) -> Vec<DomainId> {
        self.registered
    }
}
