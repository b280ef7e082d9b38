use std::fmt::Debug;
use std::fmt::Formatter;

use log::debug;

use crate::basic_types::ConstraintOperationError;
use crate::containers::KeyedVec;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::PropagatorId;
use crate::variables::DomainId;

/// Holds the posted propagators and, for every variable, the propagators that are woken up when
/// its domain changes.
#[derive(Default)]
pub(crate) struct ConstraintRegistry {
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
    watchers: KeyedVec<DomainId, Vec<PropagatorId>>,
}

impl Debug for ConstraintRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self
            .propagators
            .iter()
            .map(|propagator| propagator.name())
            .collect::<Vec<_>>();

        f.debug_struct("ConstraintRegistry")
            .field("propagators", &names)
            .field("watchers", &self.watchers)
            .finish()
    }
}

impl ConstraintRegistry {
    /// Create the propagator and subscribe it to the variables it registers.
    ///
    /// Fails without changing the registry if any registered variable was not created by the
    /// domain store holding `num_domains` variables.
    pub(crate) fn post<Constructor: PropagatorConstructor>(
        &mut self,
        constructor: Constructor,
        num_domains: u32,
    ) -> Result<PropagatorId, ConstraintOperationError> {
        let mut context = PropagatorConstructorContext::default();
        let propagator = constructor.create(&mut context);
        let mut scope = context.into_registered();

        if let Some(&domain) = scope.iter().find(|domain| domain.id() >= num_domains) {
            return Err(ConstraintOperationError::InvalidConstraintScope {
                domain,
                num_domains,
            });
        }

        scope.sort_unstable();
        scope.dedup();

        let id = self.propagators.push(Box::new(propagator));
        debug!(
            "Posted {} as {id} with a scope of {} variables",
            self.propagators[id].name(),
            scope.len()
        );

        for domain in scope {
            self.watchers.accomodate(domain, vec![]);
            self.watchers[domain].push(id);
        }

        Ok(id)
    }

    pub(crate) fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = PropagatorId> {
        self.propagators.keys()
    }

    /// The propagators subscribed to `domain`.
    pub(crate) fn watchers(&self, domain: DomainId) -> &[PropagatorId] {
        self.watchers
            .get(domain)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn get(&self, id: PropagatorId) -> &dyn Propagator {
        self.propagators[id].as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: PropagatorId) -> &mut dyn Propagator {
        self.propagators[id].as_mut()
    }

    /// Access the propagator as its concrete type, if it is a `P`.
    pub(crate) fn downcast_mut<P: Propagator>(&mut self, id: PropagatorId) -> Option<&mut P> {
        self.propagators
            .get_mut(id)
            .and_then(|propagator| propagator.downcast_mut::<P>())
    }
}

#[cfg(test)]
mod tests {
    use super::ConstraintRegistry;
    use crate::basic_types::ConstraintOperationError;
    use crate::propagation::PropagationContext;
    use crate::propagation::PropagationStatus;
    use crate::propagation::Propagator;
    use crate::propagation::PropagatorConstructor;
    use crate::propagation::PropagatorConstructorContext;
    use crate::variables::DomainId;

    struct Watching(Vec<DomainId>);

    struct Noop;

    impl Propagator for Noop {
        fn name(&self) -> &str {
            "Noop"
        }

        fn propagate(&mut self, _: PropagationContext) -> PropagationStatus {
            Ok(())
        }
    }

    impl PropagatorConstructor for Watching {
        type PropagatorImpl = Noop;

        fn create(self, context: &mut PropagatorConstructorContext) -> Noop {
            context.register_all(self.0);
            Noop
        }
    }

    #[test]
    fn watchers_are_registered_per_variable() {
        let mut registry = ConstraintRegistry::default();
        let x = DomainId::new(0);
        let y = DomainId::new(1);

        let first = registry.post(Watching(vec![x, y, x]), 2).expect("valid scope");
        let second = registry.post(Watching(vec![y]), 2).expect("valid scope");

        assert_eq!(registry.watchers(x), &[first]);
        assert_eq!(registry.watchers(y), &[first, second]);
        assert!(registry.downcast_mut::<Noop>(second).is_some());
    }

    #[test]
    fn unknown_variables_are_rejected() {
        let mut registry = ConstraintRegistry::default();

        let result = registry.post(Watching(vec![DomainId::new(0), DomainId::new(3)]), 2);

        assert_eq!(
            result,
            Err(ConstraintOperationError::InvalidConstraintScope {
                domain: DomainId::new(3),
                num_domains: 2
            })
        );
        assert_eq!(registry.num_propagators(), 0);
        assert!(registry.watchers(DomainId::new(0)).is_empty());
    }
}
