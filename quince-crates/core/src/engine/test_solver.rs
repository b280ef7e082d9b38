#![cfg(any(test, doc))]
//! A small harness for testing propagators in isolation.
use super::constraint_registry::ConstraintRegistry;
use super::domains::DomainStore;
use super::domains::EmptyDomain;
use super::propagation_loop::PropagationLoop;
use super::propagation_loop::PropagationOutcome;
use crate::basic_types::Inconsistency;
use crate::propagation::PropagationContext;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorId;
use crate::variables::DomainId;

#[derive(Debug, Default)]
pub(crate) struct TestSolver {
    pub(crate) domains: DomainStore,
    pub(crate) registry: ConstraintRegistry,
    propagation: PropagationLoop,
}

impl TestSolver {
    pub(crate) fn new_variable(&mut self, lb: i32, ub: i32) -> DomainId {
        self.domains.create_variable(lb, ub)
    }

    /// Post the propagator and run it once.
    pub(crate) fn new_propagator<Constructor: PropagatorConstructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<PropagatorId, Inconsistency> {
        let id = self
            .registry
            .post(constructor, self.domains.num_domains())
            .expect("propagators in tests have a valid scope");

        self.propagate(id)?;
        Ok(id)
    }

    /// Run a single propagator once, without waking up anything else.
    pub(crate) fn propagate(&mut self, propagator: PropagatorId) -> Result<(), Inconsistency> {
        let result = self
            .registry
            .get_mut(propagator)
            .propagate(PropagationContext::new(&mut self.domains));
        self.domains.clear_events();
        result
    }

    /// Run every propagator that is affected by the changes since the last call.
    pub(crate) fn propagate_until_fixed_point(&mut self) -> PropagationOutcome {
        for id in self.registry.ids().collect::<Vec<_>>() {
            self.propagation.enqueue(id, &self.registry);
        }
        self.propagation
            .propagate(&mut self.domains, &mut self.registry)
    }

    pub(crate) fn contains(&self, var: DomainId, value: i32) -> bool {
        self.domains.contains(var, value)
    }

    pub(crate) fn lower_bound(&self, var: DomainId) -> i32 {
        self.domains.lower_bound(var)
    }

    pub(crate) fn upper_bound(&self, var: DomainId) -> i32 {
        self.domains.upper_bound(var)
    }

    pub(crate) fn remove(&mut self, var: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.domains.remove_value(var, value)
    }

    pub(crate) fn set_lower_bound(&mut self, var: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.domains.set_lower_bound(var, value)
    }

    pub(crate) fn set_upper_bound(&mut self, var: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.domains.set_upper_bound(var, value)
    }

    pub(crate) fn fix(&mut self, var: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.domains.fix(var, value)
    }

    pub(crate) fn values(&self, var: DomainId) -> Vec<i32> {
        self.domains.domain_of(var).collect()
    }

    pub(crate) fn assert_bounds(&self, var: DomainId, lb: i32, ub: i32) {
        let actual_lb = self.lower_bound(var);
        let actual_ub = self.upper_bound(var);

        assert_eq!(
            (lb, ub),
            (actual_lb, actual_ub),
            "The expected bounds [{lb}..{ub}] did not match the actual bounds [{actual_lb}..{actual_ub}]"
        );
    }
}
