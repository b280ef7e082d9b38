use log::trace;

use super::constraint_registry::ConstraintRegistry;
use super::domains::DomainStore;
use super::propagator_queue::PropagatorQueue;
use crate::basic_types::Inconsistency;
use crate::propagation::PropagationContext;
use crate::propagation::PropagatorId;

/// The result of running propagation to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// No propagator can remove any further value.
    Fixpoint,
    /// A propagator detected that the current domains admit no solution.
    Contradiction(Conflict),
}

impl PropagationOutcome {
    pub fn is_contradiction(&self) -> bool {
        matches!(self, PropagationOutcome::Contradiction(_))
    }
}

/// Which propagator failed, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub propagator: PropagatorId,
    pub cause: Inconsistency,
}

/// Runs propagators until fixpoint, using the domain events recorded by the [`DomainStore`] to
/// decide which propagators to wake up.
#[derive(Debug, Default)]
pub(crate) struct PropagationLoop {
    queue: PropagatorQueue,
    num_propagations: u64,
}

impl PropagationLoop {
    /// Schedule a propagator regardless of domain events, e.g. because it was just posted or its
    /// parameters changed.
    pub(crate) fn enqueue(&mut self, propagator: PropagatorId, registry: &ConstraintRegistry) {
        self.queue
            .enqueue(propagator, registry.get(propagator).priority());
    }

    pub(crate) fn num_propagations(&self) -> u64 {
        self.num_propagations
    }

    pub(crate) fn clear(&mut self) {
        self.queue.clear();
    }

    pub(crate) fn propagate(
        &mut self,
        domains: &mut DomainStore,
        registry: &mut ConstraintRegistry,
    ) -> PropagationOutcome {
        self.enqueue_watchers(domains, registry);

        while let Some(propagator) = self.queue.pop() {
            self.num_propagations += 1;

            let status = registry
                .get_mut(propagator)
                .propagate(PropagationContext::new(domains));

            if let Err(cause) = status {
                trace!(
                    "{} ({propagator}) failed: {cause:?}",
                    registry.get(propagator).name()
                );

                self.queue.clear();
                domains.clear_events();

                return PropagationOutcome::Contradiction(Conflict { propagator, cause });
            }

            self.enqueue_watchers(domains, registry);
        }

        PropagationOutcome::Fixpoint
    }

    fn enqueue_watchers(&mut self, domains: &mut DomainStore, registry: &ConstraintRegistry) {
        for domain in domains.drain_events() {
            for &watcher in registry.watchers(domain) {
                self.queue.enqueue(watcher, registry.get(watcher).priority());
            }
        }
    }
}
