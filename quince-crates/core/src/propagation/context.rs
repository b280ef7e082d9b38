use crate::engine::domains::DomainStore;
use crate::engine::domains::EmptyDomain;
use crate::variables::DomainId;

/// The view a [`Propagator`](super::Propagator) gets of the domains while it propagates.
///
/// The update methods return whether the domain changed, or [`EmptyDomain`] when the update left
/// the variable without values.
#[derive(Debug)]
pub struct PropagationContext<'a> {
    domains: &'a mut DomainStore,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(domains: &'a mut DomainStore) -> Self {
        PropagationContext { domains }
    }

    pub fn lower_bound(&self, variable: DomainId) -> i32 {
        self.domains.lower_bound(variable)
    }

    pub fn upper_bound(&self, variable: DomainId) -> i32 {
        self.domains.upper_bound(variable)
    }

    pub fn size(&self, variable: DomainId) -> u64 {
        self.domains.size(variable)
    }

    pub fn contains(&self, variable: DomainId, value: i32) -> bool {
        self.domains.contains(variable, value)
    }

    pub fn is_fixed(&self, variable: DomainId) -> bool {
        self.domains.is_fixed(variable)
    }

    pub fn fixed_value(&self, variable: DomainId) -> Option<i32> {
        self.domains.fixed_value(variable)
    }

    /// The values in the domain of `variable` in ascending order.
    pub fn iterate_domain(&self, variable: DomainId) -> impl Iterator<Item = i32> + '_ {
        self.domains.domain_of(variable)
    }

    pub fn set_lower_bound(&mut self, variable: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.domains.set_lower_bound(variable, value)
    }

    pub fn set_upper_bound(&mut self, variable: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.domains.set_upper_bound(variable, value)
    }

    pub fn restrict(&mut self, variable: DomainId, min: i32, max: i32) -> Result<bool, EmptyDomain> {
        self.domains.restrict(variable, min, max)
    }

    pub fn remove(&mut self, variable: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.domains.remove_value(variable, value)
    }

    /// Remove every value in `[min, max]` from the domain of `variable`.
    pub fn remove_interval(
        &mut self,
        variable: DomainId,
        min: i32,
        max: i32,
    ) -> Result<bool, EmptyDomain> {
        self.domains.remove_interval(variable, min, max)
    }
}
