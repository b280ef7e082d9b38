use crate::engine::domains::DomainStore;
use crate::variables::DomainId;

/// Read-only access to the domains for variable and value selectors.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    domains: &'a DomainStore,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(domains: &'a DomainStore) -> Self {
        SelectionContext { domains }
    }

    pub fn lower_bound(&self, variable: DomainId) -> i32 {
        self.domains.lower_bound(variable)
    }

    pub fn upper_bound(&self, variable: DomainId) -> i32 {
        self.domains.upper_bound(variable)
    }

    pub fn contains(&self, variable: DomainId, value: i32) -> bool {
        self.domains.contains(variable, value)
    }

    pub fn is_fixed(&self, variable: DomainId) -> bool {
        self.domains.is_fixed(variable)
    }

    /// The number of values left in the domain of `variable`.
    pub fn domain_size(&self, variable: DomainId) -> u64 {
        self.domains.size(variable)
    }

    /// The values in the domain of `variable` in ascending order.
    pub fn iterate_domain(&self, variable: DomainId) -> impl Iterator<Item = i32> + 'a {
        self.domains.domain_of(variable)
    }

    /// All variables of the solver, in order of creation.
    pub fn domains(&self) -> impl Iterator<Item = DomainId> {
        self.domains.domains()
    }

    #[cfg(test)]
    pub(crate) fn create_for_testing(bounds: &[(i32, i32)]) -> DomainStore {
        let mut domains = DomainStore::default();
        for &(lower_bound, upper_bound) in bounds {
            let _ = domains.create_variable(lower_bound, upper_bound);
        }
        domains
    }
}
