use log::trace;

use super::DomainId;
use super::EmptyDomain;
use super::IntegerDomain;
use super::Removal;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::quince_assert_simple;

/// One undo record: what a single operation removed from `domain`.
#[derive(Clone, Debug)]
struct DomainChange {
    domain: DomainId,
    removal: Removal,
}

/// Owns the domains of all variables.
///
/// Every modification is recorded on the trail so it can be undone with
/// [`DomainStore::restore`], and the modified variable is recorded as a domain event which the
/// propagation loop drains to find out which propagators to wake up.
#[derive(Clone, Debug, Default)]
pub(crate) struct DomainStore {
    domains: KeyedVec<DomainId, IntegerDomain>,
    trail: Trail<DomainChange>,
    events: Vec<DomainId>,
}

impl DomainStore {
    pub(crate) fn create_variable(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.domains
            .push(IntegerDomain::new(lower_bound, upper_bound))
    }

    pub(crate) fn num_domains(&self) -> u32 {
        self.domains.len() as u32
    }

    pub(crate) fn domains(&self) -> impl Iterator<Item = DomainId> {
        self.domains.keys()
    }

    /// The values of `domain` in ascending order.
    pub(crate) fn domain_of(&self, domain: DomainId) -> impl Iterator<Item = i32> + '_ {
        self.domains[domain].iter()
    }

    pub(crate) fn lower_bound(&self, domain: DomainId) -> i32 {
        self.domains[domain].lower_bound()
    }

    pub(crate) fn upper_bound(&self, domain: DomainId) -> i32 {
        self.domains[domain].upper_bound()
    }

    pub(crate) fn size(&self, domain: DomainId) -> u64 {
        self.domains[domain].size()
    }

    pub(crate) fn contains(&self, domain: DomainId, value: i32) -> bool {
        self.domains[domain].contains(value)
    }

    pub(crate) fn is_empty(&self, domain: DomainId) -> bool {
        self.domains[domain].is_empty()
    }

    pub(crate) fn is_fixed(&self, domain: DomainId) -> bool {
        self.domains[domain].is_fixed()
    }

    pub(crate) fn fixed_value(&self, domain: DomainId) -> Option<i32> {
        let domain = &self.domains[domain];
        domain.is_fixed().then(|| domain.lower_bound())
    }

    /// Whether every variable has exactly one value left.
    pub(crate) fn all_fixed(&self) -> bool {
        self.domains.iter().all(IntegerDomain::is_fixed)
    }

    /// Remove all values outside of `[min, max]`.
    ///
    /// Returns whether the domain changed. If the domain becomes empty the removal is still
    /// applied (and recorded) and [`EmptyDomain`] is returned.
    pub(crate) fn restrict(
        &mut self,
        domain: DomainId,
        min: i32,
        max: i32,
    ) -> Result<bool, EmptyDomain> {
        if self.is_empty(domain) {
            return Err(EmptyDomain);
        }

        let removal = self.domains[domain].retain_range(min, max);
        self.record(domain, removal)
    }

    pub(crate) fn set_lower_bound(&mut self, domain: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.restrict(domain, value, i32::MAX)
    }

    pub(crate) fn set_upper_bound(&mut self, domain: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.restrict(domain, i32::MIN, value)
    }

    pub(crate) fn fix(&mut self, domain: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.restrict(domain, value, value)
    }

    pub(crate) fn remove_value(&mut self, domain: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.remove_interval(domain, value, value)
    }

    /// Remove all values inside of `[min, max]`.
    pub(crate) fn remove_interval(
        &mut self,
        domain: DomainId,
        min: i32,
        max: i32,
    ) -> Result<bool, EmptyDomain> {
        if self.is_empty(domain) {
            return Err(EmptyDomain);
        }

        let removal = self.domains[domain].remove_range(min, max);
        self.record(domain, removal)
    }

    fn record(&mut self, domain: DomainId, removal: Option<Removal>) -> Result<bool, EmptyDomain> {
        let Some(removal) = removal else {
            return Ok(false);
        };

        self.trail.push(DomainChange { domain, removal });
        self.events.push(domain);

        if self.is_empty(domain) {
            trace!("Domain of {domain} became empty");
            Err(EmptyDomain)
        } else {
            Ok(true)
        }
    }

    pub(crate) fn new_checkpoint(&mut self) {
        self.trail.new_checkpoint();
    }

    pub(crate) fn checkpoint(&self) -> usize {
        self.trail.checkpoint()
    }

    /// Undo every change made after `checkpoint` was opened. Pending domain events are
    /// discarded, since they refer to changes which no longer exist.
    pub(crate) fn restore(&mut self, checkpoint: usize) {
        quince_assert_simple!(checkpoint <= self.checkpoint());

        self.events.clear();
        if checkpoint == self.checkpoint() {
            return;
        }

        for change in self.trail.undo_to(checkpoint) {
            self.domains[change.domain].restore(&change.removal);
        }
    }

    /// Take the variables modified since the previous call. A variable may appear more than
    /// once.
    pub(crate) fn drain_events(&mut self) -> std::vec::Drain<'_, DomainId> {
        self.events.drain(..)
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::DomainStore;
    use crate::engine::domains::EmptyDomain;

    #[test]
    fn restrict_reports_whether_anything_changed() {
        let mut store = DomainStore::default();
        let x = store.create_variable(0, 10);

        assert_eq!(store.restrict(x, -5, 20), Ok(false));
        assert_eq!(store.restrict(x, 2, 8), Ok(true));
        assert_eq!(store.lower_bound(x), 2);
        assert_eq!(store.upper_bound(x), 8);
        assert_eq!(store.size(x), 7);
    }

    #[test]
    fn emptying_a_domain_is_applied_and_reported() {
        let mut store = DomainStore::default();
        let x = store.create_variable(0, 3);

        assert_eq!(store.restrict(x, 5, 9), Err(EmptyDomain));
        assert!(store.is_empty(x));
        assert_eq!(store.remove_value(x, 1), Err(EmptyDomain));
    }

    #[test]
    fn restore_brings_back_the_state_of_the_checkpoint() {
        let mut store = DomainStore::default();
        let x = store.create_variable(0, 9);
        let y = store.create_variable(-2, 2);
        let _ = store.remove_value(x, 4);

        let before = store.clone();
        let checkpoint = store.checkpoint();
        store.new_checkpoint();

        let _ = store.remove_value(x, 0);
        let _ = store.set_upper_bound(x, 6);
        let _ = store.fix(y, 1);
        store.new_checkpoint();
        let _ = store.restrict(x, 100, 200);

        store.restore(checkpoint);

        assert_eq!(
            store.domain_of(x).collect::<Vec<_>>(),
            before.domain_of(x).collect::<Vec<_>>()
        );
        assert_eq!(store.domain_of(y).collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2]);
        assert_eq!(store.lower_bound(x), 0);
        assert_eq!(store.upper_bound(x), 9);
        assert_eq!(store.checkpoint(), checkpoint);
    }

    #[test]
    fn every_change_produces_an_event() {
        let mut store = DomainStore::default();
        let x = store.create_variable(0, 9);
        let y = store.create_variable(0, 9);

        let _ = store.set_lower_bound(x, 3);
        let _ = store.set_lower_bound(x, 1);
        let _ = store.remove_value(y, 5);

        assert_eq!(store.drain_events().collect::<Vec<_>>(), vec![x, y]);
        assert_eq!(store.drain_events().count(), 0);
    }

    #[test]
    fn fixed_value_is_only_reported_for_singletons() {
        let mut store = DomainStore::default();
        let x = store.create_variable(0, 1);

        assert_eq!(store.fixed_value(x), None);
        let _ = store.remove_value(x, 0);
        assert_eq!(store.fixed_value(x), Some(1));
    }

    #[test]
    fn full_range_variable_keeps_its_holes_across_restore() {
        let mut store = DomainStore::default();
        let x = store.create_variable(i32::MIN, i32::MAX);
        assert_eq!(store.size(x), 1 << 32);

        let _ = store.remove_value(x, 0);
        let checkpoint = store.checkpoint();
        store.new_checkpoint();

        let _ = store.restrict(x, -2, 2);
        let _ = store.remove_value(x, -2);
        assert_eq!(store.domain_of(x).collect::<Vec<_>>(), vec![-1, 1, 2]);

        store.restore(checkpoint);

        assert_eq!(store.size(x), (1 << 32) - 1);
        assert!(!store.contains(x, 0));
        assert_eq!((store.lower_bound(x), store.upper_bound(x)), (i32::MIN, i32::MAX));
    }
}
