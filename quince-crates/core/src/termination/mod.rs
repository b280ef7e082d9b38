//! A [`TerminationCondition`] is polled by the search once per node. It tells the solver to give
//! up before the search is complete, e.g. because a fail budget ([`FailBudget`]) or a time budget
//! ([`TimeBudget`]) ran out, or because a stop was requested through a [`StopSignal`].
mod combinator;
mod fail_budget;
mod indefinite;
mod stop_signal;
mod time_budget;

pub use combinator::Combinator;
pub use fail_budget::FailBudget;
pub use indefinite::Indefinite;
pub use stop_signal::StopSignal;
pub use time_budget::TimeBudget;

/// The resource limit which made a [`TerminationCondition`] fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceLimit {
    FailLimit,
    TimeLimit,
    StopRequested,
}

/// Determines when the solver should give up searching.
pub trait TerminationCondition {
    /// Returns the limit that was hit when the solver should stop, `None` otherwise.
    fn should_stop(&mut self) -> Option<ResourceLimit>;

    /// Called by the search every time a node fails.
    fn fail_has_occurred(&mut self) {}

    /// Called by the search every time a decision is made.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> Option<ResourceLimit> {
        self.as_mut().and_then(TerminationCondition::should_stop)
    }

    fn fail_has_occurred(&mut self) {
        if let Some(t) = self {
            t.fail_has_occurred()
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(t) = self {
            t.decision_has_been_made()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> Option<ResourceLimit> {
        (**self).should_stop()
    }

    fn fail_has_occurred(&mut self) {
        (**self).fail_has_occurred()
    }

    fn decision_has_been_made(&mut self) {
        (**self).decision_has_been_made()
    }
}
