use std::time::Duration;
use std::time::Instant;

use super::ResourceLimit;
use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the given budget of wall-clock time has
/// passed since its creation.
#[derive(Clone, Copy, Debug)]
pub struct TimeBudget {
    started_at: Instant,
    budget: Duration,
}

impl TimeBudget {
    /// Give the solver a time budget, starting now.
    pub fn starting_now(budget: Duration) -> TimeBudget {
        TimeBudget {
            started_at: Instant::now(),
            budget,
        }
    }
}

impl TerminationCondition for TimeBudget {
    fn should_stop(&mut self) -> Option<ResourceLimit> {
        (self.started_at.elapsed() >= self.budget).then_some(ResourceLimit::TimeLimit)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::TimeBudget;
    use crate::termination::ResourceLimit;
    use crate::termination::TerminationCondition;

    #[test]
    fn zero_budget_is_exhausted() {
        let mut budget = TimeBudget::starting_now(Duration::ZERO);
        assert_eq!(budget.should_stop(), Some(ResourceLimit::TimeLimit));
    }

    #[test]
    fn large_budget_is_not_exhausted() {
        let mut budget = TimeBudget::starting_now(Duration::from_secs(3600));
        assert_eq!(budget.should_stop(), None);
    }
}
