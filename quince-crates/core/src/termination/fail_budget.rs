use super::ResourceLimit;
use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once a number of fails has been reached.
#[derive(Clone, Copy, Debug)]
pub struct FailBudget {
    fails: u64,
    budget: u64,
}

impl FailBudget {
    /// Stop after `budget` fails. A budget of zero stops at the first poll.
    pub fn new(budget: u64) -> FailBudget {
        FailBudget { fails: 0, budget }
    }
}

impl TerminationCondition for FailBudget {
    fn should_stop(&mut self) -> Option<ResourceLimit> {
        (self.fails >= self.budget).then_some(ResourceLimit::FailLimit)
    }

    fn fail_has_occurred(&mut self) {
        self.fails += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::FailBudget;
    use crate::termination::ResourceLimit;
    use crate::termination::TerminationCondition;

    #[test]
    fn zero_budget_stops_immediately() {
        assert_eq!(
            FailBudget::new(0).should_stop(),
            Some(ResourceLimit::FailLimit)
        );
    }

    #[test]
    fn counts_fails_up_to_the_budget() {
        let mut budget = FailBudget::new(2);
        budget.fail_has_occurred();
        assert_eq!(budget.should_stop(), None);

        budget.decision_has_been_made();
        assert_eq!(budget.should_stop(), None);

        budget.fail_has_occurred();
        assert_eq!(budget.should_stop(), Some(ResourceLimit::FailLimit));
    }
}
