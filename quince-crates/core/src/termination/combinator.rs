use super::ResourceLimit;
use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers when one of two given [`TerminationCondition`]s
/// triggers. When both would trigger, the limit of the first one is reported.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> Option<ResourceLimit> {
        self.t1.should_stop().or_else(|| self.t2.should_stop())
    }

    fn fail_has_occurred(&mut self) {
        self.t1.fail_has_occurred();
        self.t2.fail_has_occurred();
    }

    fn decision_has_been_made(&mut self) {
        self.t1.decision_has_been_made();
        self.t2.decision_has_been_made();
    }
}

#[cfg(test)]
mod tests {
    use super::Combinator;
    use crate::termination::FailBudget;
    use crate::termination::Indefinite;
    use crate::termination::ResourceLimit;
    use crate::termination::TerminationCondition;

    #[test]
    fn fires_when_either_side_fires() {
        let mut termination = Combinator::new(Indefinite, FailBudget::new(1));
        assert_eq!(termination.should_stop(), None);

        termination.fail_has_occurred();
        assert_eq!(termination.should_stop(), Some(ResourceLimit::FailLimit));
    }
}
