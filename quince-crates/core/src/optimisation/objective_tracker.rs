use super::OptimisationDirection;

/// Keeps track of the best proven bound and the best found objective value (the incumbent)
/// during a solve, in the direction of the objective.
///
/// The incumbent only improves. The bound only moves towards the incumbent and never crosses
/// it: for minimisation `bound <= incumbent` holds at all times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveTracker {
    direction: OptimisationDirection,
    bound: Option<i64>,
    incumbent: Option<i64>,
}

impl ObjectiveTracker {
    pub fn new(direction: OptimisationDirection) -> Self {
        ObjectiveTracker {
            direction,
            bound: None,
            incumbent: None,
        }
    }

    pub fn direction(&self) -> OptimisationDirection {
        self.direction
    }

    pub fn bound(&self) -> Option<i64> {
        self.bound
    }

    pub fn incumbent(&self) -> Option<i64> {
        self.incumbent
    }

    /// Record a newly proven bound. Returns whether the bound improved.
    ///
    /// A bound beyond the incumbent is clamped to the incumbent.
    pub fn update_bound(&mut self, new_bound: i64) -> bool {
        let new_bound = match (self.direction, self.incumbent) {
            (OptimisationDirection::Minimise, Some(incumbent)) => new_bound.min(incumbent),
            (OptimisationDirection::Maximise, Some(incumbent)) => new_bound.max(incumbent),
            (_, None) => new_bound,
        };

        // A tighter bound is one which is worse in the direction of the objective.
        let improves = self
            .bound
            .map_or(true, |bound| self.direction.is_better(bound, new_bound));
        if improves {
            self.bound = Some(new_bound);
        }
        improves
    }

    /// Record the objective value of a new solution. Returns whether it is strictly better than
    /// the current incumbent; a worse or equal value is ignored.
    pub fn update_incumbent(&mut self, value: i64) -> bool {
        let improves = self
            .incumbent
            .map_or(true, |incumbent| self.direction.is_better(value, incumbent));
        if !improves {
            return false;
        }

        self.incumbent = Some(value);
        if let Some(bound) = self.bound {
            if !self.direction.is_better(bound, value) {
                self.bound = Some(value);
            }
        }
        true
    }

    /// Set the bound to the incumbent, which happens when the search proved that nothing better
    /// exists.
    pub fn close(&mut self) -> bool {
        match self.incumbent {
            Some(incumbent) if self.bound != Some(incumbent) => {
                self.bound = Some(incumbent);
                true
            }
            _ => false,
        }
    }

    /// The relative gap `|incumbent - bound| / max(1e-10, |incumbent|)`, or `None` while either
    /// the bound or the incumbent is unknown.
    pub fn gap(&self) -> Option<f64> {
        let bound = self.bound?;
        let incumbent = self.incumbent?;

        Some((incumbent - bound).abs() as f64 / (incumbent.abs() as f64).max(1e-10))
    }
}

#[cfg(test)]
mod tests {
    use super::ObjectiveTracker;
    use crate::optimisation::OptimisationDirection;

    #[test]
    fn incumbent_only_improves() {
        let mut tracker = ObjectiveTracker::new(OptimisationDirection::Minimise);

        assert!(tracker.update_incumbent(10));
        assert!(!tracker.update_incumbent(12));
        assert!(!tracker.update_incumbent(10));
        assert!(tracker.update_incumbent(7));
        assert_eq!(tracker.incumbent(), Some(7));
    }

    #[test]
    fn bound_only_tightens_and_is_clamped() {
        let mut tracker = ObjectiveTracker::new(OptimisationDirection::Minimise);

        assert!(tracker.update_bound(2));
        assert!(!tracker.update_bound(1));
        assert!(tracker.update_incumbent(5));
        assert!(tracker.update_bound(9));

        assert_eq!(tracker.bound(), Some(5));
        assert_eq!(tracker.gap(), Some(0.0));
    }

    #[test]
    fn maximisation_mirrors_minimisation() {
        let mut tracker = ObjectiveTracker::new(OptimisationDirection::Maximise);

        assert!(tracker.update_bound(100));
        assert!(tracker.update_bound(80));
        assert!(!tracker.update_bound(90));
        assert!(tracker.update_incumbent(40));
        assert!(tracker.update_incumbent(60));
        assert!(!tracker.update_incumbent(50));

        assert_eq!(tracker.bound(), Some(80));
        assert_eq!(tracker.incumbent(), Some(60));
        assert_eq!(tracker.gap(), Some(20.0 / 60.0));
    }

    #[test]
    fn gap_is_undefined_without_both_values() {
        let mut tracker = ObjectiveTracker::new(OptimisationDirection::Minimise);
        assert_eq!(tracker.gap(), None);

        let _ = tracker.update_incumbent(0);
        assert_eq!(tracker.gap(), None);

        let _ = tracker.update_bound(-3);
        assert_eq!(tracker.gap(), Some(3.0 / 1e-10));
    }

    #[test]
    fn close_sets_the_bound_to_the_incumbent() {
        let mut tracker = ObjectiveTracker::new(OptimisationDirection::Minimise);
        assert!(!tracker.close());

        let _ = tracker.update_bound(3);
        let _ = tracker.update_incumbent(8);
        assert!(tracker.close());
        assert_eq!(tracker.bound(), Some(8));
    }
}
