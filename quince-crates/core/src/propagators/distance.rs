use crate::propagation::PropagationContext;
use crate::propagation::PropagationStatus;
use crate::propagation::Priority;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::variables::DomainId;

/// The constructor for [`DistancePropagator`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct DistanceArgs {
    pub(crate) a: DomainId,
    pub(crate) b: DomainId,
    pub(crate) min_distance: i32,
}

impl PropagatorConstructor for DistanceArgs {
    type PropagatorImpl = DistancePropagator;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        context.register(self.a);
        context.register(self.b);

        DistancePropagator {
            a: self.a,
            b: self.b,
            min_distance: self.min_distance,
        }
    }
}

/// Propagator for `|a - b| >= min_distance`; `a != b` is the case `min_distance = 1`.
///
/// Only fixed variables are used for filtering: once one side is fixed to `v`, every value of
/// the other side in `(v - min_distance, v + min_distance)` is removed.
#[derive(Clone, Debug)]
pub(crate) struct DistancePropagator {
    a: DomainId,
    b: DomainId,
    min_distance: i32,
}

impl DistancePropagator {
    fn exclude_around(
        &self,
        context: &mut PropagationContext,
        fixed: DomainId,
        other: DomainId,
    ) -> PropagationStatus {
        if let Some(value) = context.fixed_value(fixed) {
            let reach = self.min_distance as i64 - 1;
            let min = (value as i64 - reach).max(i32::MIN as i64) as i32;
            let max = (value as i64 + reach).min(i32::MAX as i64) as i32;

            let _ = context.remove_interval(other, min, max)?;
        }

        Ok(())
    }
}

impl Propagator for DistancePropagator {
    fn name(&self) -> &str {
        "Distance"
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        if self.min_distance <= 0 {
            return Ok(());
        }

        self.exclude_around(&mut context, self.a, self.b)?;
        self.exclude_around(&mut context, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceArgs;
    use crate::basic_types::Inconsistency;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn fixed_side_clears_a_window_around_its_value() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(5, 5);
        let b = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(DistanceArgs {
                a,
                b,
                min_distance: 3,
            })
            .expect("no empty domains");

        assert_eq!(solver.values(b), vec![0, 1, 2, 8, 9, 10]);
    }

    #[test]
    fn not_equals_removes_a_single_value() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 3);
        let b = solver.new_variable(1, 1);

        let _ = solver
            .new_propagator(DistanceArgs {
                a,
                b,
                min_distance: 1,
            })
            .expect("no empty domains");

        assert_eq!(solver.values(a), vec![0, 2, 3]);
    }

    #[test]
    fn unfixed_variables_are_left_alone() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 3);
        let b = solver.new_variable(0, 3);

        let _ = solver
            .new_propagator(DistanceArgs {
                a,
                b,
                min_distance: 2,
            })
            .expect("no empty domains");

        solver.assert_bounds(a, 0, 3);
        solver.assert_bounds(b, 0, 3);
    }

    #[test]
    fn fixed_too_close_is_inconsistent() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(4, 4);
        let b = solver.new_variable(5, 5);

        let result = solver.new_propagator(DistanceArgs {
            a,
            b,
            min_distance: 2,
        });

        assert_eq!(result, Err(Inconsistency::EmptyDomain));
    }

    #[test]
    fn non_positive_distance_is_trivially_satisfied() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(4, 4);
        let b = solver.new_variable(4, 4);

        let result = solver.new_propagator(DistanceArgs {
            a,
            b,
            min_distance: 0,
        });

        assert!(result.is_ok());
    }
}
