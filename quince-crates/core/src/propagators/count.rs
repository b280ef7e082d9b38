use crate::basic_types::Inconsistency;
use crate::propagation::PropagationContext;
use crate::propagation::PropagationStatus;
use crate::propagation::Priority;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::variables::DomainId;

/// The constructor for [`CountAtMostPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct CountAtMostArgs {
    pub(crate) variables: Box<[DomainId]>,
    pub(crate) value: i32,
    pub(crate) max_occurrences: i32,
}

impl PropagatorConstructor for CountAtMostArgs {
    type PropagatorImpl = CountAtMostPropagator;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        context.register_all(self.variables.iter().copied());

        CountAtMostPropagator {
            variables: self.variables,
            value: self.value,
            max_occurrences: self.max_occurrences,
        }
    }
}

/// Propagator for `|{i | x_i = value}| <= max_occurrences`.
#[derive(Clone, Debug)]
pub(crate) struct CountAtMostPropagator {
    variables: Box<[DomainId]>,
    value: i32,
    max_occurrences: i32,
}

impl Propagator for CountAtMostPropagator {
    fn name(&self) -> &str {
        "CountAtMost"
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        let num_fixed_to_value = self
            .variables
            .iter()
            .filter(|&&variable| context.fixed_value(variable) == Some(self.value))
            .count() as i64;

        if num_fixed_to_value > self.max_occurrences as i64 {
            return Err(Inconsistency::Conflict);
        }

        if num_fixed_to_value == self.max_occurrences as i64 {
            for &variable in self.variables.iter() {
                if context.fixed_value(variable) != Some(self.value) {
                    let _ = context.remove(variable, self.value)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CountAtMostArgs;
    use crate::basic_types::Inconsistency;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn reaching_the_limit_removes_the_value_elsewhere() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(2, 2);
        let y = solver.new_variable(0, 3);
        let z = solver.new_variable(2, 3);

        let _ = solver
            .new_propagator(CountAtMostArgs {
                variables: vec![x, y, z].into(),
                value: 2,
                max_occurrences: 1,
            })
            .expect("non-empty domains");

        assert_eq!(solver.values(x), vec![2]);
        assert_eq!(solver.values(y), vec![0, 1, 3]);
        assert_eq!(solver.values(z), vec![3]);
    }

    #[test]
    fn below_the_limit_nothing_changes() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(2, 2);
        let y = solver.new_variable(0, 3);

        let _ = solver
            .new_propagator(CountAtMostArgs {
                variables: vec![x, y].into(),
                value: 2,
                max_occurrences: 2,
            })
            .expect("non-empty domains");

        solver.assert_bounds(y, 0, 3);
    }

    #[test]
    fn exceeding_the_limit_is_a_conflict() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 1);
        let y = solver.new_variable(1, 1);

        let result = solver.new_propagator(CountAtMostArgs {
            variables: vec![x, y].into(),
            value: 1,
            max_occurrences: 1,
        });

        assert_eq!(result, Err(Inconsistency::Conflict));
    }
}
