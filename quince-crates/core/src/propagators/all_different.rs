use crate::basic_types::Inconsistency;
use crate::containers::HashSet;
use crate::propagation::PropagationContext;
use crate::propagation::PropagationStatus;
use crate::propagation::Priority;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::variables::DomainId;

/// The constructor for [`AllDifferentPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct AllDifferentArgs {
    pub(crate) variables: Box<[DomainId]>,
}

impl PropagatorConstructor for AllDifferentArgs {
    type PropagatorImpl = AllDifferentPropagator;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        context.register_all(self.variables.iter().copied());

        AllDifferentPropagator {
            variables: self.variables,
        }
    }
}

/// Value-exclusion propagator for all-different with a pigeonhole check.
///
/// A fixed variable removes its value from every other variable. Additionally, if the union of
/// the domains has fewer values than there are variables, no assignment can exist. Hall intervals
/// are not detected.
#[derive(Clone, Debug)]
pub(crate) struct AllDifferentPropagator {
    variables: Box<[DomainId]>,
}

impl Propagator for AllDifferentPropagator {
    fn name(&self) -> &str {
        "AllDifferent"
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        for (index, &variable) in self.variables.iter().enumerate() {
            let Some(value) = context.fixed_value(variable) else {
                continue;
            };

            for (other_index, &other) in self.variables.iter().enumerate() {
                if other_index != index {
                    let _ = context.remove(other, value)?;
                }
            }
        }

        let union = self
            .variables
            .iter()
            .flat_map(|&variable| context.iterate_domain(variable))
            .collect::<HashSet<_>>();
        if union.len() < self.variables.len() {
            return Err(Inconsistency::Conflict);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AllDifferentArgs;
    use crate::basic_types::Inconsistency;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn fixed_values_are_removed_from_the_others() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 1);
        let y = solver.new_variable(1, 3);
        let z = solver.new_variable(0, 2);

        let _ = solver
            .new_propagator(AllDifferentArgs {
                variables: vec![x, y, z].into(),
            })
            .expect("no empty domains");

        assert_eq!(solver.values(y), vec![2, 3]);
        assert_eq!(solver.values(z), vec![0, 2]);
    }

    #[test]
    fn two_variables_fixed_to_the_same_value_fail() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(2, 2);
        let y = solver.new_variable(2, 2);

        let result = solver.new_propagator(AllDifferentArgs {
            variables: vec![x, y].into(),
        });

        assert_eq!(result, Err(Inconsistency::EmptyDomain));
    }

    #[test]
    fn too_few_values_for_the_variables_fail() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 1);
        let y = solver.new_variable(0, 1);
        let z = solver.new_variable(0, 1);

        let result = solver.new_propagator(AllDifferentArgs {
            variables: vec![x, y, z].into(),
        });

        assert_eq!(result, Err(Inconsistency::Conflict));
    }

    #[test]
    fn removals_cascade_through_the_propagation_loop() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 0);
        let y = solver.new_variable(0, 1);
        let z = solver.new_variable(0, 2);

        let _ = solver
            .new_propagator(AllDifferentArgs {
                variables: vec![x, y, z].into(),
            })
            .expect("no empty domains");
        let outcome = solver.propagate_until_fixed_point();

        assert!(!outcome.is_contradiction());
        assert_eq!(solver.values(y), vec![1]);
        assert_eq!(solver.values(z), vec![2]);
    }
}
