use crate::containers::HashSet;
use crate::propagation::PropagationContext;
use crate::propagation::PropagationStatus;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::variables::DomainId;

/// The constructor for [`CountDifferentPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct CountDifferentArgs {
    pub(crate) variables: Box<[DomainId]>,
    pub(crate) num_different: DomainId,
}

impl PropagatorConstructor for CountDifferentArgs {
    type PropagatorImpl = CountDifferentPropagator;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        context.register_all(self.variables.iter().copied());
        context.register(self.num_different);

        CountDifferentPropagator {
            variables: self.variables,
            num_different: self.num_different,
        }
    }
}

/// Propagator for `num_different = |{x_i}|`, the number of distinct values taken by the
/// variables.
///
/// The distinct fixed values give a lower bound, and the size of the union of the domains (or
/// the number of variables, if smaller) gives an upper bound. When the upper bound of
/// `num_different` is already met by the fixed values, the unfixed variables have to reuse one
/// of those values.
#[derive(Clone, Debug)]
pub(crate) struct CountDifferentPropagator {
    variables: Box<[DomainId]>,
    num_different: DomainId,
}

impl Propagator for CountDifferentPropagator {
    fn name(&self) -> &str {
        "CountDifferent"
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        let fixed_values = self
            .variables
            .iter()
            .filter_map(|&variable| context.fixed_value(variable))
            .collect::<HashSet<_>>();
        let union_size = self
            .variables
            .iter()
            .flat_map(|&variable| context.iterate_domain(variable))
            .collect::<HashSet<_>>()
            .len();

        let lower_bound = fixed_values.len() as i32;
        let upper_bound = union_size.min(self.variables.len()) as i32;
        let _ = context.restrict(self.num_different, lower_bound, upper_bound)?;

        if context.upper_bound(self.num_different) == lower_bound {
            for &variable in self.variables.iter() {
                if context.is_fixed(variable) {
                    continue;
                }

                let unused = context
                    .iterate_domain(variable)
                    .filter(|value| !fixed_values.contains(value))
                    .collect::<Vec<_>>();
                for value in unused {
                    let _ = context.remove(variable, value)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CountDifferentArgs;
    use crate::basic_types::Inconsistency;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn count_is_bounded_by_fixed_values_and_domain_union() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 1);
        let y = solver.new_variable(3, 3);
        let z = solver.new_variable(1, 3);
        let count = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(CountDifferentArgs {
                variables: vec![x, y, z].into(),
                num_different: count,
            })
            .expect("non-empty domains");

        solver.assert_bounds(count, 2, 3);
    }

    #[test]
    fn count_at_its_minimum_forces_reuse_of_values() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 1);
        let y = solver.new_variable(4, 4);
        let z = solver.new_variable(0, 5);
        let count = solver.new_variable(0, 2);

        let _ = solver
            .new_propagator(CountDifferentArgs {
                variables: vec![x, y, z].into(),
                num_different: count,
            })
            .expect("non-empty domains");

        solver.assert_bounds(count, 2, 2);
        assert_eq!(solver.values(z), vec![1, 4]);
    }

    #[test]
    fn too_many_distinct_fixed_values_fail() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 1);
        let y = solver.new_variable(2, 2);
        let count = solver.new_variable(0, 1);

        let result = solver.new_propagator(CountDifferentArgs {
            variables: vec![x, y].into(),
            num_different: count,
        });

        assert_eq!(result, Err(Inconsistency::EmptyDomain));
    }
}
