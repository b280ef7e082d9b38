use crate::propagation::PropagationContext;
use crate::propagation::PropagationStatus;
use crate::propagation::Priority;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::variables::DomainId;

/// The constructor for [`ElementPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct ElementArgs {
    pub(crate) array: Box<[DomainId]>,
    pub(crate) index: DomainId,
    pub(crate) rhs: DomainId,
}

impl PropagatorConstructor for ElementArgs {
    type PropagatorImpl = ElementPropagator;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        context.register_all(self.array.iter().copied());
        context.register(self.index);
        context.register(self.rhs);

        ElementPropagator {
            array: self.array,
            index: self.index,
            rhs: self.rhs,
        }
    }
}

/// Propagator for `array[index] = rhs`, with `index` zero-based.
#[derive(Clone, Debug)]
pub(crate) struct ElementPropagator {
    array: Box<[DomainId]>,
    index: DomainId,
    rhs: DomainId,
}

impl ElementPropagator {
    fn shares_a_value(context: &PropagationContext, a: DomainId, b: DomainId) -> bool {
        if context.upper_bound(a) < context.lower_bound(b)
            || context.upper_bound(b) < context.lower_bound(a)
        {
            return false;
        }

        let (smaller, larger) = if context.size(a) <= context.size(b) {
            (a, b)
        } else {
            (b, a)
        };
        context
            .iterate_domain(smaller)
            .any(|value| context.contains(larger, value))
    }
}

impl Propagator for ElementPropagator {
    fn name(&self) -> &str {
        "Element"
    }

    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        let _ = context.restrict(self.index, 0, self.array.len() as i32 - 1)?;

        let unsupported_positions = context
            .iterate_domain(self.index)
            .filter(|&position| {
                !Self::shares_a_value(&context, self.array[position as usize], self.rhs)
            })
            .collect::<Vec<_>>();
        for position in unsupported_positions {
            let _ = context.remove(self.index, position)?;
        }

        let unsupported_values = context
            .iterate_domain(self.rhs)
            .filter(|&value| {
                !context
                    .iterate_domain(self.index)
                    .any(|position| context.contains(self.array[position as usize], value))
            })
            .collect::<Vec<_>>();
        for value in unsupported_values {
            let _ = context.remove(self.rhs, value)?;
        }

        if let Some(position) = context.fixed_value(self.index) {
            let selected = self.array[position as usize];
            let outside_rhs = context
                .iterate_domain(selected)
                .filter(|&value| !context.contains(self.rhs, value))
                .collect::<Vec<_>>();
            for value in outside_rhs {
                let _ = context.remove(selected, value)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ElementArgs;
    use crate::basic_types::Inconsistency;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn index_is_limited_to_the_array() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 1);
        let b = solver.new_variable(2, 2);
        let index = solver.new_variable(-5, 5);
        let rhs = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(ElementArgs {
                array: vec![a, b].into(),
                index,
                rhs,
            })
            .expect("non-empty domains");

        solver.assert_bounds(index, 0, 1);
        assert_eq!(solver.values(rhs), vec![1, 2]);
    }

    #[test]
    fn positions_without_support_are_removed() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 2);
        let b = solver.new_variable(5, 7);
        let c = solver.new_variable(2, 6);
        let index = solver.new_variable(0, 2);
        let rhs = solver.new_variable(5, 6);

        let _ = solver
            .new_propagator(ElementArgs {
                array: vec![a, b, c].into(),
                index,
                rhs,
            })
            .expect("non-empty domains");

        assert_eq!(solver.values(index), vec![1, 2]);
        solver.assert_bounds(a, 0, 2);
    }

    #[test]
    fn fixed_index_restricts_the_selected_variable() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 9);
        let b = solver.new_variable(0, 9);
        let index = solver.new_variable(1, 1);
        let rhs = solver.new_variable(3, 4);

        let _ = solver
            .new_propagator(ElementArgs {
                array: vec![a, b].into(),
                index,
                rhs,
            })
            .expect("non-empty domains");

        solver.assert_bounds(b, 3, 4);
        solver.assert_bounds(a, 0, 9);
    }

    #[test]
    fn no_supported_position_is_inconsistent() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 1);
        let index = solver.new_variable(0, 0);
        let rhs = solver.new_variable(5, 6);

        let result = solver.new_propagator(ElementArgs {
            array: vec![a].into(),
            index,
            rhs,
        });

        assert_eq!(result, Err(Inconsistency::EmptyDomain));
    }
}
