use super::Constraint;
use crate::propagators::ElementArgs;
use crate::variables::DomainId;
use crate::ConstraintOperationError;
use crate::Solver;

struct ElementConstraint {
    array: Box<[DomainId]>,
    index: DomainId,
    rhs: DomainId,
}

/// Creates the [`Constraint`] `array[index] = rhs`, with `index` counted from zero.
///
/// Posting fails with [`ConstraintOperationError::InvalidArguments`] when `array` is empty.
pub fn element(
    index: DomainId,
    array: impl Into<Box<[DomainId]>>,
    rhs: DomainId,
) -> impl Constraint {
    ElementConstraint {
        array: array.into(),
        index,
        rhs,
    }
}

impl Constraint for ElementConstraint {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.array.is_empty() {
            return Err(ConstraintOperationError::InvalidArguments(
                "element requires a non-empty array".to_owned(),
            ));
        }

        ElementArgs {
            array: self.array,
            index: self.index,
            rhs: self.rhs,
        }
        .post(solver)
    }
}

#[cfg(test)]
mod tests {
    use crate::constraints;
    use crate::ConstraintOperationError;
    use crate::Solver;

    #[test]
    fn empty_array_is_rejected() {
        let mut solver = Solver::default();
        let index = solver.new_bounded_integer(0, 3);
        let rhs = solver.new_bounded_integer(0, 3);

        let result = solver
            .add_constraint(constraints::element(index, vec![], rhs))
            .post();

        assert!(matches!(
            result,
            Err(ConstraintOperationError::InvalidArguments(_))
        ));
    }

    #[test]
    fn constant_array_restricts_the_result() {
        let mut solver = Solver::default();
        let costs = [5, 9, 7].map(|cost| solver.new_constant(cost));
        let index = solver.new_bounded_integer(0, 2);
        let cost = solver.new_bounded_integer(0, 100);

        solver
            .add_constraint(constraints::element(index, costs, cost))
            .post()
            .expect("valid scope");

        assert!(!solver.propagate().is_contradiction());
        assert_eq!(solver.lower_bound(cost), 5);
        assert_eq!(solver.upper_bound(cost), 9);
    }
}
