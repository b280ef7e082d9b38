use super::Constraint;
use crate::propagators::LinearLessOrEqualArgs;
use crate::variables::DomainId;

fn widen(terms: &[(i32, DomainId)]) -> Box<[(i64, DomainId)]> {
    terms
        .iter()
        .map(|&(weight, variable)| (weight as i64, variable))
        .collect()
}

fn negate(terms: &[(i32, DomainId)]) -> Box<[(i64, DomainId)]> {
    terms
        .iter()
        .map(|&(weight, variable)| (-(weight as i64), variable))
        .collect()
}

/// Creates the [`Constraint`] `\sum weight_i * x_i <= rhs`.
pub fn less_than_or_equals(terms: impl Into<Box<[(i32, DomainId)]>>, rhs: i64) -> impl Constraint {
    let terms = terms.into();
    LinearLessOrEqualArgs {
        terms: widen(&terms),
        rhs,
    }
}

/// Creates the [`Constraint`] `\sum weight_i * x_i >= rhs`.
pub fn greater_than_or_equals(
    terms: impl Into<Box<[(i32, DomainId)]>>,
    rhs: i64,
) -> impl Constraint {
    let terms = terms.into();
    LinearLessOrEqualArgs {
        terms: negate(&terms),
        rhs: -rhs,
    }
}

/// Creates the [`Constraint`] `\sum weight_i * x_i = rhs`, posted as both inequalities.
pub fn equals(terms: impl Into<Box<[(i32, DomainId)]>>, rhs: i64) -> impl Constraint {
    let terms = terms.into();
    vec![
        LinearLessOrEqualArgs {
            terms: widen(&terms),
            rhs,
        },
        LinearLessOrEqualArgs {
            terms: negate(&terms),
            rhs: -rhs,
        },
    ]
}

#[cfg(test)]
mod tests {
    use crate::constraints;
    use crate::outputs::SolveStatus;
    use crate::PropagationOutcome;
    use crate::SolveConfig;
    use crate::Solver;

    #[test]
    fn equality_fixes_the_last_variable() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);
        let y = solver.new_constant(4);

        solver
            .add_constraint(constraints::equals([(2, x), (1, y)], 10))
            .post()
            .expect("valid scope");

        assert_eq!(solver.propagate(), PropagationOutcome::Fixpoint);
        assert_eq!(solver.lower_bound(x), 3);
        assert_eq!(solver.upper_bound(x), 3);
    }

    #[test]
    fn greater_than_or_equals_raises_lower_bounds() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 5);
        let y = solver.new_bounded_integer(0, 5);

        solver
            .add_constraint(constraints::greater_than_or_equals([(1, x), (1, y)], 8))
            .post()
            .expect("valid scope");

        assert_eq!(solver.propagate(), PropagationOutcome::Fixpoint);
        assert_eq!(solver.lower_bound(x), 3);
        assert_eq!(solver.lower_bound(y), 3);

        let outcome = solver.solve(&SolveConfig::default()).expect("no observers");
        assert_eq!(outcome.status, SolveStatus::Solved);
        let solution = outcome.solution.expect("solved");
        assert!(solution.get_integer_value(x) + solution.get_integer_value(y) >= 8);
    }
}
