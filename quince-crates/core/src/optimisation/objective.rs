use super::LinearExpression;
use super::OptimisationDirection;
use crate::basic_types::Solution;
use crate::engine::domains::DomainStore;
use crate::variables::DomainId;

/// The objective of the model.
///
/// Internally everything is minimised: for maximisation the expression is negated. Values
/// handed to and returned from this type are in the user's direction.
#[derive(Debug, Clone)]
pub(crate) struct Objective {
    direction: OptimisationDirection,
    expression: LinearExpression,
}

impl Objective {
    pub(crate) fn new(direction: OptimisationDirection, expression: LinearExpression) -> Self {
        Objective {
            direction,
            expression,
        }
    }

    pub(crate) fn direction(&self) -> OptimisationDirection {
        self.direction
    }

    pub(crate) fn expression(&self) -> &LinearExpression {
        &self.expression
    }

    fn sign(&self) -> i64 {
        match self.direction {
            OptimisationDirection::Minimise => 1,
            OptimisationDirection::Maximise => -1,
        }
    }

    pub(crate) fn value(&self, solution: &Solution) -> i64 {
        self.expression.evaluate(solution)
    }

    /// The terms of the minimised form of the objective.
    pub(crate) fn normalised_terms(&self) -> Box<[(i64, DomainId)]> {
        self.expression
            .terms()
            .iter()
            .map(|&(weight, variable)| (self.sign() * weight as i64, variable))
            .collect()
    }

    /// The right-hand side for `normalised_terms <= rhs` which only admits assignments strictly
    /// better than `incumbent`.
    pub(crate) fn improvement_rhs(&self, incumbent: i64) -> i64 {
        self.sign() * incumbent - 1 - self.sign() * self.expression.constant()
    }

    /// The best objective value any assignment within the current domains could reach.
    pub(crate) fn best_achievable(&self, domains: &DomainStore) -> i64 {
        let normalised_minimum = self
            .normalised_terms()
            .iter()
            .map(|&(weight, variable)| {
                if weight > 0 {
                    weight * domains.lower_bound(variable) as i64
                } else {
                    weight * domains.upper_bound(variable) as i64
                }
            })
            .sum::<i64>()
            + self.sign() * self.expression.constant();

        self.sign() * normalised_minimum
    }
}

#[cfg(test)]
mod tests {
    use super::Objective;
    use crate::engine::domains::DomainStore;
    use crate::optimisation::LinearExpression;
    use crate::optimisation::OptimisationDirection;
    use crate::variables::DomainId;

    #[test]
    fn best_achievable_follows_the_direction() {
        let mut domains = DomainStore::default();
        let x = domains.create_variable(1, 4);
        let y = domains.create_variable(0, 3);
        let expression = LinearExpression::new()
            .with_term(2, x)
            .with_term(-1, y)
            .with_constant(5);

        let minimise = Objective::new(OptimisationDirection::Minimise, expression.clone());
        let maximise = Objective::new(OptimisationDirection::Maximise, expression);

        assert_eq!(minimise.best_achievable(&domains), 2 - 3 + 5);
        assert_eq!(maximise.best_achievable(&domains), 8 + 5);
    }

    #[test]
    fn improvement_rhs_excludes_the_incumbent() {
        let x = DomainId::new(0);
        let expression = LinearExpression::from(x).with_constant(10);

        let minimise = Objective::new(OptimisationDirection::Minimise, expression.clone());
        // x + 10 < 15
        assert_eq!(minimise.improvement_rhs(15), 4);

        let maximise = Objective::new(OptimisationDirection::Maximise, expression);
        // x + 10 > 15
        assert_eq!(maximise.improvement_rhs(15), -6);
    }
}
