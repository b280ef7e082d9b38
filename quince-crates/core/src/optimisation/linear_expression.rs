use std::fmt::Display;

use crate::basic_types::Solution;
use crate::variables::DomainId;

/// A weighted sum of variables plus a constant: `sum(w_i * x_i) + c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinearExpression {
    terms: Vec<(i32, DomainId)>,
    constant: i64,
}

impl LinearExpression {
    pub fn new() -> Self {
        LinearExpression::default()
    }

    pub fn from_terms(terms: impl IntoIterator<Item = (i32, DomainId)>) -> Self {
        LinearExpression {
            terms: terms.into_iter().collect(),
            constant: 0,
        }
    }

    /// Add `weight * variable` to the expression.
    pub fn add_term(&mut self, weight: i32, variable: DomainId) {
        self.terms.push((weight, variable));
    }

    pub fn with_term(mut self, weight: i32, variable: DomainId) -> Self {
        self.add_term(weight, variable);
        self
    }

    pub fn with_constant(mut self, constant: i64) -> Self {
        self.constant += constant;
        self
    }

    pub fn terms(&self) -> &[(i32, DomainId)] {
        &self.terms
    }

    pub fn constant(&self) -> i64 {
        self.constant
    }

    pub fn variables(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.terms.iter().map(|&(_, variable)| variable)
    }

    /// The value of the expression under `solution`.
    pub fn evaluate(&self, solution: &Solution) -> i64 {
        self.constant
            + self
                .terms
                .iter()
                .map(|&(weight, variable)| {
                    weight as i64 * solution.get_integer_value(variable) as i64
                })
                .sum::<i64>()
    }
}

impl From<DomainId> for LinearExpression {
    fn from(variable: DomainId) -> Self {
        LinearExpression::from_terms([(1, variable)])
    }
}

impl Extend<(i32, DomainId)> for LinearExpression {
    fn extend<T: IntoIterator<Item = (i32, DomainId)>>(&mut self, iter: T) {
        self.terms.extend(iter);
    }
}

impl Display for LinearExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (weight, variable)) in self.terms.iter().enumerate() {
            if index > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{weight}*{variable}")?;
        }
        if self.constant != 0 || self.terms.is_empty() {
            if !self.terms.is_empty() {
                write!(f, " + ")?;
            }
            write!(f, "{}", self.constant)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LinearExpression;
    use crate::basic_types::Solution;
    use crate::variables::DomainId;

    #[test]
    fn evaluation_includes_the_constant() {
        let x = DomainId::new(0);
        let y = DomainId::new(1);
        let expression = LinearExpression::new()
            .with_term(3, x)
            .with_term(-2, y)
            .with_constant(10);

        let solution = Solution::new(vec![4, 5]);

        assert_eq!(expression.evaluate(&solution), 12);
        assert_eq!(expression.to_string(), "3*x0 + -2*x1 + 10");
    }
}
