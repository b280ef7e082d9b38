use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::variables::DomainId;

/// A [`VariableSelector`] which selects the unfixed variable with the fewest remaining values.
/// Ties are broken in favour of the variable which comes first in the provided order.
#[derive(Debug, Clone)]
pub struct FirstFail {
    variables: Vec<DomainId>,
}

impl FirstFail {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
        }

        FirstFail {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector for FirstFail {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId> {
        let mut selected: Option<(DomainId, u64)> = None;

        for &variable in self.variables.iter() {
            if context.is_fixed(variable) {
                continue;
            }

            let size = context.domain_size(variable);
            if selected.map_or(true, |(_, best)| size < best) {
                selected = Some((variable, size));
            }
        }

        selected.map(|(variable, _)| variable)
    }
}

#[cfg(test)]
mod tests {
    use super::FirstFail;
    use crate::branching::variable_selection::VariableSelector;
    use crate::branching::SelectionContext;

    #[test]
    fn smallest_domain_is_selected() {
        let mut domains = SelectionContext::create_for_testing(&[(0, 10), (5, 20)]);
        let variables = domains.domains().collect::<Vec<_>>();
        let mut strategy = FirstFail::new(&variables);

        let selected = strategy.select_variable(&SelectionContext::new(&domains));
        assert_eq!(selected, Some(variables[0]));

        let _ = domains.set_lower_bound(variables[1], 15);

        let selected = strategy.select_variable(&SelectionContext::new(&domains));
        assert_eq!(selected, Some(variables[1]));
    }

    #[test]
    fn ties_go_to_the_first_variable() {
        let domains = SelectionContext::create_for_testing(&[(0, 3), (1, 4), (0, 3)]);
        let variables = domains.domains().collect::<Vec<_>>();
        let mut strategy = FirstFail::new(&variables);

        let selected = strategy.select_variable(&SelectionContext::new(&domains));
        assert_eq!(selected, Some(variables[0]));
    }

    #[test]
    fn fixed_variables_are_not_selected() {
        let domains = SelectionContext::create_for_testing(&[(10, 10), (20, 20)]);
        let variables = domains.domains().collect::<Vec<_>>();
        let mut strategy = FirstFail::new(&variables);

        assert_eq!(strategy.select_variable(&SelectionContext::new(&domains)), None);
    }
}
