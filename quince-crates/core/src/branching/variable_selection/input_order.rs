use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::variables::DomainId;

/// A [`VariableSelector`] which selects the first unfixed variable in the provided order.
#[derive(Debug, Clone)]
pub struct InputOrder {
    variables: Vec<DomainId>,
}

impl InputOrder {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }

        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId> {
        self.variables
            .iter()
            .copied()
            .find(|&variable| !context.is_fixed(variable))
    }
}

#[cfg(test)]
mod tests {
    use super::InputOrder;
    use crate::branching::variable_selection::VariableSelector;
    use crate::branching::SelectionContext;

    #[test]
    fn first_unfixed_variable_is_selected() {
        let domains = SelectionContext::create_for_testing(&[(2, 2), (0, 50), (0, 1)]);
        let variables = domains.domains().collect::<Vec<_>>();
        let mut strategy = InputOrder::new(&variables);

        assert_eq!(
            strategy.select_variable(&SelectionContext::new(&domains)),
            Some(variables[1])
        );
    }
}
