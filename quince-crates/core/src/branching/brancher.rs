use super::value_selection::ValueSelector;
use super::variable_selection::VariableSelector;
use super::SelectionContext;
use crate::quince_assert_moderate;
use crate::variables::DomainId;

/// Makes the decisions of the search.
pub trait Brancher {
    /// Select the variable of the next search node, or `None` when every variable of interest is
    /// fixed.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId>;

    /// Select the next value to try for `variable`. The returned value must be in its domain.
    fn select_value(&mut self, context: &SelectionContext, variable: DomainId) -> i32;
}

/// A [`Brancher`] which picks the variable and the value independently.
#[derive(Debug)]
pub struct IndependentVariableValueBrancher<VariableSelection, ValueSelection> {
    variable_selector: VariableSelection,
    value_selector: ValueSelection,
}

impl<VariableSelection, ValueSelection>
    IndependentVariableValueBrancher<VariableSelection, ValueSelection>
{
    pub fn new(variable_selector: VariableSelection, value_selector: ValueSelection) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
        }
    }
}

impl<VariableSelection: VariableSelector, ValueSelection: ValueSelector> Brancher
    for IndependentVariableValueBrancher<VariableSelection, ValueSelection>
{
    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId> {
        self.variable_selector.select_variable(context)
    }

    fn select_value(&mut self, context: &SelectionContext, variable: DomainId) -> i32 {
        let value = self.value_selector.select_value(context, variable);
        quince_assert_moderate!(
            context.contains(variable, value),
            "value selectors return values from the domain"
        );
        value
    }
}

impl<B: Brancher + ?Sized> Brancher for Box<B> {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId> {
        (**self).select_variable(context)
    }

    fn select_value(&mut self, context: &SelectionContext, variable: DomainId) -> i32 {
        (**self).select_value(context, variable)
    }
}
