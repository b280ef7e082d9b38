use super::ValueSelector;
use crate::branching::SelectionContext;
use crate::variables::DomainId;

/// [`ValueSelector`] which tries the values in descending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InDomainMax;

impl ValueSelector for InDomainMax {
    fn select_value(&mut self, context: &SelectionContext, variable: DomainId) -> i32 {
        context.upper_bound(variable)
    }
}
