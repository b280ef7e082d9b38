use super::ValueSelector;
use crate::branching::SelectionContext;
use crate::variables::DomainId;

/// [`ValueSelector`] which tries the values in ascending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InDomainMin;

impl ValueSelector for InDomainMin {
    fn select_value(&mut self, context: &SelectionContext, variable: DomainId) -> i32 {
        context.lower_bound(variable)
    }
}
