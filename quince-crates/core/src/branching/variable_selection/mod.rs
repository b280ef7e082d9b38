//! Selectors for the variable of the next search node.
mod first_fail;
mod input_order;

pub use first_fail::FirstFail;
pub use input_order::InputOrder;

use super::SelectionContext;
use crate::variables::DomainId;

/// Picks the variable to branch on.
pub trait VariableSelector {
    /// Returns `None` when all variables this selector considers are fixed.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId>;
}

impl<S: VariableSelector + ?Sized> VariableSelector for Box<S> {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId> {
        (**self).select_variable(context)
    }
}
