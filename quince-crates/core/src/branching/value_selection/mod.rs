//! Selectors for the value to try next at a search node.
mod in_domain_max;
mod in_domain_min;
mod warm_start;

pub use in_domain_max::InDomainMax;
pub use in_domain_min::InDomainMin;
pub use warm_start::WarmStart;

use super::SelectionContext;
use crate::variables::DomainId;

/// Picks the value to assign to a variable.
pub trait ValueSelector {
    /// Select a value from the domain of `variable`, which is not fixed.
    fn select_value(&mut self, context: &SelectionContext, variable: DomainId) -> i32;
}

impl<S: ValueSelector + ?Sized> ValueSelector for Box<S> {
    fn select_value(&mut self, context: &SelectionContext, variable: DomainId) -> i32 {
        (**self).select_value(context, variable)
    }
}
