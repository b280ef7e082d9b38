use super::ValueSelector;
use crate::branching::SelectionContext;
use crate::containers::HashMap;
use crate::variables::DomainId;

/// A [`ValueSelector`] which first tries a hinted value for a variable, as long as that value is
/// still in its domain, and defers to another selector otherwise.
///
/// Hints steer the search towards a known (good) assignment; they are not required to be
/// feasible.
#[derive(Debug, Clone)]
pub struct WarmStart<Inner> {
    hints: HashMap<DomainId, i32>,
    inner: Inner,
}

impl<Inner> WarmStart<Inner> {
    pub fn new(hints: impl IntoIterator<Item = (DomainId, i32)>, inner: Inner) -> Self {
        WarmStart {
            hints: hints.into_iter().collect(),
            inner,
        }
    }
}

impl<Inner: ValueSelector> ValueSelector for WarmStart<Inner> {
    fn select_value(&mut self, context: &SelectionContext, variable: DomainId) -> i32 {
        match self.hints.get(&variable) {
            Some(&hint) if context.contains(variable, hint) => hint,
            _ => self.inner.select_value(context, variable),
        }
    }
}
