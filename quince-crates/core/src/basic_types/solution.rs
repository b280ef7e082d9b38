use crate::containers::StorageKey;
use crate::variables::DomainId;

/// A complete assignment, indexed by [`DomainId`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    values: Vec<i32>,
}

impl Solution {
    pub(crate) fn new(values: Vec<i32>) -> Self {
        Solution { values }
    }

    /// The value of `variable`, or `None` if the variable did not exist when the solution was
    /// found.
    pub fn value(&self, variable: DomainId) -> Option<i32> {
        self.values.get(variable.index()).copied()
    }

    /// The value of `variable`.
    ///
    /// # Panics
    /// If `variable` was created after this solution was found.
    pub fn get_integer_value(&self, variable: DomainId) -> i32 {
        self.values[variable.index()]
    }

    pub fn num_domains(&self) -> usize {
        self.values.len()
    }

    /// Iterate over `(variable, value)` pairs in order of creation.
    pub fn iter(&self) -> impl Iterator<Item = (DomainId, i32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| (DomainId::new(index as u32), value))
    }
}
