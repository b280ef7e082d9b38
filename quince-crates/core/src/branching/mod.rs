//! Structures and traits which define the decisions of the search.
//!
//! The search is d-way: a node picks an unfixed variable and then tries its values one at a
//! time. A failed value is removed from the variable before the next value is chosen. The
//! decisions come from a [`Brancher`], which is usually an [`IndependentVariableValueBrancher`]
//! combining
//! - a [`VariableSelector`], which picks the variable to branch on (e.g. [`FirstFail`]), and
//! - a [`ValueSelector`], which picks the next value to try for it (e.g. [`InDomainMin`]).
mod brancher;
mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::*;
pub use selection_context::SelectionContext;

#[cfg(doc)]
use crate::branching::value_selection::InDomainMin;
#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
#[cfg(doc)]
use crate::branching::variable_selection::FirstFail;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
