//! The filtering algorithms for the constraints in [`crate::constraints`].
pub(crate) mod all_different;
pub(crate) mod count;
pub(crate) mod count_different;
pub(crate) mod distance;
pub(crate) mod element;
pub(crate) mod linear_less_or_equal;
pub(crate) mod pack;

pub(crate) use all_different::*;
pub(crate) use count::*;
pub(crate) use count_different::*;
pub(crate) use distance::*;
pub(crate) use element::*;
pub(crate) use linear_less_or_equal::*;
pub(crate) use pack::*;
