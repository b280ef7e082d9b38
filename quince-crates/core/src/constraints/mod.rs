//! Defines the constraints that Quince provides out of the box which can be added to the
//! [`Solver`].
//!
//! A constraint is a relation over variables. In the solver, constraints are enforced through
//! propagators, and therefore constraints can be viewed as a collection of propagators.
//!
//! # Example
//! ```
//! # use quince_core::constraints;
//! # use quince_core::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_bounded_integer(0, 3);
//! let b = solver.new_bounded_integer(0, 3);
//!
//! solver
//!     .add_constraint(constraints::distance_at_least(a, b, 2))
//!     .post()
//!     .expect("both variables belong to the solver");
//! ```
mod all_different;
mod arithmetic;
mod constraint_poster;
mod count;
mod distance;
mod element;
mod pack;

pub use all_different::*;
pub use arithmetic::*;
pub use constraint_poster::*;
pub use count::*;
pub use distance::*;
pub use element::*;
pub use pack::*;

use crate::propagation::PropagatorConstructor;
use crate::ConstraintOperationError;
use crate::Solver;

/// A [`Constraint`] is a relation over variables. It disqualifies certain assignments from
/// making it into a solution of the problem.
///
/// For example, the constraint `a != b` over two variables `a` and `b` rejects every assignment
/// where `a` and `b` take the same value.
pub trait Constraint {
    /// Add the [`Constraint`] to the [`Solver`].
    ///
    /// This method returns a [`ConstraintOperationError`] if the constraint refers to a variable
    /// which was not created by `solver`, or if its arguments are malformed. Infeasibility of
    /// the model is only detected by propagation.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<ConcretePropagator> Constraint for ConcretePropagator
where
    ConcretePropagator: PropagatorConstructor + 'static,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let _ = solver.add_propagator(self)?;
        Ok(())
    }
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter().try_for_each(|c| c.post(solver))
    }
}
