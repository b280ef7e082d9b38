//! # Quince
//! Quince is a finite-domain constraint solver. A model consists of integer variables with finite
//! domains and constraints over them; the solver finds an assignment which satisfies all
//! constraints, or the best such assignment with respect to a linear objective.
//!
//! The solver propagates the constraints until fixpoint and explores the remaining choices with a
//! depth-first branch-and-bound search. Progress of the search (new solutions, improved bounds)
//! is reported to observers registered on the [`Solver`] while the search is running.
//!
//! # Example
//! ```rust
//! # use quince_core::constraints;
//! # use quince_core::observers::ObserverFailure;
//! # use quince_core::observers::SolveEvent;
//! # use quince_core::observers::SolveProgress;
//! # use quince_core::optimisation::LinearExpression;
//! # use quince_core::outputs::SolveStatus;
//! # use quince_core::SolveConfig;
//! # use quince_core::Solver;
//! let mut solver = Solver::default();
//!
//! let x = solver.new_bounded_integer(0, 5);
//! let y = solver.new_bounded_integer(0, 5);
//! solver
//!     .add_constraint(constraints::greater_than_or_equals([(1, x), (1, y)], 4))
//!     .post()
//!     .expect("both variables belong to the solver");
//!
//! // Minimise 3x + 2y.
//! solver
//!     .minimise(LinearExpression::from_terms([(3, x), (2, y)]))
//!     .expect("both variables belong to the solver");
//!
//! let _ = solver.add_observer(|progress: &SolveProgress<'_>| {
//!     if progress.event == SolveEvent::Solution {
//!         println!("Found a solution with value {:?}", progress.incumbent);
//!     }
//!     Ok::<(), ObserverFailure>(())
//! });
//!
//! let outcome = solver.solve(&SolveConfig::default()).expect("observers do not fail");
//!
//! assert_eq!(outcome.status, SolveStatus::Solved);
//! assert_eq!(outcome.objective_value, Some(8));
//! assert_eq!(outcome.objective_bound, Some(8));
//! ```
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod propagators;
pub mod asserts;

pub mod branching;
pub mod constraints;
pub mod observers;
pub mod optimisation;
pub mod propagation;
pub mod statistics;
pub mod termination;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use quince_core::Solver;`
// vs.
// `use quince_core::api::Solver;`
mod api;

pub use api::*;

pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::Solution;
pub use crate::engine::Conflict;
pub use crate::engine::EmptyDomain;
pub use crate::engine::PropagationOutcome;
pub use crate::engine::SolverStatistics;
