//! # Quince
//! Quince is a finite-domain constraint solver: integer variables with finite domains,
//! constraints which prune those domains, and a depth-first branch-and-bound search which reports
//! every improving solution and every improved objective bound to its observers.
//!
//! This crate re-exports [`quince_core`] and ships the `quince-solver` binary, which builds a
//! number of demonstration models (map colouring, frequency allocation, facility location and
//! knapsack) on top of the library.
//!
//! # Example
//! ```rust
//! # use quince_solver::constraints;
//! # use quince_solver::outputs::SolveStatus;
//! # use quince_solver::SolveConfig;
//! # use quince_solver::Solver;
//! let mut solver = Solver::default();
//!
//! let countries = (0..4)
//!     .map(|_| solver.new_bounded_integer(0, 2))
//!     .collect::<Vec<_>>();
//! for (a, b) in [(0, 1), (0, 2), (1, 2), (2, 3)] {
//!     solver
//!         .add_constraint(constraints::not_equals(countries[a], countries[b]))
//!         .post()
//!         .expect("the countries belong to the solver");
//! }
//!
//! let outcome = solver.solve(&SolveConfig::default()).expect("no observers");
//! assert_eq!(outcome.status, SolveStatus::Solved);
//! ```
pub use quince_core::*;
