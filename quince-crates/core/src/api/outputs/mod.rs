//! The results of a solve.
use thiserror::Error;

use crate::basic_types::Solution;
use crate::engine::SolverStatistics;
use crate::observers::ObserverFailure;
pub use crate::termination::ResourceLimit;

/// The lifecycle of the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchState {
    /// No solve has run yet.
    #[default]
    Idle,
    Running,
    Solved,
    Exhausted,
    Stopped,
}

/// Why a search ended without any solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustionReason {
    /// Propagation at the root already failed.
    InfeasibleModel,
    /// The whole search tree was explored without finding a solution.
    SearchSpaceExhausted,
}

/// The terminal status of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// For optimisation: the incumbent is proven optimal. For satisfaction: a solution was
    /// found.
    Solved,
    /// There is no solution.
    Exhausted(ExhaustionReason),
    /// A limit stopped the search; the incumbent, if any, is the best known solution.
    Stopped(ResourceLimit),
}

/// Everything a solve produced.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    /// The incumbent: the last (and for optimisation best) solution found.
    pub solution: Option<Solution>,
    pub objective_value: Option<i64>,
    pub objective_bound: Option<i64>,
    pub gap: Option<f64>,
    pub statistics: SolverStatistics,
}

impl SolveOutcome {
    pub fn has_solution(&self) -> bool {
        self.solution.is_some()
    }

    /// Whether the search proved the incumbent optimal.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Solved && self.objective_value.is_some()
    }
}

/// A solve which could not run to a regular end.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("The solve was aborted by an observer: {0}")]
    Observer(#[from] ObserverFailure),
}
