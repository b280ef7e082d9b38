mod config;
pub mod outputs;
pub(crate) mod solver;

pub use config::*;
pub use outputs::SolveOutcome;
pub use outputs::SolveStatus;
pub use solver::DefaultBrancher;
pub use solver::Solver;

/// Contains the variables of the solver.
pub mod variables {
    pub use crate::engine::DomainId;
}

