pub(crate) mod constraint_registry;
pub(crate) mod domains;
pub(crate) mod propagation_loop;
pub(crate) mod propagator_queue;
pub(crate) mod search_engine;
mod solver_statistics;
pub(crate) mod test_solver;

pub use domains::DomainId;
pub use domains::EmptyDomain;
pub use propagation_loop::Conflict;
pub use propagation_loop::PropagationOutcome;
pub(crate) use search_engine::SearchEngine;
pub use solver_statistics::SolverStatistics;
