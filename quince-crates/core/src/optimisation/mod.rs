//! Structures related to optimisation: the objective and the tracking of its bound and
//! incumbent during a solve.
mod linear_expression;
mod objective;
mod objective_tracker;

pub use linear_expression::LinearExpression;
pub(crate) use objective::Objective;
pub use objective_tracker::ObjectiveTracker;

/// The direction of the optimisation, either maximising or minimising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OptimisationDirection {
    Maximise,
    Minimise,
}

impl OptimisationDirection {
    /// Whether `candidate` is strictly better than `reference` in this direction.
    pub fn is_better(self, candidate: i64, reference: i64) -> bool {
        match self {
            OptimisationDirection::Minimise => candidate < reference,
            OptimisationDirection::Maximise => candidate > reference,
        }
    }
}
