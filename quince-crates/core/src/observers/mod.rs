//! Synchronous observation of a solve.
//!
//! Observers are registered on the [`Solver`](crate::Solver) and receive a [`SolveProgress`] for
//! every [`SolveEvent`], on the search thread, in order of registration, before the search
//! continues. An observer which returns an [`ObserverFailure`] aborts the solve.
mod bounds_reporter;
mod dispatcher;

use std::time::Duration;

pub use bounds_reporter::BoundsReporter;
pub(crate) use dispatcher::CallbackDispatcher;
pub use dispatcher::ObserverHandle;
use thiserror::Error;

use crate::basic_types::Solution;

/// The moments in a solve at which observers are notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveEvent {
    /// The solve is about to start.
    StartSolve,
    /// A new (for optimisation: strictly better) solution was found.
    Solution,
    /// The proven bound on the objective improved.
    ObjectiveBoundUpdate,
    /// The solve has finished; the domains are back at the root.
    EndSolve,
}

/// What an observer gets to see of the solve.
#[derive(Debug, Clone, Copy)]
pub struct SolveProgress<'a> {
    pub event: SolveEvent,
    /// The best proven bound on the objective, if any.
    pub bound: Option<i64>,
    /// The objective value of the best solution so far, if any.
    pub incumbent: Option<i64>,
    /// Time since the start of the solve.
    pub elapsed: Duration,
    /// The relative gap between bound and incumbent, `None` while it is unbounded.
    pub gap: Option<f64>,
    /// The new solution, only for [`SolveEvent::Solution`].
    pub solution: Option<&'a Solution>,
}

/// Returned by an observer to abort the solve.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("observer failed: {message}")]
pub struct ObserverFailure {
    message: String,
}

impl ObserverFailure {
    pub fn new(message: impl Into<String>) -> Self {
        ObserverFailure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Receives the events of a solve.
///
/// Implemented for every closure `FnMut(&SolveProgress) -> Result<(), ObserverFailure>`.
pub trait SolveObserver {
    fn on_event(&mut self, progress: &SolveProgress<'_>) -> Result<(), ObserverFailure>;
}

impl<T: FnMut(&SolveProgress<'_>) -> Result<(), ObserverFailure>> SolveObserver for T {
    fn on_event(&mut self, progress: &SolveProgress<'_>) -> Result<(), ObserverFailure> {
        (self)(progress)
    }
}
