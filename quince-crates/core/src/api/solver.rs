use log::debug;

use super::config::SolveConfig;
use super::config::ValueSelection;
use super::config::VariableSelection;
use super::outputs::SearchState;
use super::outputs::SolveError;
use super::outputs::SolveOutcome;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Solution;
use crate::branching::value_selection::InDomainMax;
use crate::branching::value_selection::InDomainMin;
use crate::branching::value_selection::ValueSelector;
use crate::branching::value_selection::WarmStart;
use crate::branching::variable_selection::FirstFail;
use crate::branching::variable_selection::InputOrder;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::IndependentVariableValueBrancher;
use crate::constraints::Constraint;
use crate::constraints::ConstraintPoster;
use crate::containers::HashMap;
use crate::engine::PropagationOutcome;
use crate::engine::SearchEngine;
use crate::observers::ObserverHandle;
use crate::observers::SolveObserver;
use crate::optimisation::LinearExpression;
use crate::optimisation::Objective;
use crate::optimisation::OptimisationDirection;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorId;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::termination::Combinator;
use crate::termination::FailBudget;
use crate::termination::StopSignal;
use crate::termination::TerminationCondition;
use crate::termination::TimeBudget;
use crate::variables::DomainId;

/// The brancher built from a [`SolveConfig`].
pub type DefaultBrancher =
    IndependentVariableValueBrancher<Box<dyn VariableSelector>, Box<dyn ValueSelector>>;

/// The main interaction point which allows the creation of variables, the addition of
/// constraints, and solving problems.
///
/// # Example
/// ```rust
/// # use quince_core::Solver;
/// # use quince_core::SolveConfig;
/// # use quince_core::constraints;
/// # use quince_core::outputs::SolveStatus;
/// let mut solver = Solver::default();
///
/// let x = solver.new_bounded_integer(0, 2);
/// let y = solver.new_named_bounded_integer(0, 2, "y");
///
/// solver
///     .add_constraint(constraints::not_equals(x, y))
///     .post()
///     .expect("both variables belong to the solver");
///
/// let outcome = solver.solve(&SolveConfig::default()).expect("no observers");
///
/// assert_eq!(outcome.status, SolveStatus::Solved);
/// assert_ne!(solver.value_of(x), solver.value_of(y));
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    engine: SearchEngine,
    names: HashMap<DomainId, String>,
    starting_point: Vec<(DomainId, i32)>,
    stop_signal: StopSignal,
}

/// Functions to create and retrieve integer variables.
impl Solver {
    /// Create a fresh integer variable with the domain `[lower_bound, upper_bound]`.
    ///
    /// # Panics
    /// If `lower_bound > upper_bound`.
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.engine.create_variable(lower_bound, upper_bound)
    }

    /// Create a fresh integer variable with the domain `[lower_bound, upper_bound]` and a name
    /// which is used when the variable is displayed.
    pub fn new_named_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> DomainId {
        let variable = self.new_bounded_integer(lower_bound, upper_bound);
        let _ = self.names.insert(variable, name.into());
        variable
    }

    /// Create a variable which can only take `value`.
    pub fn new_constant(&mut self, value: i32) -> DomainId {
        self.new_bounded_integer(value, value)
    }

    /// The name given to `variable`, if any.
    pub fn variable_name(&self, variable: DomainId) -> Option<&str> {
        self.names.get(&variable).map(String::as_str)
    }

    /// The number of variables created so far.
    pub fn num_variables(&self) -> u32 {
        self.engine.domains().num_domains()
    }

    /// The lower bound of `variable` at the root.
    pub fn lower_bound(&self, variable: DomainId) -> i32 {
        self.engine.domains().lower_bound(variable)
    }

    /// The upper bound of `variable` at the root.
    pub fn upper_bound(&self, variable: DomainId) -> i32 {
        self.engine.domains().upper_bound(variable)
    }

    /// The values of `variable` at the root in ascending order, including the holes left by
    /// [`Solver::propagate`].
    pub fn iterate_domain(&self, variable: DomainId) -> impl Iterator<Item = i32> + '_ {
        self.engine.domains().domain_of(variable)
    }
}

/// Functions for adding constraints and an objective.
impl Solver {
    /// Add a constraint to the solver. Returns a [`ConstraintPoster`] which posts the constraint
    /// through [`ConstraintPoster::post`].
    ///
    /// # Example
    /// ```
    /// # use quince_core::Solver;
    /// # use quince_core::constraints;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_bounded_integer(0, 3);
    /// let b = solver.new_bounded_integer(0, 3);
    ///
    /// solver
    ///     .add_constraint(constraints::equals([(1, a), (1, b)], 3))
    ///     .post()
    ///     .expect("valid scope");
    /// ```
    pub fn add_constraint<ConstraintImpl: Constraint>(
        &mut self,
        constraint: ConstraintImpl,
    ) -> ConstraintPoster<'_, ConstraintImpl> {
        ConstraintPoster::new(self, constraint)
    }

    /// Post a propagator, failing if its scope contains a variable which was not created by
    /// this solver.
    pub(crate) fn add_propagator<Constructor: PropagatorConstructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<PropagatorId, ConstraintOperationError> {
        self.engine.post(constructor)
    }

    /// Minimise `expression` in subsequent solves.
    pub fn minimise(
        &mut self,
        expression: impl Into<LinearExpression>,
    ) -> Result<(), ConstraintOperationError> {
        self.set_objective(OptimisationDirection::Minimise, expression.into())
    }

    /// Maximise `expression` in subsequent solves.
    pub fn maximise(
        &mut self,
        expression: impl Into<LinearExpression>,
    ) -> Result<(), ConstraintOperationError> {
        self.set_objective(OptimisationDirection::Maximise, expression.into())
    }

    fn set_objective(
        &mut self,
        direction: OptimisationDirection,
        expression: LinearExpression,
    ) -> Result<(), ConstraintOperationError> {
        let num_domains = self.num_variables();
        if let Some(domain) = expression
            .variables()
            .find(|domain| domain.id() >= num_domains)
        {
            return Err(ConstraintOperationError::InvalidConstraintScope {
                domain,
                num_domains,
            });
        }

        debug!("Objective: {direction:?} {expression}");
        self.engine
            .set_objective(Objective::new(direction, expression));
        Ok(())
    }

    /// Hint values which the search tries first, as long as they are still in the domain of
    /// their variable. Replaces any previous starting point.
    pub fn set_starting_point(&mut self, hints: impl IntoIterator<Item = (DomainId, i32)>) {
        self.starting_point = hints.into_iter().collect();
    }
}

/// Functions for observing and controlling a solve.
impl Solver {
    /// Register an observer which is notified of every [`SolveEvent`] of subsequent solves.
    ///
    /// [`SolveEvent`]: crate::observers::SolveEvent
    pub fn add_observer(&mut self, observer: impl SolveObserver + 'static) -> ObserverHandle {
        self.engine.add_observer(observer)
    }

    /// Returns whether the observer was registered.
    pub fn remove_observer(&mut self, handle: ObserverHandle) -> bool {
        self.engine.remove_observer(handle)
    }

    /// A handle to stop a running solve from elsewhere, e.g. a signal handler. A stop which is
    /// requested outside of a solve makes the next solve stop at its first node.
    pub fn stop_signal(&self) -> StopSignal {
        self.stop_signal.clone()
    }

    pub fn search_state(&self) -> SearchState {
        self.engine.state()
    }
}

/// Functions which solve the model.
impl Solver {
    /// Run propagation at the root until fixpoint.
    ///
    /// The domains are changed permanently, which is how the bounds reported by
    /// [`Solver::lower_bound`] and [`Solver::upper_bound`] are tightened.
    pub fn propagate(&mut self) -> PropagationOutcome {
        self.engine.propagate()
    }

    /// Solve the model with the search strategy and the limits in `config`.
    ///
    /// In satisfaction mode the search stops at the first solution; with an objective it runs
    /// until the incumbent is proven optimal or a limit is hit. Either way the domains are
    /// restored to their state from before the call.
    pub fn solve(&mut self, config: &SolveConfig) -> Result<SolveOutcome, SolveError> {
        let mut brancher = self.default_brancher(config);
        let mut termination = Combinator::new(
            Combinator::new(
                config.fail_limit.map(FailBudget::new),
                config.time_limit.map(TimeBudget::starting_now),
            ),
            self.stop_signal.clone(),
        );

        self.solve_with_brancher(&mut brancher, &mut termination, config.log_period)
    }

    /// Solve with a custom [`Brancher`] and [`TerminationCondition`].
    pub fn solve_with_brancher<B: Brancher + ?Sized>(
        &mut self,
        brancher: &mut B,
        termination: &mut impl TerminationCondition,
        log_period: Option<u64>,
    ) -> Result<SolveOutcome, SolveError> {
        let result = self.engine.solve(brancher, termination, log_period);
        self.stop_signal.reset();
        result
    }

    /// The brancher described by `config`, over all variables and aware of the starting point.
    pub fn default_brancher(&self, config: &SolveConfig) -> DefaultBrancher {
        let variables = self.engine.domains().domains().collect::<Vec<_>>();

        let variable_selector: Box<dyn VariableSelector> = match config.variable_selection {
            VariableSelection::FirstFail => Box::new(FirstFail::new(&variables)),
            VariableSelection::InputOrder => Box::new(InputOrder::new(&variables)),
        };

        let hints = self.starting_point.iter().copied();
        let value_selector: Box<dyn ValueSelector> = match config.value_selection {
            ValueSelection::Ascending => Box::new(WarmStart::new(hints, InDomainMin)),
            ValueSelection::Descending => Box::new(WarmStart::new(hints, InDomainMax)),
        };

        IndependentVariableValueBrancher::new(variable_selector, value_selector)
    }
}

/// Functions to query the result of the last solve.
impl Solver {
    /// The value of `variable` in the incumbent, `None` until a solution has been found.
    pub fn value_of(&self, variable: DomainId) -> Option<i32> {
        self.engine
            .incumbent()
            .and_then(|solution| solution.value(variable))
    }

    /// The incumbent of the last solve.
    pub fn solution(&self) -> Option<&Solution> {
        self.engine.incumbent()
    }

    /// Logs the statistics of the last solve.
    pub fn log_statistics(&self) {
        let logger = StatisticLogger::default();
        self.engine.statistics().log(logger);
        log_statistic("numPropagators", self.engine.num_propagators());
        if let Some(objective) = self.engine.objective() {
            log_statistic("objective", objective.expression());
        }
        log_statistic_postfix();
    }

    /// Logs the statistics of the last solve together with the objective value.
    pub fn log_statistics_with_objective(&self, objective_value: i64) {
        log_statistic("objectiveValue", objective_value);
        self.log_statistics();
    }
}
