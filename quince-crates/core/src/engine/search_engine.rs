use std::time::Instant;

use log::debug;
use log::info;
use log::trace;

use super::constraint_registry::ConstraintRegistry;
use super::domains::DomainStore;
use super::propagation_loop::Conflict;
use super::propagation_loop::PropagationLoop;
use super::propagation_loop::PropagationOutcome;
use super::SolverStatistics;
use crate::api::outputs::ExhaustionReason;
use crate::api::outputs::SearchState;
use crate::api::outputs::SolveError;
use crate::api::outputs::SolveOutcome;
use crate::api::outputs::SolveStatus;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Solution;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::observers::CallbackDispatcher;
use crate::observers::ObserverFailure;
use crate::observers::ObserverHandle;
use crate::observers::SolveEvent;
use crate::observers::SolveObserver;
use crate::observers::SolveProgress;
use crate::optimisation::Objective;
use crate::optimisation::ObjectiveTracker;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorId;
use crate::propagators::LinearLessOrEqualArgs;
use crate::propagators::LinearLessOrEqualPropagator;
use crate::quince_assert_eq_simple;
use crate::quince_assert_moderate;
use crate::quince_assert_simple;
use crate::termination::TerminationCondition;
use crate::variables::DomainId;

/// A frame of the depth-first search: the variable branched on, the values tried so far and the
/// checkpoint from before the first of them was assigned.
///
/// The node is *open* while the domains are at its checkpoint, i.e. after a failed value has been
/// refuted and before the next value is assigned.
#[derive(Debug, Clone)]
struct SearchNode {
    variable: DomainId,
    tried: Vec<i32>,
    checkpoint: usize,
}

/// Depth-first branch-and-bound over the domain store.
///
/// Owns the model (domains and propagators), the search stack and the observers. The search
/// always returns the domains to the state they had before `solve` was called.
#[derive(Debug, Default)]
pub(crate) struct SearchEngine {
    domains: DomainStore,
    registry: ConstraintRegistry,
    propagation: PropagationLoop,
    nodes: Vec<SearchNode>,
    state: SearchState,
    statistics: SolverStatistics,
    dispatcher: CallbackDispatcher,

    objective: Option<Objective>,
    tracker: Option<ObjectiveTracker>,
    incumbent: Option<Solution>,
    /// The propagator enforcing that new solutions improve on the incumbent.
    cutoff: Option<PropagatorId>,

    /// Set when propagation at the root failed; the model can never become feasible again.
    root_conflict: Option<Conflict>,
    started_at: Option<Instant>,
}

impl SearchEngine {
    pub(crate) fn domains(&self) -> &DomainStore {
        &self.domains
    }

    pub(crate) fn create_variable(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.domains.create_variable(lower_bound, upper_bound)
    }

    pub(crate) fn post<Constructor: PropagatorConstructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<PropagatorId, ConstraintOperationError> {
        let id = self
            .registry
            .post(constructor, self.domains.num_domains())?;
        self.propagation.enqueue(id, &self.registry);
        Ok(id)
    }

    pub(crate) fn num_propagators(&self) -> usize {
        self.registry.num_propagators()
    }

    pub(crate) fn set_objective(&mut self, objective: Objective) {
        if let Some(cutoff) = self.cutoff.take() {
            self.set_cutoff_rhs(cutoff, i64::MAX);
        }
        self.objective = Some(objective);
    }

    pub(crate) fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    pub(crate) fn add_observer(&mut self, observer: impl SolveObserver + 'static) -> ObserverHandle {
        self.dispatcher.add(observer)
    }

    pub(crate) fn remove_observer(&mut self, handle: ObserverHandle) -> bool {
        self.dispatcher.remove(handle)
    }

    pub(crate) fn state(&self) -> SearchState {
        self.state
    }

    pub(crate) fn incumbent(&self) -> Option<&Solution> {
        self.incumbent.as_ref()
    }

    pub(crate) fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Propagate at the current checkpoint. A contradiction at the root is remembered.
    pub(crate) fn propagate(&mut self) -> PropagationOutcome {
        if let Some(conflict) = self.root_conflict {
            return PropagationOutcome::Contradiction(conflict);
        }

        let outcome = self
            .propagation
            .propagate(&mut self.domains, &mut self.registry);

        if let PropagationOutcome::Contradiction(conflict) = outcome {
            if self.domains.checkpoint() == 0 {
                debug!("The model is infeasible at the root");
                self.root_conflict = Some(conflict);
            }
        }

        outcome
    }

    pub(crate) fn solve<B, T>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
        log_period: Option<u64>,
    ) -> Result<SolveOutcome, SolveError>
    where
        B: Brancher + ?Sized,
        T: TerminationCondition,
    {
        quince_assert_simple!(self.nodes.is_empty());

        self.statistics = SolverStatistics::default();
        self.tracker = self
            .objective
            .as_ref()
            .map(|objective| ObjectiveTracker::new(objective.direction()));
        self.incumbent = None;
        self.started_at = Some(Instant::now());
        self.state = SearchState::Running;

        let propagations_before = self.propagation.num_propagations();
        let root = self.domains.checkpoint();

        let result = self
            .dispatch(SolveEvent::StartSolve)
            .and_then(|_| self.search(brancher, termination, log_period));

        self.domains.restore(root);
        quince_assert_eq_simple!(self.domains.checkpoint(), root);
        self.nodes.clear();
        if let Some(cutoff) = self.cutoff {
            self.set_cutoff_rhs(cutoff, i64::MAX);
        }
        self.propagation.clear();

        self.statistics.num_propagations =
            self.propagation.num_propagations() - propagations_before;
        self.statistics.solve_time_ms = self.elapsed().as_millis() as u64;

        let status = match result {
            Ok(status) => status,
            Err(failure) => {
                info!("Solve aborted by an observer: {failure}");
                self.state = SearchState::Stopped;
                return Err(failure.into());
            }
        };

        self.state = match status {
            SolveStatus::Solved => SearchState::Solved,
            SolveStatus::Exhausted(_) => SearchState::Exhausted,
            SolveStatus::Stopped(_) => SearchState::Stopped,
        };
        debug!("Search ended with {status:?}");

        self.dispatch(SolveEvent::EndSolve)?;

        Ok(SolveOutcome {
            status,
            solution: self.incumbent.clone(),
            objective_value: self.tracker.and_then(|tracker| tracker.incumbent()),
            objective_bound: self.tracker.and_then(|tracker| tracker.bound()),
            gap: self.tracker.and_then(|tracker| tracker.gap()),
            statistics: self.statistics,
        })
    }

    fn search<B, T>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
        log_period: Option<u64>,
    ) -> Result<SolveStatus, ObserverFailure>
    where
        B: Brancher + ?Sized,
        T: TerminationCondition,
    {
        if self.root_conflict.is_some() {
            return Ok(SolveStatus::Exhausted(ExhaustionReason::InfeasibleModel));
        }

        // Everything the search does is undone when the solve ends, including root propagation.
        self.domains.new_checkpoint();
        self.prepare_cutoff();
        self.enqueue_all();

        if self.propagate().is_contradiction() {
            return Ok(SolveStatus::Exhausted(ExhaustionReason::InfeasibleModel));
        }
        self.update_root_bound()?;

        loop {
            if let Some(limit) = termination.should_stop() {
                info!("Search stopped: {limit:?}");
                return Ok(SolveStatus::Stopped(limit));
            }

            if !self.can_improve() {
                trace!("Node pruned by the objective bound");
                self.fail(termination);
                if !self.backtrack(termination)? {
                    return self.exhausted();
                }
                continue;
            }

            let variable = match self.open_node() {
                Some(variable) => variable,
                None => {
                    let selected = brancher
                        .select_variable(&SelectionContext::new(&self.domains))
                        .or_else(|| {
                            self.domains
                                .domains()
                                .find(|&domain| !self.domains.is_fixed(domain))
                        });

                    let Some(variable) = selected else {
                        if self.on_leaf()? {
                            return Ok(SolveStatus::Solved);
                        }
                        if !self.backtrack(termination)? {
                            return self.exhausted();
                        }
                        continue;
                    };

                    self.nodes.push(SearchNode {
                        variable,
                        tried: vec![],
                        checkpoint: self.domains.checkpoint(),
                    });
                    variable
                }
            };
            let value = brancher.select_value(&SelectionContext::new(&self.domains), variable);

            if !self.branch(variable, value, termination, log_period) {
                self.fail(termination);
                if !self.backtrack(termination)? {
                    return self.exhausted();
                }
            }
        }
    }

    /// Assign `value` to the variable of the deepest node and propagate. Returns whether the
    /// resulting node is consistent.
    fn branch<T: TerminationCondition>(
        &mut self,
        variable: DomainId,
        value: i32,
        termination: &mut T,
        log_period: Option<u64>,
    ) -> bool {
        quince_assert_moderate!(self.nodes.last().is_some_and(|node| node.variable == variable));

        if let Some(node) = self.nodes.last_mut() {
            node.tried.push(value);
        }

        self.domains.new_checkpoint();
        self.statistics.num_nodes += 1;
        self.statistics.peak_depth = self.statistics.peak_depth.max(self.nodes.len() as u64);
        termination.decision_has_been_made();
        trace!("Branching on {variable} = {value}");

        if let Some(period) = log_period.filter(|&period| period > 0) {
            if self.statistics.num_nodes % period == 0 {
                self.log_progress();
            }
        }

        if self.domains.fix(variable, value).is_err() {
            return false;
        }

        !self.propagate().is_contradiction()
    }

    /// Undo the deepest assignment and remove the assigned value from its variable. Nodes without
    /// values left are popped until a node can continue. Returns `false` once the whole search
    /// space has been explored.
    fn backtrack<T: TerminationCondition>(
        &mut self,
        termination: &mut T,
    ) -> Result<bool, ObserverFailure> {
        // A node which has not been branched on again since its last refutation has nothing
        // left to undo at its own level; the failure belongs to its parent.
        if self.open_node().is_some() {
            let _ = self.nodes.pop();
        }

        while let Some(node) = self.nodes.last() {
            let variable = node.variable;
            let last_value = node.tried.last().copied();
            self.domains.restore(node.checkpoint);

            let refuted = match last_value {
                Some(value) => self.domains.remove_value(variable, value).is_ok(),
                None => true,
            };

            if !refuted {
                let _ = self.nodes.pop();
                continue;
            }

            if self.propagate().is_contradiction() {
                self.fail(termination);
                let _ = self.nodes.pop();
                continue;
            }

            if self.nodes.len() == 1 {
                self.update_root_bound()?;
            }
            return Ok(true);
        }

        Ok(false)
    }

    /// The variable of the deepest node, if that node is waiting for its next value.
    fn open_node(&self) -> Option<DomainId> {
        self.nodes
            .last()
            .filter(|node| node.checkpoint == self.domains.checkpoint())
            .map(|node| node.variable)
    }

    /// Handles a node where all variables are fixed. Returns whether the search is done.
    fn on_leaf(&mut self) -> Result<bool, ObserverFailure> {
        quince_assert_moderate!(self.domains.all_fixed());

        let solution = Solution::new(
            self.domains
                .domains()
                .map(|domain| self.domains.lower_bound(domain))
                .collect(),
        );

        let Some(objective) = self.objective.as_ref() else {
            self.statistics.num_solutions += 1;
            info!("Found a solution");
            self.incumbent = Some(solution);
            self.dispatch(SolveEvent::Solution)?;
            return Ok(true);
        };

        let value = objective.value(&solution);
        let improved = self
            .tracker
            .as_mut()
            .is_some_and(|tracker| tracker.update_incumbent(value));

        if improved {
            self.statistics.num_solutions += 1;
            info!("Found a solution with objective value {value}");
            self.incumbent = Some(solution);
            self.tighten_cutoff(value);
            self.dispatch(SolveEvent::Solution)?;
        }

        Ok(false)
    }

    fn exhausted(&mut self) -> Result<SolveStatus, ObserverFailure> {
        if self.incumbent.is_none() {
            return Ok(SolveStatus::Exhausted(ExhaustionReason::SearchSpaceExhausted));
        }

        if self.tracker.as_mut().is_some_and(ObjectiveTracker::close) {
            self.dispatch(SolveEvent::ObjectiveBoundUpdate)?;
        }
        Ok(SolveStatus::Solved)
    }

    fn fail<T: TerminationCondition>(&mut self, termination: &mut T) {
        self.statistics.num_fails += 1;
        termination.fail_has_occurred();
    }

    /// Whether the current domains could still contain a solution better than the incumbent.
    fn can_improve(&self) -> bool {
        let (Some(objective), Some(incumbent)) = (
            self.objective.as_ref(),
            self.tracker.and_then(|tracker| tracker.incumbent()),
        ) else {
            return true;
        };

        objective
            .direction()
            .is_better(objective.best_achievable(&self.domains), incumbent)
    }

    fn update_root_bound(&mut self) -> Result<(), ObserverFailure> {
        let Some(objective) = self.objective.as_ref() else {
            return Ok(());
        };
        let bound = objective.best_achievable(&self.domains);

        if self
            .tracker
            .as_mut()
            .is_some_and(|tracker| tracker.update_bound(bound))
        {
            debug!("Objective bound improved to {bound}");
            self.dispatch(SolveEvent::ObjectiveBoundUpdate)?;
        }
        Ok(())
    }

    fn prepare_cutoff(&mut self) {
        let Some(objective) = self.objective.as_ref() else {
            return;
        };

        match self.cutoff {
            Some(cutoff) => self.set_cutoff_rhs(cutoff, i64::MAX),
            None => {
                let args = LinearLessOrEqualArgs {
                    terms: objective.normalised_terms(),
                    rhs: i64::MAX,
                };
                match self.post(args) {
                    Ok(cutoff) => self.cutoff = Some(cutoff),
                    Err(error) => debug!("Objective cutoff could not be posted: {error}"),
                }
            }
        }
    }

    /// Schedule every propagator, so the root of the search starts from a fixpoint of the whole
    /// model regardless of what was propagated before.
    fn enqueue_all(&mut self) {
        let ids = self.registry.ids().collect::<Vec<_>>();
        for id in ids {
            self.propagation.enqueue(id, &self.registry);
        }
    }

    fn tighten_cutoff(&mut self, incumbent: i64) {
        let (Some(objective), Some(cutoff)) = (self.objective.as_ref(), self.cutoff) else {
            return;
        };

        let rhs = objective.improvement_rhs(incumbent);
        self.set_cutoff_rhs(cutoff, rhs);
    }

    fn set_cutoff_rhs(&mut self, cutoff: PropagatorId, rhs: i64) {
        if let Some(propagator) = self
            .registry
            .downcast_mut::<LinearLessOrEqualPropagator>(cutoff)
        {
            propagator.set_rhs(rhs);
            self.propagation.enqueue(cutoff, &self.registry);
        }
    }

    fn elapsed(&self) -> std::time::Duration {
        self.started_at
            .map(|started_at| started_at.elapsed())
            .unwrap_or_default()
    }

    fn log_progress(&self) {
        let incumbent = self.tracker.and_then(|tracker| tracker.incumbent());
        let bound = self.tracker.and_then(|tracker| tracker.bound());

        info!(
            "{:.1}s: {} nodes, {} fails, depth {}, best {}, bound {}",
            self.elapsed().as_secs_f64(),
            self.statistics.num_nodes,
            self.statistics.num_fails,
            self.nodes.len(),
            incumbent.map_or_else(|| "-".to_owned(), |value| value.to_string()),
            bound.map_or_else(|| "-".to_owned(), |value| value.to_string()),
        );
    }

    fn dispatch(&mut self, event: SolveEvent) -> Result<(), ObserverFailure> {
        let solution = match event {
            SolveEvent::Solution => self.incumbent.as_ref(),
            _ => None,
        };

        let progress = SolveProgress {
            event,
            bound: self.tracker.and_then(|tracker| tracker.bound()),
            incumbent: self.tracker.and_then(|tracker| tracker.incumbent()),
            elapsed: self
                .started_at
                .map(|started_at| started_at.elapsed())
                .unwrap_or_default(),
            gap: self.tracker.and_then(|tracker| tracker.gap()),
            solution,
        };

        self.dispatcher.dispatch(&progress)
    }
}
