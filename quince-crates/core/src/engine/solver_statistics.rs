use crate::create_statistics_struct;

create_statistics_struct!(
    /// Counters of a single solve.
    SolverStatistics {
        /// The number of search nodes which were opened
        num_nodes: u64,
        /// The number of nodes which failed, either by propagation or by the objective bound
        num_fails: u64,
        /// The number of solutions reported to the observers
        num_solutions: u64,
        /// The number of propagator invocations
        num_propagations: u64,
        /// The largest number of open search nodes at any time
        peak_depth: u64,
        /// The wall-clock time of the solve in milliseconds
        solve_time_ms: u64,
    }
);
