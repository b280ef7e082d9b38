use std::time::Duration;

/// The search strategy used by [`Solver::solve`](crate::Solver::solve).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SearchType {
    /// Depth-first branch-and-bound.
    #[default]
    DepthFirst,
}

/// How the variable of the next search node is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableSelection {
    /// The unfixed variable with the smallest domain, ties broken by creation order.
    #[default]
    FirstFail,
    /// The first unfixed variable in creation order.
    InputOrder,
}

/// The order in which the values of a branching variable are tried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelection {
    #[default]
    Ascending,
    Descending,
}

/// The parameters of a single solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveConfig {
    /// Stop after this many fails.
    pub fail_limit: Option<u64>,
    /// Stop after this much wall-clock time.
    pub time_limit: Option<Duration>,
    pub search_type: SearchType,
    /// Log a progress line every this many nodes.
    pub log_period: Option<u64>,
    pub variable_selection: VariableSelection,
    pub value_selection: ValueSelection,
}

impl SolveConfig {
    pub fn with_fail_limit(mut self, fail_limit: u64) -> Self {
        self.fail_limit = Some(fail_limit);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn with_log_period(mut self, log_period: u64) -> Self {
        self.log_period = Some(log_period);
        self
    }

    pub fn with_variable_selection(mut self, variable_selection: VariableSelection) -> Self {
        self.variable_selection = variable_selection;
        self
    }

    pub fn with_value_selection(mut self, value_selection: ValueSelection) -> Self {
        self.value_selection = value_selection;
        self
    }
}
