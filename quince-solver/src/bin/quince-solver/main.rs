mod models;
mod os_signal_termination;
mod result;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::Subcommand;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use quince_solver::asserts::QUINCE_ASSERT_LEVEL_DEFINITION;
use quince_solver::asserts::QUINCE_ASSERT_MODERATE;
use quince_solver::convert_case::Case;
use quince_solver::observers::BoundsReporter;
use quince_solver::optimisation::OptimisationDirection;
use quince_solver::statistics::configure_statistic_logging;
use quince_solver::SolveConfig;
use quince_solver::SolveOutcome;
use quince_solver::Solver;
use quince_solver::ValueSelection;
use quince_solver::VariableSelection;
use result::QuinceResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The demonstration model to build and solve.
    #[command(subcommand)]
    model: ModelCommand,

    /// The number of fails after which the search gives up.
    ///
    /// Possible values: u64
    #[arg(long = "fail-limit", global = true, verbatim_doc_comment)]
    fail_limit: Option<u64>,

    /// The number of milliseconds the solver is given to solve the model.
    ///
    /// Possible values: u64
    #[arg(short = 't', long = "time-limit", global = true, verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// Log a progress line every this many search nodes.
    ///
    /// Progress lines are only visible with `--verbose`.
    ///
    /// Possible values: u64
    #[arg(long = "log-period", global = true, verbatim_doc_comment)]
    log_period: Option<u64>,

    /// How the variable of the next search node is chosen.
    #[arg(long, value_enum, default_value_t, global = true)]
    variable_selection: VariableSelection,

    /// In which order the values of the branching variable are tried.
    #[arg(long, value_enum, default_value_t, global = true)]
    value_selection: ValueSelection,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", global = true, verbatim_doc_comment)]
    verbose: bool,

    /// Print the statistics of the solve after it finishes.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", global = true, verbatim_doc_comment)]
    log_statistics: bool,

    /// Print a table with the objective bound, the incumbent and the gap whenever one of them
    /// changes.
    ///
    /// Possible values: bool
    #[arg(long = "show-bounds", global = true, verbatim_doc_comment)]
    show_bounds: bool,
}

#[derive(Debug, Clone, Subcommand)]
enum ModelCommand {
    /// Colour a map of six countries with four colours.
    Color,
    /// Assign frequencies to transmitters, minimising the number of distinct frequencies.
    Allocation {
        /// Only use the first `cells` cells of the instance.
        #[arg(long)]
        cells: Option<usize>,
    },
    /// Choose facilities and assign customers to them, minimising the total cost.
    Facility {
        /// The instance file. Uses the embedded instance when absent.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Start the search from a greedy assignment.
        #[arg(long = "warm-start")]
        warm_start: bool,
    },
    /// Facility location where each location supplies a bounded number of stores, searched
    /// depth-first with a progress line per node.
    FacilityCount {
        /// The instance file. Uses the embedded instance when absent.
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Select items with a maximal total value within several capacity constraints.
    Knapsack,
}

/// The options shared by all models.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunOptions {
    pub(crate) config: SolveConfig,
    pub(crate) log_statistics: bool,
    pub(crate) show_bounds: bool,
}

impl RunOptions {
    /// The options with a fail limit and a log period for models which do not get them from the
    /// command line.
    pub(crate) fn with_defaults(
        mut self,
        fail_limit: Option<u64>,
        time_limit: Option<Duration>,
        log_period: u64,
    ) -> Self {
        if self.config.fail_limit.is_none() && self.config.time_limit.is_none() {
            self.config.fail_limit = fail_limit;
            self.config.time_limit = time_limit;
        }
        if self.config.log_period.is_none() {
            self.config.log_period = Some(log_period);
        }
        self
    }
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("%% quince-stat:", None, Some(Case::Camel), None);
    }

    let level_filter = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> QuinceResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if QUINCE_ASSERT_LEVEL_DEFINITION >= QUINCE_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the Quince assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            QUINCE_ASSERT_LEVEL_DEFINITION
        );
    };

    let options = RunOptions {
        config: SolveConfig {
            fail_limit: args.fail_limit,
            time_limit: args.time_limit.map(Duration::from_millis),
            log_period: args.log_period,
            variable_selection: args.variable_selection,
            value_selection: args.value_selection,
            ..SolveConfig::default()
        },
        log_statistics: args.log_statistics,
        show_bounds: args.show_bounds,
    };

    match args.model {
        ModelCommand::Color => models::color::run(&options),
        ModelCommand::Allocation { cells } => models::allocation::run(&options, cells),
        ModelCommand::Facility { data, warm_start } => {
            models::facility::run(&options, data.as_deref(), warm_start)
        }
        ModelCommand::FacilityCount { data } => {
            models::facility_count::run(&options, data.as_deref())
        }
        ModelCommand::Knapsack => models::knapsack::run(&options),
    }
}

/// Solve `solver` with the shared options: stop on SIGINT/SIGTERM, optionally print the bounds
/// table, and log the statistics afterwards.
pub(crate) fn solve(
    solver: &mut Solver,
    options: &RunOptions,
    direction: Option<OptimisationDirection>,
) -> QuinceResult<SolveOutcome> {
    os_signal_termination::install(&solver.stop_signal())?;

    let reporter = match direction {
        Some(direction) if options.show_bounds => {
            Some(solver.add_observer(BoundsReporter::new(std::io::stdout(), direction)))
        }
        _ => None,
    };

    let outcome = solver.solve(&options.config)?;

    if let Some(handle) = reporter {
        let _ = solver.remove_observer(handle);
    }

    info!("Solve finished with status {:?}", outcome.status);
    if options.log_statistics {
        match outcome.objective_value {
            Some(objective_value) => solver.log_statistics_with_objective(objective_value),
            None => solver.log_statistics(),
        }
    }

    Ok(outcome)
}
