pub(crate) mod allocation;
pub(crate) mod color;
pub(crate) mod facility;
pub(crate) mod facility_count;
pub(crate) mod knapsack;

use quince_solver::SolveOutcome;

/// Print why no solution is available; returns whether there is a solution to print.
pub(crate) fn report_solution_available(outcome: &SolveOutcome) -> bool {
    if !outcome.has_solution() {
        println!("No solution ({:?})", outcome.status);
    }
    outcome.has_solution()
}
