//! Multi-dimensional 0/1 knapsack: select items with a maximal total value such that, for every
//! resource, the total use of the selected items stays within the capacity of the resource.
use quince_solver::constraints;
use quince_solver::optimisation::LinearExpression;
use quince_solver::optimisation::OptimisationDirection;
use quince_solver::Solver;

use super::report_solution_available;
use crate::result::QuinceResult;
use crate::RunOptions;

const VALUES: [i32; 12] = [36, 83, 59, 71, 43, 67, 23, 52, 93, 25, 67, 89];

/// `USE[r][i]` is the amount of resource `r` used by item `i`.
const USE: [[i32; 12]; 3] = [
    [3, 8, 6, 7, 4, 6, 2, 5, 9, 2, 6, 8],
    [5, 9, 4, 8, 3, 7, 3, 4, 10, 2, 5, 9],
    [2, 7, 5, 6, 5, 5, 1, 6, 8, 3, 7, 7],
];

const CAPACITIES: [i64; 3] = [30, 32, 28];

pub(crate) fn run(options: &RunOptions) -> QuinceResult<()> {
    let mut solver = Solver::default();

    let selected = (0..VALUES.len())
        .map(|item| solver.new_named_bounded_integer(0, 1, format!("item{item}")))
        .collect::<Vec<_>>();

    for (usage, &capacity) in USE.iter().zip(&CAPACITIES) {
        let terms = usage
            .iter()
            .zip(&selected)
            .map(|(&amount, &item)| (amount, item))
            .collect::<Vec<_>>();

        solver
            .add_constraint(constraints::less_than_or_equals(terms, capacity))
            .post()?;
    }

    solver.maximise(LinearExpression::from_terms(
        VALUES.iter().copied().zip(selected.iter().copied()),
    ))?;

    let outcome = crate::solve(&mut solver, options, Some(OptimisationDirection::Maximise))?;
    if !report_solution_available(&outcome) {
        return Ok(());
    }

    let chosen = selected
        .iter()
        .filter(|&&item| solver.value_of(item) == Some(1))
        .filter_map(|&item| solver.variable_name(item))
        .collect::<Vec<_>>();

    println!("Selected: {}", chosen.join(" "));
    if let Some(value) = outcome.objective_value {
        println!("Total value: {value}");
    }
    if outcome.is_optimal() {
        println!("The selection is optimal");
    }

    Ok(())
}
