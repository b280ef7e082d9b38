use quince_solver::constraints;
use quince_solver::Solver;

use super::report_solution_available;
use crate::result::QuinceResult;
use crate::RunOptions;

const COLOURS: [&str; 4] = ["blue", "white", "yellow", "green"];

const COUNTRIES: [&str; 6] = [
    "Belgium",
    "Denmark",
    "France",
    "Germany",
    "Luxembourg",
    "Netherlands",
];

/// Pairs of indices into [`COUNTRIES`] which share a border.
const BORDERS: [(usize, usize); 9] = [
    (0, 2),
    (0, 3),
    (0, 4),
    (0, 5),
    (1, 3),
    (2, 3),
    (2, 4),
    (3, 4),
    (3, 5),
];

pub(crate) fn run(options: &RunOptions) -> QuinceResult<()> {
    let mut solver = Solver::default();

    let countries = COUNTRIES
        .iter()
        .map(|&name| solver.new_named_bounded_integer(0, COLOURS.len() as i32 - 1, name))
        .collect::<Vec<_>>();

    for (a, b) in BORDERS {
        solver
            .add_constraint(constraints::not_equals(countries[a], countries[b]))
            .post()?;
    }

    let outcome = crate::solve(&mut solver, options, None)?;
    if !report_solution_available(&outcome) {
        return Ok(());
    }

    println!();
    for &country in &countries {
        if let (Some(name), Some(colour)) = (solver.variable_name(country), solver.value_of(country)) {
            println!("{name}:  {}", COLOURS[colour as usize]);
        }
    }

    Ok(())
}
