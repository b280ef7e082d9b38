//! Frequency allocation: every cell of a mobile network has a number of transmitters, and every
//! transmitter needs a frequency. Transmitters in the same cell need frequencies at least 16
//! apart, transmitters in neighbouring cells need frequencies at least as far apart as the
//! distance listed for the pair of cells. The number of distinct frequencies is minimised.
use fnv::FnvHashSet;
use quince_solver::constraints;
use quince_solver::optimisation::OptimisationDirection;
use quince_solver::variables::DomainId;
use quince_solver::Solver;

use super::report_solution_available;
use crate::result::QuinceResult;
use crate::RunOptions;

const NUM_AVAILABLE_FREQUENCIES: i32 = 256;

/// The minimum distance between frequencies of transmitters in the same cell.
const SAME_CELL_DISTANCE: i32 = 16;

const DEFAULT_FAIL_LIMIT: u64 = 400_000;
const DEFAULT_LOG_PERIOD: u64 = 100_000;

const NUM_CHANNELS: [usize; 25] = [
    8, 6, 6, 1, 4, 4, 8, 8, 8, 8, 4, 9, 8, 4, 4, 10, 8, 9, 8, 4, 5, 4, 8, 1, 1,
];

#[rustfmt::skip]
const DISTANCE: [[i32; 25]; 25] = [
    [16, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 1, 1, 0, 0, 0, 2, 2, 1, 1, 1],
    [1, 16, 2, 0, 0, 0, 0, 0, 2, 2, 1, 1, 1, 2, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 2, 16, 0, 0, 0, 0, 0, 2, 2, 1, 1, 1, 2, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 16, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1],
    [0, 0, 0, 2, 16, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1],
    [0, 0, 0, 2, 2, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1],
    [0, 0, 0, 0, 0, 0, 16, 2, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 1, 2, 0, 0, 0, 1, 1],
    [0, 0, 0, 0, 0, 0, 2, 16, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 1, 2, 0, 0, 0, 1, 1],
    [1, 2, 2, 0, 0, 0, 0, 0, 16, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1],
    [1, 2, 2, 0, 0, 0, 0, 0, 2, 16, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1],
    [1, 1, 1, 0, 0, 0, 1, 1, 2, 2, 16, 2, 2, 2, 2, 2, 2, 1, 1, 2, 1, 1, 0, 1, 1],
    [1, 1, 1, 0, 0, 0, 1, 1, 2, 2, 2, 16, 2, 2, 2, 2, 2, 1, 1, 2, 1, 1, 0, 1, 1],
    [1, 1, 1, 0, 0, 0, 1, 1, 2, 2, 2, 2, 16, 2, 2, 2, 2, 1, 1, 2, 1, 1, 0, 1, 1],
    [2, 2, 2, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2, 16, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [2, 2, 2, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2, 2, 16, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 1, 1, 16, 2, 2, 2, 1, 2, 2, 1, 2, 2],
    [1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 1, 1, 2, 16, 2, 2, 1, 2, 2, 1, 2, 2],
    [0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 16, 2, 2, 1, 1, 0, 2, 2],
    [0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 16, 2, 1, 1, 0, 2, 2],
    [0, 0, 0, 1, 1, 1, 2, 2, 1, 1, 2, 2, 2, 1, 1, 1, 1, 2, 2, 16, 1, 1, 0, 1, 1],
    [2, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 1, 1, 1, 16, 2, 1, 2, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 1, 1, 1, 2, 16, 1, 2, 2],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 1, 1, 16, 1, 1],
    [1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 1, 2, 2, 1, 16, 2],
    [1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 1, 2, 2, 1, 2, 16],
];

pub(crate) fn run(options: &RunOptions, cells: Option<usize>) -> QuinceResult<()> {
    let num_cells = cells.map_or(NUM_CHANNELS.len(), |cells| cells.min(NUM_CHANNELS.len()));
    let options = options.with_defaults(Some(DEFAULT_FAIL_LIMIT), None, DEFAULT_LOG_PERIOD);

    let mut solver = Solver::default();

    // The frequency variables of the transmitters, grouped per cell.
    let transmitters = NUM_CHANNELS[..num_cells]
        .iter()
        .map(|&num_channels| {
            (0..num_channels)
                .map(|_| solver.new_bounded_integer(0, NUM_AVAILABLE_FREQUENCIES - 1))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    for cell in transmitters.iter() {
        for (index, &first) in cell.iter().enumerate() {
            for &second in &cell[index + 1..] {
                solver
                    .add_constraint(constraints::distance_at_least(
                        first,
                        second,
                        SAME_CELL_DISTANCE,
                    ))
                    .post()?;
            }
        }
    }

    for first_cell in 0..num_cells {
        for second_cell in first_cell + 1..num_cells {
            let distance = DISTANCE[first_cell][second_cell];
            if distance <= 0 {
                continue;
            }

            for &first in &transmitters[first_cell] {
                for &second in &transmitters[second_cell] {
                    solver
                        .add_constraint(constraints::distance_at_least(first, second, distance))
                        .post()?;
                }
            }
        }
    }

    let frequencies = transmitters.iter().flatten().copied().collect::<Vec<_>>();
    // Without any transmitter no frequency is used.
    let num_frequencies = solver.new_named_bounded_integer(
        frequencies.len().min(1) as i32,
        frequencies.len() as i32,
        "number of frequencies",
    );
    solver
        .add_constraint(constraints::count_different(
            frequencies.clone(),
            num_frequencies,
        ))
        .post()?;
    solver.minimise(num_frequencies)?;

    let outcome = crate::solve(&mut solver, &options, Some(OptimisationDirection::Minimise))?;
    if !report_solution_available(&outcome) {
        return Ok(());
    }

    for cell in transmitters.iter() {
        let line = cell
            .iter()
            .map(|&transmitter| value_to_string(&solver, transmitter))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{line}");
    }

    let distinct = frequencies
        .iter()
        .filter_map(|&transmitter| solver.value_of(transmitter))
        .collect::<FnvHashSet<_>>();

    println!("Total # of sites       {}", frequencies.len());
    println!("Total # of frequencies {}", distinct.len());

    Ok(())
}

fn value_to_string(solver: &Solver, variable: DomainId) -> String {
    solver
        .value_of(variable)
        .map_or_else(|| "-".to_owned(), |value| value.to_string())
}
