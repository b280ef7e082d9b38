//! Facility location where a location's capacity limits the number of stores it supplies. A store
//! may only be supplied by an open location, expressed as `open[supplier[s]] = 1`, and the number
//! of stores per location is bounded with a count constraint.
use std::path::Path;

use fnv::FnvHashMap;
use quince_solver::constraints;
use quince_solver::optimisation::LinearExpression;
use quince_solver::optimisation::OptimisationDirection;
use quince_solver::variables::DomainId;
use quince_solver::Solver;

use super::report_solution_available;
use crate::result::QuinceError;
use crate::result::QuinceResult;
use crate::RunOptions;

const DEFAULT_LOG_PERIOD: u64 = 1;

/// `locations stores`, the capacities, the fixed costs and the supply cost per store and location.
const EMBEDDED_INSTANCE: &str = "
5 8
3 2 3 2 3
30 25 35 20 28
12  7 20 15  9
 4 18 11 23 16
19  6 14  8 21
10 22  5 17 13
25 11  9  6 18
 7 16 24 12  5
14  9 13 20  8
21 15  6 10 17
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CountFacilityData {
    capacities: Vec<i32>,
    fixed_costs: Vec<i32>,
    /// `costs[s][l]` is the cost of supplying store `s` from location `l`.
    costs: Vec<Vec<i32>>,
}

impl CountFacilityData {
    fn num_locations(&self) -> usize {
        self.capacities.len()
    }

    fn num_stores(&self) -> usize {
        self.costs.len()
    }

    pub(crate) fn parse(source: &str) -> QuinceResult<CountFacilityData> {
        let mut tokens = source.split_whitespace();
        let mut next = |what: &str| -> QuinceResult<i32> {
            let token = tokens
                .next()
                .ok_or_else(|| QuinceError::invalid_data(format!("missing {what}")))?;
            token.parse::<i32>().map_err(|_| {
                QuinceError::invalid_data(format!("expected an integer for {what}, got '{token}'"))
            })
        };

        let num_locations = next("the number of locations")?;
        let num_stores = next("the number of stores")?;
        if num_locations <= 0 || num_stores <= 0 {
            return Err(QuinceError::invalid_data(
                "the instance needs at least one location and one store",
            ));
        }

        let capacities = (0..num_locations)
            .map(|_| next("a capacity"))
            .collect::<QuinceResult<Vec<_>>>()?;
        let fixed_costs = (0..num_locations)
            .map(|_| next("a fixed cost"))
            .collect::<QuinceResult<Vec<_>>>()?;
        let costs = (0..num_stores)
            .map(|_| {
                (0..num_locations)
                    .map(|_| next("a supply cost"))
                    .collect::<QuinceResult<Vec<_>>>()
            })
            .collect::<QuinceResult<Vec<_>>>()?;

        if capacities.iter().any(|&capacity| capacity < 0) {
            return Err(QuinceError::invalid_data("capacities cannot be negative"));
        }

        Ok(CountFacilityData {
            capacities,
            fixed_costs,
            costs,
        })
    }
}

pub(crate) fn run(options: &RunOptions, data: Option<&Path>) -> QuinceResult<()> {
    let data = match data {
        Some(path) => CountFacilityData::parse(&std::fs::read_to_string(path)?)?,
        None => CountFacilityData::parse(EMBEDDED_INSTANCE)?,
    };
    let options = options.with_defaults(None, None, DEFAULT_LOG_PERIOD);

    let mut solver = Solver::default();
    let num_locations = data.num_locations() as i32;

    let suppliers = (0..data.num_stores())
        .map(|_| solver.new_bounded_integer(0, num_locations - 1))
        .collect::<Vec<_>>();
    let open = (0..data.num_locations())
        .map(|_| solver.new_bounded_integer(0, 1))
        .collect::<Vec<_>>();

    let mut constants = FnvHashMap::default();
    let mut constant = |solver: &mut Solver, value: i32| -> DomainId {
        *constants
            .entry(value)
            .or_insert_with(|| solver.new_constant(value))
    };

    let is_open = constant(&mut solver, 1);
    for &supplier in &suppliers {
        solver
            .add_constraint(constraints::element(supplier, open.clone(), is_open))
            .post()?;
    }

    for (location, &capacity) in data.capacities.iter().enumerate() {
        solver
            .add_constraint(constraints::count_at_most(
                suppliers.clone(),
                location as i32,
                capacity,
            ))
            .post()?;
    }

    let mut objective = LinearExpression::from_terms(
        data.fixed_costs
            .iter()
            .zip(&open)
            .map(|(&fixed_cost, &open)| (fixed_cost, open)),
    );
    for (&supplier, costs) in suppliers.iter().zip(&data.costs) {
        let array = costs
            .iter()
            .map(|&cost| constant(&mut solver, cost))
            .collect::<Vec<_>>();

        let min_cost = costs.iter().copied().min().unwrap_or(0);
        let max_cost = costs.iter().copied().max().unwrap_or(0);
        let supply_cost = solver.new_bounded_integer(min_cost, max_cost);

        solver
            .add_constraint(constraints::element(supplier, array, supply_cost))
            .post()?;
        objective.add_term(1, supply_cost);
    }

    solver.minimise(objective)?;

    let outcome = crate::solve(&mut solver, &options, Some(OptimisationDirection::Minimise))?;
    if !report_solution_available(&outcome) {
        return Ok(());
    }

    if let Some(objective_value) = outcome.objective_value {
        if outcome.is_optimal() {
            println!("Optimal value: {objective_value}");
        } else {
            println!("Best value: {objective_value}");
        }
    }

    for location in 0..data.num_locations() {
        if solver.value_of(open[location]) != Some(1) {
            continue;
        }

        let stores = suppliers
            .iter()
            .enumerate()
            .filter(|&(_, &supplier)| solver.value_of(supplier) == Some(location as i32))
            .map(|(store, _)| store.to_string())
            .collect::<Vec<_>>();
        println!(
            "Facility {location} is open, it serves stores {}",
            stores.join(" ")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CountFacilityData;
    use super::EMBEDDED_INSTANCE;

    #[test]
    fn embedded_instance_has_room_for_every_store() {
        let data = CountFacilityData::parse(EMBEDDED_INSTANCE).expect("valid instance");

        assert_eq!(data.num_locations(), 5);
        assert_eq!(data.num_stores(), 8);
        assert_eq!(data.costs[1], vec![4, 18, 11, 23, 16]);
        assert!(data.capacities.iter().sum::<i32>() >= data.num_stores() as i32);
    }

    #[test]
    fn negative_capacity_is_rejected() {
        assert!(CountFacilityData::parse("1 1\n-1\n5\n3").is_err());
        assert!(CountFacilityData::parse("2 1\n1 1\n5 5\n3").is_err());
    }
}
