//! Capacitated facility location: every customer is supplied by one location, the demand
//! supplied by a location may not exceed its capacity, and a location which supplies anyone has
//! to be opened at a fixed cost. The total of the fixed costs and the supply costs is minimised.
use std::path::Path;

use fnv::FnvHashMap;
use log::info;
use quince_solver::constraints;
use quince_solver::optimisation::LinearExpression;
use quince_solver::optimisation::OptimisationDirection;
use quince_solver::variables::DomainId;
use quince_solver::Solver;

use super::report_solution_available;
use crate::result::QuinceError;
use crate::result::QuinceResult;
use crate::RunOptions;

const DEFAULT_TIME_LIMIT_MS: u64 = 10_000;
const DEFAULT_LOG_PERIOD: u64 = 10_000;

/// `customers locations`, the supply cost per customer and location, the demands, the fixed
/// costs and the capacities.
const EMBEDDED_INSTANCE: &str = "
10 4
20 24 11 25
28 27 82 83
74 97 71 96
 2 55 73 69
46 96 59 83
42 22 29 67
 1  5 73 59
10 73 13 43
93 35 63 85
47 65 55 71
5 8 4 6 7 3 9 2 5 6
30 40 25 35
20 25 18 22
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FacilityData {
    /// `costs[c][w]` is the cost of supplying customer `c` from location `w`.
    costs: Vec<Vec<i32>>,
    demands: Vec<i32>,
    fixed_costs: Vec<i32>,
    capacities: Vec<i32>,
}

impl FacilityData {
    fn num_customers(&self) -> usize {
        self.demands.len()
    }

    fn num_locations(&self) -> usize {
        self.capacities.len()
    }

    /// Parse whitespace separated integers.
    pub(crate) fn parse(source: &str) -> QuinceResult<FacilityData> {
        let mut tokens = source.split_whitespace();
        let mut next = |what: &str| -> QuinceResult<i32> {
            let token = tokens
                .next()
                .ok_or_else(|| QuinceError::invalid_data(format!("missing {what}")))?;
            token.parse::<i32>().map_err(|_| {
                QuinceError::invalid_data(format!("expected an integer for {what}, got '{token}'"))
            })
        };

        let num_customers = next("the number of customers")?;
        let num_locations = next("the number of locations")?;
        if num_customers <= 0 || num_locations <= 0 {
            return Err(QuinceError::invalid_data(
                "the instance needs at least one customer and one location",
            ));
        }

        let costs = (0..num_customers)
            .map(|_| {
                (0..num_locations)
                    .map(|_| next("a supply cost"))
                    .collect::<QuinceResult<Vec<_>>>()
            })
            .collect::<QuinceResult<Vec<_>>>()?;
        let demands = (0..num_customers)
            .map(|_| next("a demand"))
            .collect::<QuinceResult<Vec<_>>>()?;
        let fixed_costs = (0..num_locations)
            .map(|_| next("a fixed cost"))
            .collect::<QuinceResult<Vec<_>>>()?;
        let capacities = (0..num_locations)
            .map(|_| next("a capacity"))
            .collect::<QuinceResult<Vec<_>>>()?;

        if demands.iter().chain(capacities.iter()).any(|&value| value < 0) {
            return Err(QuinceError::invalid_data(
                "demands and capacities cannot be negative",
            ));
        }

        Ok(FacilityData {
            costs,
            demands,
            fixed_costs,
            capacities,
        })
    }

    /// Assign the customers with the largest demand first, each to the cheapest location which
    /// still has room for it. Customers which fit nowhere are left out.
    pub(crate) fn greedy_assignment(&self) -> Vec<(usize, usize)> {
        let mut remaining = self.capacities.clone();
        let mut customers = (0..self.num_customers()).collect::<Vec<_>>();
        customers.sort_by_key(|&customer| std::cmp::Reverse(self.demands[customer]));

        customers
            .into_iter()
            .filter_map(|customer| {
                let demand = self.demands[customer];
                let location = (0..self.num_locations())
                    .filter(|&location| remaining[location] >= demand)
                    .min_by_key(|&location| self.costs[customer][location])?;

                remaining[location] -= demand;
                Some((customer, location))
            })
            .collect()
    }
}

pub(crate) fn run(options: &RunOptions, data: Option<&Path>, warm_start: bool) -> QuinceResult<()> {
    let data = match data {
        Some(path) => FacilityData::parse(&std::fs::read_to_string(path)?)?,
        None => FacilityData::parse(EMBEDDED_INSTANCE)?,
    };
    let options = options.with_defaults(
        None,
        Some(std::time::Duration::from_millis(DEFAULT_TIME_LIMIT_MS)),
        DEFAULT_LOG_PERIOD,
    );

    let mut solver = Solver::default();
    let num_locations = data.num_locations() as i32;

    let suppliers = (0..data.num_customers())
        .map(|_| solver.new_bounded_integer(0, num_locations - 1))
        .collect::<Vec<_>>();
    let open = (0..data.num_locations())
        .map(|_| solver.new_bounded_integer(0, 1))
        .collect::<Vec<_>>();
    let loads = data
        .capacities
        .iter()
        .map(|&capacity| solver.new_bounded_integer(0, capacity))
        .collect::<Vec<_>>();

    // A location is open exactly when it supplies something.
    for ((&is_open, &load), &capacity) in open.iter().zip(&loads).zip(&data.capacities) {
        solver
            .add_constraint(constraints::less_than_or_equals(
                [(1, load), (-capacity, is_open)],
                0,
            ))
            .post()?;
        solver
            .add_constraint(constraints::less_than_or_equals(
                [(1, is_open), (-1, load)],
                0,
            ))
            .post()?;
    }

    solver
        .add_constraint(constraints::pack(
            loads.clone(),
            suppliers.clone(),
            data.demands.clone(),
        ))
        .post()?;

    let mut constants = FnvHashMap::default();
    let mut objective = LinearExpression::from_terms(
        data.fixed_costs
            .iter()
            .zip(&open)
            .map(|(&fixed_cost, &open)| (fixed_cost, open)),
    );

    for (&supplier, costs) in suppliers.iter().zip(&data.costs) {
        let array = costs
            .iter()
            .map(|&cost| {
                *constants
                    .entry(cost)
                    .or_insert_with(|| solver.new_constant(cost))
            })
            .collect::<Vec<DomainId>>();

        let min_cost = costs.iter().copied().min().unwrap_or(0);
        let max_cost = costs.iter().copied().max().unwrap_or(0);
        let supply_cost = solver.new_bounded_integer(min_cost, max_cost);

        solver
            .add_constraint(constraints::element(supplier, array, supply_cost))
            .post()?;
        objective.add_term(1, supply_cost);
    }

    solver.minimise(objective)?;

    if warm_start {
        let assignment = data.greedy_assignment();
        info!(
            "Warm start assigns {} of {} customers",
            assignment.len(),
            data.num_customers()
        );
        solver.set_starting_point(
            assignment
                .into_iter()
                .map(|(customer, location)| (suppliers[customer], location as i32)),
        );
    }

    let outcome = crate::solve(&mut solver, &options, Some(OptimisationDirection::Minimise))?;
    if !report_solution_available(&outcome) {
        return Ok(());
    }

    if let Some(objective_value) = outcome.objective_value {
        println!("Objective: {objective_value}");
    }

    let mut open_capacity = 0;
    let mut min_usage = 1.0_f64;
    for location in 0..data.num_locations() {
        let is_open = solver.value_of(open[location]) == Some(1);
        let load = solver.value_of(loads[location]).unwrap_or(0);
        let capacity = data.capacities[location];

        let customers = suppliers
            .iter()
            .enumerate()
            .filter(|&(_, &supplier)| solver.value_of(supplier) == Some(location as i32))
            .map(|(customer, _)| customer.to_string())
            .collect::<Vec<_>>();

        if is_open {
            open_capacity += capacity;
            if capacity > 0 {
                min_usage = min_usage.min(load as f64 / capacity as f64);
            }
            println!(
                "Location {location}: load {load}/{capacity}, customers {}",
                customers.join(" ")
            );
        } else {
            println!("Location {location}: closed");
        }
    }

    let total_demand = data.demands.iter().sum::<i32>();
    if open_capacity > 0 {
        println!(
            "Mean occupancy: {:.2}",
            total_demand as f64 / open_capacity as f64
        );
    }
    println!("Min capacity usage: {min_usage:.2}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::FacilityData;
    use super::EMBEDDED_INSTANCE;

    #[test]
    fn embedded_instance_is_valid() {
        let data = FacilityData::parse(EMBEDDED_INSTANCE).expect("valid instance");

        assert_eq!(data.num_customers(), 10);
        assert_eq!(data.num_locations(), 4);
        assert_eq!(data.costs[3], vec![2, 55, 73, 69]);
        assert_eq!(data.capacities, vec![20, 25, 18, 22]);
    }

    #[test]
    fn truncated_instance_is_rejected() {
        assert!(FacilityData::parse("2 2\n1 2 3").is_err());
        assert!(FacilityData::parse("1 1\n4 x 2 3").is_err());
    }

    #[test]
    fn greedy_assignment_respects_capacities() {
        let data = FacilityData::parse("3 2\n1 5\n1 5\n1 5\n4 4 4\n0 0\n8 8")
            .expect("valid instance");

        let assignment = data.greedy_assignment();

        assert_eq!(assignment.len(), 3);
        let on_first = assignment
            .iter()
            .filter(|&&(_, location)| location == 0)
            .count();
        assert_eq!(on_first, 2);
    }
}
