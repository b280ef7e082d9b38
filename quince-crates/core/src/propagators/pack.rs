use crate::propagation::PropagationContext;
use crate::propagation::PropagationStatus;
use crate::propagation::Priority;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::variables::DomainId;

/// The constructor for [`PackPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct PackArgs {
    pub(crate) loads: Box<[DomainId]>,
    pub(crate) bins: Box<[DomainId]>,
    pub(crate) sizes: Box<[i32]>,
}

impl PropagatorConstructor for PackArgs {
    type PropagatorImpl = PackPropagator;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        context.register_all(self.loads.iter().copied());
        context.register_all(self.bins.iter().copied());

        let total_size = self.sizes.iter().map(|&size| size as i64).sum();
        PackPropagator {
            loads: self.loads,
            bins: self.bins,
            sizes: self.sizes,
            total_size,
        }
    }
}

/// Propagator for `loads[b] = sum(sizes[i] | bins[i] = b)` with non-negative sizes.
///
/// Per bin, the items fixed to it give the required load and the unfixed items that may still
/// go there give the possible load. Items which no longer fit in a bin are removed from it. On
/// top of that, the loads together have to account for the total size of all items.
#[derive(Clone, Debug)]
pub(crate) struct PackPropagator {
    loads: Box<[DomainId]>,
    bins: Box<[DomainId]>,
    sizes: Box<[i32]>,
    total_size: i64,
}

fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl PackPropagator {
    fn propagate_bin(&self, context: &mut PropagationContext, bin: usize) -> PropagationStatus {
        let bin_value = bin as i32;
        let load = self.loads[bin];

        let mut required = 0_i64;
        let mut candidates = 0_i64;
        for (&item, &size) in self.bins.iter().zip(self.sizes.iter()) {
            match context.fixed_value(item) {
                Some(value) if value == bin_value => required += size as i64,
                Some(_) => {}
                None if context.contains(item, bin_value) => candidates += size as i64,
                None => {}
            }
        }

        let _ = context.restrict(
            load,
            clamp_to_i32(required),
            clamp_to_i32(required + candidates),
        )?;

        let capacity_left = context.upper_bound(load) as i64 - required;
        for (&item, &size) in self.bins.iter().zip(self.sizes.iter()) {
            if !context.is_fixed(item)
                && context.contains(item, bin_value)
                && size as i64 > capacity_left
            {
                let _ = context.remove(item, bin_value)?;
            }
        }

        Ok(())
    }

    fn propagate_total(&self, context: &mut PropagationContext) -> PropagationStatus {
        let sum_of_lower_bounds = self
            .loads
            .iter()
            .map(|&load| context.lower_bound(load) as i64)
            .sum::<i64>();
        let sum_of_upper_bounds = self
            .loads
            .iter()
            .map(|&load| context.upper_bound(load) as i64)
            .sum::<i64>();

        for &load in self.loads.iter() {
            let others_lower = sum_of_lower_bounds - context.lower_bound(load) as i64;
            let others_upper = sum_of_upper_bounds - context.upper_bound(load) as i64;

            let _ = context.restrict(
                load,
                clamp_to_i32(self.total_size - others_upper),
                clamp_to_i32(self.total_size - others_lower),
            )?;
        }

        Ok(())
    }
}

impl Propagator for PackPropagator {
    fn name(&self) -> &str {
        "Pack"
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        for &item in self.bins.iter() {
            let _ = context.restrict(item, 0, self.loads.len() as i32 - 1)?;
        }

        for bin in 0..self.loads.len() {
            self.propagate_bin(&mut context, bin)?;
        }

        self.propagate_total(&mut context)
    }
}

#[cfg(test)]
mod tests {
    use super::PackArgs;
    use crate::basic_types::Inconsistency;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn loads_are_bounded_by_required_and_possible_items() {
        let mut solver = TestSolver::default();
        let load_0 = solver.new_variable(0, 100);
        let load_1 = solver.new_variable(0, 100);
        let item_a = solver.new_variable(0, 0);
        let item_b = solver.new_variable(0, 1);
        let item_c = solver.new_variable(1, 1);

        let _ = solver
            .new_propagator(PackArgs {
                loads: vec![load_0, load_1].into(),
                bins: vec![item_a, item_b, item_c].into(),
                sizes: vec![3, 4, 5].into(),
            })
            .expect("non-empty domains");

        solver.assert_bounds(load_0, 3, 7);
        solver.assert_bounds(load_1, 5, 9);
    }

    #[test]
    fn items_are_kept_out_of_bins_they_overflow() {
        let mut solver = TestSolver::default();
        let load_0 = solver.new_variable(0, 5);
        let load_1 = solver.new_variable(0, 10);
        let fixed = solver.new_variable(0, 0);
        let free = solver.new_variable(0, 1);

        let _ = solver
            .new_propagator(PackArgs {
                loads: vec![load_0, load_1].into(),
                bins: vec![fixed, free].into(),
                sizes: vec![3, 4].into(),
            })
            .expect("non-empty domains");

        assert_eq!(solver.values(free), vec![1]);
    }

    #[test]
    fn bin_indices_are_restricted_to_the_available_bins() {
        let mut solver = TestSolver::default();
        let load = solver.new_variable(0, 10);
        let item = solver.new_variable(-3, 3);

        let _ = solver
            .new_propagator(PackArgs {
                loads: vec![load].into(),
                bins: vec![item].into(),
                sizes: vec![2].into(),
            })
            .expect("non-empty domains");

        solver.assert_bounds(item, 0, 0);
        solver.assert_bounds(load, 2, 2);
    }

    #[test]
    fn total_size_constrains_the_other_loads() {
        let mut solver = TestSolver::default();
        let load_0 = solver.new_variable(0, 2);
        let load_1 = solver.new_variable(0, 10);
        let item_a = solver.new_variable(0, 1);
        let item_b = solver.new_variable(0, 1);

        let _ = solver
            .new_propagator(PackArgs {
                loads: vec![load_0, load_1].into(),
                bins: vec![item_a, item_b].into(),
                sizes: vec![2, 2].into(),
            })
            .expect("non-empty domains");

        solver.assert_bounds(load_1, 2, 4);
    }

    #[test]
    fn insufficient_capacity_is_inconsistent() {
        let mut solver = TestSolver::default();
        let load = solver.new_variable(0, 3);
        let item = solver.new_variable(0, 0);

        let result = solver.new_propagator(PackArgs {
            loads: vec![load].into(),
            bins: vec![item].into(),
            sizes: vec![4].into(),
        });

        assert_eq!(result, Err(Inconsistency::EmptyDomain));
    }
}
