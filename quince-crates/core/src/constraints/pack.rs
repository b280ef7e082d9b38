use super::Constraint;
use crate::propagators::PackArgs;
use crate::variables::DomainId;
use crate::ConstraintOperationError;
use crate::Solver;

struct PackConstraint {
    loads: Box<[DomainId]>,
    bins: Box<[DomainId]>,
    sizes: Box<[i32]>,
}

/// Creates the [`Constraint`] that item `i` of size `sizes[i]` is packed into bin `bins[i]`, and
/// that `loads[b]` is the total size of the items in bin `b`.
///
/// Bins are numbered from zero, so every `bins[i]` is restricted to `[0, loads.len())`. Posting
/// fails with [`ConstraintOperationError::InvalidArguments`] when `bins` and `sizes` differ in
/// length or when a size is negative.
pub fn pack(
    loads: impl Into<Box<[DomainId]>>,
    bins: impl Into<Box<[DomainId]>>,
    sizes: impl Into<Box<[i32]>>,
) -> impl Constraint {
    PackConstraint {
        loads: loads.into(),
        bins: bins.into(),
        sizes: sizes.into(),
    }
}

impl Constraint for PackConstraint {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.bins.len() != self.sizes.len() {
            return Err(ConstraintOperationError::InvalidArguments(format!(
                "pack has {} items but {} sizes",
                self.bins.len(),
                self.sizes.len()
            )));
        }

        if let Some(size) = self.sizes.iter().find(|&&size| size < 0) {
            return Err(ConstraintOperationError::InvalidArguments(format!(
                "pack requires non-negative sizes, got {size}"
            )));
        }

        PackArgs {
            loads: self.loads,
            bins: self.bins,
            sizes: self.sizes,
        }
        .post(solver)
    }
}

#[cfg(test)]
mod tests {
    use crate::constraints;
    use crate::ConstraintOperationError;
    use crate::Solver;

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut solver = Solver::default();
        let load = solver.new_bounded_integer(0, 10);
        let bin = solver.new_bounded_integer(0, 0);

        let result = solver
            .add_constraint(constraints::pack([load], [bin], [3, 4]))
            .post();

        assert!(matches!(
            result,
            Err(ConstraintOperationError::InvalidArguments(_))
        ));
        assert_eq!(solver.num_variables(), 2);
    }

    #[test]
    fn loads_follow_fixed_items() {
        let mut solver = Solver::default();
        let loads = [solver.new_bounded_integer(0, 10), solver.new_bounded_integer(0, 10)];
        let first = solver.new_constant(0);
        let second = solver.new_bounded_integer(0, 1);

        solver
            .add_constraint(constraints::pack(loads, [first, second], [4, 3]))
            .post()
            .expect("valid arguments");

        assert!(!solver.propagate().is_contradiction());
        assert_eq!(solver.lower_bound(loads[0]), 4);
        assert_eq!(solver.upper_bound(loads[0]), 7);
        assert_eq!(solver.upper_bound(loads[1]), 3);
    }
}
