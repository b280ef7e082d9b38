use crate::basic_types::Inconsistency;
use crate::propagation::PropagationContext;
use crate::propagation::PropagationStatus;
use crate::propagation::Priority;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::variables::DomainId;

/// The constructor for [`LinearLessOrEqualPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct LinearLessOrEqualArgs {
    pub(crate) terms: Box<[(i64, DomainId)]>,
    pub(crate) rhs: i64,
}

impl PropagatorConstructor for LinearLessOrEqualArgs {
    type PropagatorImpl = LinearLessOrEqualPropagator;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        let terms = self
            .terms
            .iter()
            .filter(|(weight, _)| *weight != 0)
            .map(|&(weight, variable)| {
                context.register(variable);
                (weight, variable)
            })
            .collect();

        LinearLessOrEqualPropagator {
            terms,
            rhs: self.rhs,
        }
    }
}

/// Bounds propagator for `sum(w_i * x_i) <= rhs`.
///
/// The minimal value of the left-hand side is computed from the bounds; the difference with the
/// right-hand side (the slack) limits how far each term can move away from its minimum. All
/// arithmetic is done in `i64`.
#[derive(Clone, Debug)]
pub(crate) struct LinearLessOrEqualPropagator {
    terms: Box<[(i64, DomainId)]>,
    rhs: i64,
}

impl LinearLessOrEqualPropagator {
    /// Replace the right-hand side. The propagator has to be enqueued for the change to take
    /// effect.
    pub(crate) fn set_rhs(&mut self, rhs: i64) {
        self.rhs = rhs;
    }
}

impl Propagator for LinearLessOrEqualPropagator {
    fn name(&self) -> &str {
        "LinearLeq"
    }

    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        let lower_bound_lhs = self
            .terms
            .iter()
            .map(|&(weight, variable)| {
                if weight > 0 {
                    weight * context.lower_bound(variable) as i64
                } else {
                    weight * context.upper_bound(variable) as i64
                }
            })
            .sum::<i64>();

        if lower_bound_lhs > self.rhs {
            return Err(Inconsistency::Conflict);
        }

        let slack = self.rhs.saturating_sub(lower_bound_lhs);

        for &(weight, variable) in self.terms.iter() {
            if weight > 0 {
                let bound = (context.lower_bound(variable) as i64).saturating_add(slack / weight);
                if bound < context.upper_bound(variable) as i64 {
                    let _ = context.set_upper_bound(variable, bound as i32)?;
                }
            } else {
                let bound = (context.upper_bound(variable) as i64).saturating_sub(slack / -weight);
                if bound > context.lower_bound(variable) as i64 {
                    let _ = context.set_lower_bound(variable, bound as i32)?;
                }
            }
        }

        Ok(())
    }
}
