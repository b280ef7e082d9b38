use std::collections::BTreeSet;

use crate::quince_assert_moderate;
use crate::quince_assert_simple;

/// What a single removal changed, enough to undo it with [`IntegerDomain::restore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Removal {
    pub(crate) old_lower_bound: i32,
    pub(crate) old_upper_bound: i32,
    pub(crate) old_size: u64,
    /// Values strictly inside the bounds which became holes.
    pub(crate) holes: Vec<i32>,
}

/// A finite set of integers, stored as its bounds together with the holes between them.
///
/// Holes which end up outside of the bounds after a bound change are kept, so undoing the bound
/// change brings them back. The size is cached. When the domain becomes empty the bounds keep
/// their last values; callers check [`IntegerDomain::is_empty`] first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct IntegerDomain {
    lower_bound: i32,
    upper_bound: i32,
    holes: BTreeSet<i32>,
    size: u64,
}

impl IntegerDomain {
    pub(crate) fn new(lower_bound: i32, upper_bound: i32) -> Self {
        quince_assert_simple!(lower_bound <= upper_bound);

        IntegerDomain {
            lower_bound,
            upper_bound,
            holes: BTreeSet::new(),
            size: width(lower_bound, upper_bound),
        }
    }

    pub(crate) fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub(crate) fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    pub(crate) fn size(&self) -> u64 {
        self.size
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.size == 1
    }

    pub(crate) fn contains(&self, value: i32) -> bool {
        !self.is_empty()
            && value >= self.lower_bound
            && value <= self.upper_bound
            && !self.holes.contains(&value)
    }

    /// The values in the domain in ascending order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        let (lower, upper) = if self.is_empty() {
            (1, 0)
        } else {
            (self.lower_bound, self.upper_bound)
        };

        (lower..=upper).filter(move |value| !self.holes.contains(value))
    }

    /// Remove every value outside of `[min, max]`. Returns `None` if nothing was removed.
    pub(crate) fn retain_range(&mut self, min: i32, max: i32) -> Option<Removal> {
        if self.is_empty() || (min <= self.lower_bound && max >= self.upper_bound) {
            return None;
        }

        let removal = self.start_removal();
        self.set_bounds(min.max(self.lower_bound), max.min(self.upper_bound));
        Some(removal)
    }

    /// Remove every value inside of `[min, max]`. Returns `None` if nothing was removed.
    pub(crate) fn remove_range(&mut self, min: i32, max: i32) -> Option<Removal> {
        let min = min.max(self.lower_bound);
        let max = max.min(self.upper_bound);
        if self.is_empty() || min > max {
            return None;
        }

        let covers_lower = min == self.lower_bound;
        let covers_upper = max == self.upper_bound;

        if !covers_lower && !covers_upper {
            let holes = (min..=max)
                .filter(|value| !self.holes.contains(value))
                .collect::<Vec<_>>();
            if holes.is_empty() {
                return None;
            }

            let mut removal = self.start_removal();
            self.size -= holes.len() as u64;
            self.holes.extend(holes.iter().copied());
            removal.holes = holes;
            return Some(removal);
        }

        let removal = self.start_removal();
        match (covers_lower, covers_upper) {
            (true, true) => self.size = 0,
            // `max < upper_bound` and `min > lower_bound` respectively, so the new bound exists.
            (true, false) => self.set_bounds(max + 1, self.upper_bound),
            _ => self.set_bounds(self.lower_bound, min - 1),
        }
        Some(removal)
    }

    /// Undo a removal. Removals have to be undone in the reverse order in which they were made.
    pub(crate) fn restore(&mut self, removal: &Removal) {
        for hole in &removal.holes {
            let _ = self.holes.remove(hole);
        }
        self.lower_bound = removal.old_lower_bound;
        self.upper_bound = removal.old_upper_bound;
        self.size = removal.old_size;
    }

    fn start_removal(&self) -> Removal {
        Removal {
            old_lower_bound: self.lower_bound,
            old_upper_bound: self.upper_bound,
            old_size: self.size,
            holes: vec![],
        }
    }

    /// Shrink the bounds to `[lower, upper]`, moving them past holes, and recount the size.
    fn set_bounds(&mut self, mut lower: i32, mut upper: i32) {
        quince_assert_moderate!(lower >= self.lower_bound && upper <= self.upper_bound);

        while lower <= upper && self.holes.contains(&lower) {
            lower += 1;
        }
        while upper >= lower && self.holes.contains(&upper) {
            upper -= 1;
        }

        if lower > upper {
            self.size = 0;
            return;
        }

        self.lower_bound = lower;
        self.upper_bound = upper;
        self.size = width(lower, upper) - self.holes.range(lower..=upper).count() as u64;
    }
}

fn width(lower: i32, upper: i32) -> u64 {
    (upper as i64 - lower as i64 + 1) as u64
}
