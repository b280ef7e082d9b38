use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::VecDeque;

use crate::containers::KeyedVec;
use crate::propagation::Priority;
use crate::propagation::PropagatorId;
use crate::quince_assert_moderate;

const NUM_PRIORITY_LEVELS: usize = 4;

/// The worklist of the propagation loop: one FIFO queue per [`Priority`], where a propagator is
/// in at most one queue at a time.
#[derive(Debug, Clone)]
pub(crate) struct PropagatorQueue {
    queues: Vec<VecDeque<PropagatorId>>,
    is_enqueued: KeyedVec<PropagatorId, bool>,
    num_enqueued: usize,
    present_priorities: BinaryHeap<Reverse<u8>>,
}

impl Default for PropagatorQueue {
    fn default() -> Self {
        PropagatorQueue {
            queues: vec![VecDeque::new(); NUM_PRIORITY_LEVELS],
            is_enqueued: KeyedVec::default(),
            num_enqueued: 0,
            present_priorities: BinaryHeap::new(),
        }
    }
}

impl PropagatorQueue {
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.num_enqueued == 0
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.num_enqueued
    }

    pub(crate) fn enqueue(&mut self, propagator: PropagatorId, priority: Priority) {
        if self.is_enqueued(propagator) {
            return;
        }

        self.is_enqueued.accomodate(propagator, false);
        self.is_enqueued[propagator] = true;
        self.num_enqueued += 1;

        let level = priority as usize;
        if self.queues[level].is_empty() {
            self.present_priorities.push(Reverse(priority as u8));
        }
        self.queues[level].push_back(propagator);
    }

    /// Take the oldest propagator of the highest priority that is present.
    pub(crate) fn pop(&mut self) -> Option<PropagatorId> {
        let Reverse(top) = *self.present_priorities.peek()?;
        let level = top as usize;
        quince_assert_moderate!(!self.queues[level].is_empty());

        let propagator = self.queues[level].pop_front()?;
        self.is_enqueued[propagator] = false;
        self.num_enqueued -= 1;

        if self.queues[level].is_empty() {
            let _ = self.present_priorities.pop();
        }

        Some(propagator)
    }

    pub(crate) fn clear(&mut self) {
        for queue in self.queues.iter_mut() {
            queue.clear();
        }
        for enqueued in self.is_enqueued.iter_mut() {
            *enqueued = false;
        }

        self.present_priorities.clear();
        self.num_enqueued = 0;
    }

    pub(crate) fn is_enqueued(&self, propagator: PropagatorId) -> bool {
        self.is_enqueued
            .get(propagator)
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::PropagatorQueue;
    use crate::propagation::Priority;
    use crate::propagation::PropagatorId;

    #[test]
    fn higher_priorities_are_popped_first() {
        let mut queue = PropagatorQueue::default();

        queue.enqueue(PropagatorId(1), Priority::High);
        queue.enqueue(PropagatorId(0), Priority::Medium);
        queue.enqueue(PropagatorId(3), Priority::VeryLow);
        queue.enqueue(PropagatorId(4), Priority::Low);

        assert_eq!(queue.pop(), Some(PropagatorId(1)));
        assert_eq!(queue.pop(), Some(PropagatorId(0)));
        assert_eq!(queue.pop(), Some(PropagatorId(4)));
        assert_eq!(queue.pop(), Some(PropagatorId(3)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn a_propagator_is_enqueued_at_most_once() {
        let mut queue = PropagatorQueue::default();

        queue.enqueue(PropagatorId(2), Priority::Low);
        queue.enqueue(PropagatorId(2), Priority::Low);
        queue.enqueue(PropagatorId(5), Priority::Low);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(PropagatorId(2)));
        assert_eq!(queue.pop(), Some(PropagatorId(5)));
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let mut queue = PropagatorQueue::default();
        queue.enqueue(PropagatorId(0), Priority::High);
        queue.enqueue(PropagatorId(1), Priority::VeryLow);

        queue.clear();

        assert!(queue.is_empty());
        assert!(!queue.is_enqueued(PropagatorId(0)));
        assert_eq!(queue.pop(), None);
    }
}
