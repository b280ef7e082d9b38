use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::ResourceLimit;
use super::TerminationCondition;

/// A cooperative cancellation flag. Clones share the flag, so a clone can be handed to another
/// thread or a signal handler while the solver polls the original.
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    requested: Arc<AtomicBool>,
}

impl StopSignal {
    /// Ask the solver to stop at the next node.
    pub fn request_stop(&self) {
        self.requested.store(true, Ordering::Relaxed);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }

    pub(crate) fn reset(&self) {
        self.requested.store(false, Ordering::Relaxed);
    }

    /// The shared flag, e.g. to register with `signal_hook::flag::register`.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.requested)
    }
}

impl TerminationCondition for StopSignal {
    fn should_stop(&mut self) -> Option<ResourceLimit> {
        self.is_stop_requested()
            .then_some(ResourceLimit::StopRequested)
    }
}

#[cfg(test)]
mod tests {
    use super::StopSignal;
    use crate::termination::ResourceLimit;
    use crate::termination::TerminationCondition;

    #[test]
    fn clones_share_the_flag() {
        let mut signal = StopSignal::default();
        let handle = signal.clone();
        assert_eq!(signal.should_stop(), None);

        handle.request_stop();
        assert_eq!(signal.should_stop(), Some(ResourceLimit::StopRequested));

        signal.reset();
        assert!(!handle.is_stop_requested());
    }
}
