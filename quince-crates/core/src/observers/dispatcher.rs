use std::fmt::Debug;

use super::ObserverFailure;
use super::SolveObserver;
use super::SolveProgress;

/// Identifies a registered observer, to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u32);

/// Delivers events to the registered observers in order of registration.
#[derive(Default)]
pub(crate) struct CallbackDispatcher {
    observers: Vec<(ObserverHandle, Box<dyn SolveObserver>)>,
    next_handle: u32,
}

impl Debug for CallbackDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackDispatcher")
            .field("num_observers", &self.observers.len())
            .finish()
    }
}

impl CallbackDispatcher {
    pub(crate) fn add(&mut self, observer: impl SolveObserver + 'static) -> ObserverHandle {
        let handle = ObserverHandle(self.next_handle);
        self.next_handle += 1;
        self.observers.push((handle, Box::new(observer)));
        handle
    }

    /// Returns whether an observer with this handle was registered.
    pub(crate) fn remove(&mut self, handle: ObserverHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != handle);
        self.observers.len() != before
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Notify every observer in order. The first failure is returned immediately; the observers
    /// after it are not notified.
    pub(crate) fn dispatch(&mut self, progress: &SolveProgress<'_>) -> Result<(), ObserverFailure> {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_event(progress)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::CallbackDispatcher;
    use crate::observers::ObserverFailure;
    use crate::observers::SolveEvent;
    use crate::observers::SolveProgress;

    fn progress(event: SolveEvent) -> SolveProgress<'static> {
        SolveProgress {
            event,
            bound: None,
            incumbent: None,
            elapsed: Duration::ZERO,
            gap: None,
            solution: None,
        }
    }

    #[test]
    fn observers_are_called_in_registration_order() {
        let calls = Rc::new(RefCell::new(vec![]));
        let mut dispatcher = CallbackDispatcher::default();

        for name in ["first", "second"] {
            let calls = Rc::clone(&calls);
            let _ = dispatcher.add(move |progress: &SolveProgress<'_>| {
                calls.borrow_mut().push((name, progress.event));
                Ok(())
            });
        }

        dispatcher
            .dispatch(&progress(SolveEvent::StartSolve))
            .expect("no failures");

        assert_eq!(
            *calls.borrow(),
            vec![
                ("first", SolveEvent::StartSolve),
                ("second", SolveEvent::StartSolve)
            ]
        );
    }

    #[test]
    fn a_failure_stops_delivery() {
        let called = Rc::new(RefCell::new(false));
        let mut dispatcher = CallbackDispatcher::default();

        let _ = dispatcher.add(|_: &SolveProgress<'_>| Err(ObserverFailure::new("broken")));
        let flag = Rc::clone(&called);
        let _ = dispatcher.add(move |_: &SolveProgress<'_>| {
            *flag.borrow_mut() = true;
            Ok(())
        });

        let result = dispatcher.dispatch(&progress(SolveEvent::Solution));

        assert_eq!(result, Err(ObserverFailure::new("broken")));
        assert!(!*called.borrow());
    }

    #[test]
    fn removed_observers_are_not_called() {
        let mut dispatcher = CallbackDispatcher::default();
        let handle = dispatcher.add(|_: &SolveProgress<'_>| Err(ObserverFailure::new("removed")));

        assert!(dispatcher.remove(handle));
        assert!(!dispatcher.remove(handle));
        assert!(dispatcher.is_empty());
        assert!(dispatcher.dispatch(&progress(SolveEvent::EndSolve)).is_ok());
    }
}
