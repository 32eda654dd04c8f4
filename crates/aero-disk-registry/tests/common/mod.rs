// Shared test helpers (integration tests compile as separate crates, so put
// common code in a submodule to avoid it becoming its own test target).

use std::cell::RefCell;
use std::rc::Rc;

use aero_disk_registry::{LifecycleEvent, LifecycleObserver};

/// Observer that records every lifecycle notification in arrival order.
#[derive(Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<(String, LifecycleEvent)>>,
}

impl RecordingObserver {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<(String, LifecycleEvent)> {
        self.events.borrow().clone()
    }

    /// How many times `event` fired for the node named `name`.
    #[allow(dead_code)]
    pub fn count(&self, name: &str, event: LifecycleEvent) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|(n, e)| n == name && *e == event)
            .count()
    }
}

impl LifecycleObserver for RecordingObserver {
    fn notify(&self, name: &str, event: LifecycleEvent) {
        self.events.borrow_mut().push((name.to_string(), event));
    }
}
