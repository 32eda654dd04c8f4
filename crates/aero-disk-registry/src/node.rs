//! Reference-counted device nodes and lifecycle notification.
//!
//! A node is owned by whoever holds a [`NodeRef`]. The registry holds one
//! strong handle per node; callers may take additional handles with
//! [`NodeRef::acquire`]. Destruction belongs to the node itself: when the last
//! handle drops, the metadata is freed and a single `Removed` notification
//! fires through the observer captured at construction.

use std::rc::Rc;

use crate::metadata::DiskMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Added,
    Removed,
}

/// Fire-and-forget sink for node create/remove events. No return value is
/// consumed; a failing observer cannot fail the caller.
pub trait LifecycleObserver {
    fn notify(&self, name: &str, event: LifecycleEvent);
}

/// Observer that discards every event.
pub struct NullObserver;

impl LifecycleObserver for NullObserver {
    fn notify(&self, _name: &str, _event: LifecycleEvent) {}
}

struct NodeInner {
    name: String,
    metadata: DiskMetadata,
    observer: Rc<dyn LifecycleObserver>,
}

impl Drop for NodeInner {
    fn drop(&mut self) {
        self.observer.notify(&self.name, LifecycleEvent::Removed);
    }
}

/// Strong handle to one device node.
pub struct NodeRef {
    inner: Rc<NodeInner>,
}

impl NodeRef {
    /// Constructs a node with exactly one strong handle and fires `Added`.
    pub fn new(
        name: impl Into<String>,
        metadata: DiskMetadata,
        observer: Rc<dyn LifecycleObserver>,
    ) -> Self {
        let node = Self {
            inner: Rc::new(NodeInner {
                name: name.into(),
                metadata,
                observer,
            }),
        };
        node.inner
            .observer
            .notify(&node.inner.name, LifecycleEvent::Added);
        node
    }

    /// Takes an additional strong handle. Releasing is dropping the handle;
    /// the last drop destroys the node.
    pub fn acquire(&self) -> NodeRef {
        NodeRef {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Live strong-handle count, observable for tests and diagnostics.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn metadata(&self) -> &DiskMetadata {
        &self.inner.metadata
    }
}
