//! Registry lifecycle: scan the bus, build nodes, roll back on failure, tear
//! down as a group.
//!
//! Construction is all-or-nothing. A registry that exists contains only
//! fully-built, attribute-readable nodes; any extraction or insertion failure
//! destroys everything inserted so far and surfaces the error, leaving no
//! observable nodes behind.

use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::info;

use crate::attr;
use crate::error::{AttrError, InitError};
use crate::metadata::{DiskMetadata, MetadataSource};
use crate::node::{LifecycleObserver, NodeRef};
use crate::pci::{BusQuery, ClassFilter};
use crate::scan::storage_scan;

/// Fixed top-level name the node collection is anchored under.
pub const REGISTRY_NAME: &str = "aeroDisk";

/// Insertion-ordered, name-keyed collection of device nodes.
///
/// Lives from a successful [`DiskRegistry::init`] until [`shutdown`]; both are
/// called exactly once by the harness, never concurrently. The registry adds
/// no locking of its own.
pub struct DiskRegistry {
    nodes: Vec<NodeRef>,
    index: BTreeMap<String, usize>,
}

impl DiskRegistry {
    /// Scans the bus and builds one node per admitted device.
    ///
    /// Fail-fast: the first extraction or insertion failure aborts the build,
    /// tears down every node inserted so far (each fires its `Removed`
    /// notification) and returns the failure.
    pub fn init(
        bus: &dyn BusQuery,
        source: &dyn MetadataSource,
        observer: Rc<dyn LifecycleObserver>,
        filter: ClassFilter,
    ) -> Result<Self, InitError> {
        let mut registry = Self {
            nodes: Vec::new(),
            index: BTreeMap::new(),
        };

        for dev in storage_scan(bus, filter) {
            let metadata = match source.extract(bus, dev) {
                Ok(metadata) => metadata,
                Err(err) => {
                    registry.teardown();
                    return Err(err.into());
                }
            };

            info!(
                name = %metadata.bus_name,
                identity = ?metadata.identity,
                capacity_bytes = metadata.capacity_bytes,
                "discovered storage controller"
            );

            if let Err(err) = registry.insert(metadata, Rc::clone(&observer)) {
                registry.teardown();
                return Err(err);
            }
        }

        info!(registry = REGISTRY_NAME, nodes = registry.nodes.len(), "loading");
        Ok(registry)
    }

    fn insert(
        &mut self,
        metadata: DiskMetadata,
        observer: Rc<dyn LifecycleObserver>,
    ) -> Result<(), InitError> {
        let name = metadata.bus_name.clone();
        if self.index.contains_key(&name) {
            return Err(InitError::DuplicateName(name));
        }

        self.nodes
            .try_reserve(1)
            .map_err(|_| InitError::OutOfMemory)?;

        // NodeRef::new fires the Added notification.
        let node = NodeRef::new(name.clone(), metadata, observer);
        self.index.insert(name, self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Releases every registry-held node handle in insertion order. Nodes with
    /// no outstanding external handle are destroyed immediately.
    fn teardown(&mut self) {
        self.index.clear();
        for node in self.nodes.drain(..) {
            drop(node);
        }
    }

    /// Name-addressed attribute read, the per-read entry point for a
    /// virtual-attribute-tree front end. A name that resolves to no node fails
    /// with `IoError`; registry state is never touched.
    pub fn read_attribute(&self, node_name: &str, attr_name: &str) -> Result<String, AttrError> {
        attr::read_attribute(self.node(node_name), attr_name)
    }

    /// Looks up a node by bus name. Callers wanting to outlive this borrow
    /// take their own handle with [`NodeRef::acquire`].
    pub fn node(&self, node_name: &str) -> Option<&NodeRef> {
        self.index.get(node_name).map(|&pos| &self.nodes[pos])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeRef> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Tears down a registry, destroying every node in insertion order.
///
/// `None` (a registry that never initialized) is a no-op. Passing the registry
/// by value makes tearing the same one down twice unrepresentable. Teardown is
/// best-effort and always succeeds.
pub fn shutdown(registry: Option<DiskRegistry>) {
    let Some(mut registry) = registry else {
        return;
    };
    registry.teardown();
    info!(registry = REGISTRY_NAME, "unloading");
}
