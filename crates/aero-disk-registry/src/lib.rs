//! Storage-controller discovery and a reference-counted device registry.
//!
//! Scans a PCI-style bus for storage controllers (IDE, SCSI, SATA, RAID),
//! derives per-device identity and capacity metadata, and publishes it through
//! name-addressed, read-only attributes. This crate provides:
//!
//! - [`BusQuery`] / [`storage_scan`]: class-filtered bus enumeration
//! - [`MetadataSource`]: the two metadata derivations, ATA topology walk
//!   ([`AtaTopologySource`]) and bound block capacity ([`BlockCapacitySource`])
//! - [`NodeRef`]: reference-counted device nodes with lifecycle notifications
//! - [`DiskRegistry`] / [`shutdown`]: all-or-nothing registry construction and
//!   group teardown
//! - [`read_attribute`] / [`write_attribute`]: the attribute dispatch surface
//!
//! Everything is synchronous and single-threaded; `init` and `shutdown` run
//! once each, in that order.

mod ata;
mod attr;
mod block;
mod error;
mod metadata;
mod node;
mod pci;
mod registry;
mod scan;

pub use ata::{
    AtaHost, AtaIdentify, AtaPort, MemoryTopology, StorageTopology, ATA_ID_WORDS, ATA_ID_WWN_LEN,
    ATA_SECT_SIZE,
};
pub use attr::{read_attribute, write_attribute, DiskAttribute, ShowFn, StoreFn, DEFAULT_ATTRS};
pub use block::{BlockCapacity, BlockProvider, MemBlockDevice, MemoryBlockMap};
pub use error::{AttrError, ExtractError, InitError};
pub use metadata::{
    AtaTopologySource, BlockCapacitySource, DiskIdentity, DiskMetadata, MetadataSource,
};
pub use node::{LifecycleEvent, LifecycleObserver, NodeRef, NullObserver};
pub use pci::{
    is_storage_class, BusQuery, ClassFilter, MemoryPciBus, PciBdf, PciDeviceProfile,
    PciVendorDeviceId, IDE_PIIX3, NIC_E1000_82540EM, PCI_CLASS_STORAGE_IDE,
    PCI_CLASS_STORAGE_RAID, PCI_CLASS_STORAGE_SATA, PCI_CLASS_STORAGE_SCSI, RAID_ICH9R,
    SATA_AHCI_ICH9, SCSI_LSI53C895A, STORAGE_CLASS_CODES,
};
pub use registry::{shutdown, DiskRegistry, REGISTRY_NAME};
pub use scan::storage_scan;
