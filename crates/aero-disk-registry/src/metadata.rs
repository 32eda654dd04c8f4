//! Per-device metadata and the two derivation strategies.
//!
//! A deployment profile picks exactly one [`MetadataSource`]:
//!
//! - [`AtaTopologySource`] walks the controller's host/port/device topology and
//!   derives a world-wide-name identity plus the summed device capacities.
//! - [`BlockCapacitySource`] reads the capacity of the block abstraction bound
//!   to the controller and keeps the raw vendor:device pair as identity.

use crate::ata::{StorageTopology, ATA_SECT_SIZE};
use crate::block::BlockProvider;
use crate::error::ExtractError;
use crate::pci::{BusQuery, PciBdf, PciVendorDeviceId};

/// Device identity. Exactly one representation is chosen per deployment
/// profile, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskIdentity {
    /// 64-bit world-wide name.
    Wwn(u64),
    /// Raw PCI vendor and device ids.
    Pair { vendor_id: u16, device_id: u16 },
}

/// Immutable metadata record for one storage controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskMetadata {
    pub identity: DiskIdentity,
    /// Total addressable size. Zero means no storage was found behind the
    /// controller and is a valid value, not a fault.
    pub capacity_bytes: u64,
    /// Stable bus address string, the node's registry key.
    pub bus_name: String,
}

/// One derivation strategy for a matched bus device.
pub trait MetadataSource {
    fn extract(&self, bus: &dyn BusQuery, dev: PciBdf) -> Result<DiskMetadata, ExtractError>;
}

/// Identity-string strategy: host/port/device walk.
pub struct AtaTopologySource<'a> {
    topology: &'a dyn StorageTopology,
}

impl<'a> AtaTopologySource<'a> {
    pub fn new(topology: &'a dyn StorageTopology) -> Self {
        Self { topology }
    }
}

impl MetadataSource for AtaTopologySource<'_> {
    fn extract(&self, bus: &dyn BusQuery, dev: PciBdf) -> Result<DiskMetadata, ExtractError> {
        let host = self
            .topology
            .resolve_host(dev)
            .ok_or(ExtractError::HostUnresolved)?;

        let mut capacity_bytes = 0u64;
        let mut wwn = 0u64;
        for port in host.ports() {
            for identify in port.devices() {
                if identify.has_wwn() {
                    capacity_bytes = capacity_bytes
                        .saturating_add(identify.sector_count().saturating_mul(ATA_SECT_SIZE));
                    wwn = identify.wwn();
                }
            }
        }

        // Zero WWN-bearing devices leaves an empty record; only a missing host
        // link is fatal.
        Ok(DiskMetadata {
            identity: DiskIdentity::Wwn(wwn),
            capacity_bytes,
            bus_name: bus.device_name(dev),
        })
    }
}

/// Block-abstraction strategy: bound block capacity plus the raw id pair.
pub struct BlockCapacitySource<'a> {
    blocks: &'a dyn BlockProvider,
}

impl<'a> BlockCapacitySource<'a> {
    pub fn new(blocks: &'a dyn BlockProvider) -> Self {
        Self { blocks }
    }
}

impl MetadataSource for BlockCapacitySource<'_> {
    fn extract(&self, bus: &dyn BusQuery, dev: PciBdf) -> Result<DiskMetadata, ExtractError> {
        let block = self
            .blocks
            .resolve_block(dev)
            .ok_or(ExtractError::NoBlockAbstraction)?;

        let PciVendorDeviceId {
            vendor_id,
            device_id,
        } = bus.vendor_device(dev);

        Ok(DiskMetadata {
            identity: DiskIdentity::Pair {
                vendor_id,
                device_id,
            },
            capacity_bytes: block.capacity_bytes(),
            bus_name: bus.device_name(dev),
        })
    }
}
