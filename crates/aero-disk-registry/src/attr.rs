//! Named attribute table and read dispatch.
//!
//! Attributes are static, not per-node: a fixed table maps a name to its
//! accessor, and dispatch routes `(node, name)` through it. Values are
//! newline-terminated text, one value per read:
//!
//! - `size` renders the capacity as unsigned decimal.
//! - `disk_id` renders the identity, `0x` + 16 lowercase hex digits for the
//!   WWN form or `vendor:device` lowercase hex for the pair form.

use crate::error::AttrError;
use crate::metadata::{DiskIdentity, DiskMetadata};
use crate::node::NodeRef;

pub type ShowFn = fn(&DiskMetadata) -> String;
pub type StoreFn = fn(&NodeRef, &str) -> Result<(), AttrError>;

/// One attribute table entry. An absent accessor means the operation is not
/// implemented for that direction.
pub struct DiskAttribute {
    pub name: &'static str,
    pub show: Option<ShowFn>,
    pub store: Option<StoreFn>,
}

fn show_size(metadata: &DiskMetadata) -> String {
    format!("{}\n", metadata.capacity_bytes)
}

fn show_disk_id(metadata: &DiskMetadata) -> String {
    match metadata.identity {
        DiskIdentity::Wwn(wwn) => format!("0x{wwn:016x}\n"),
        DiskIdentity::Pair {
            vendor_id,
            device_id,
        } => format!("{vendor_id:x}:{device_id:x}\n"),
    }
}

/// The fixed per-node attribute set. No attribute has a store accessor.
pub const DEFAULT_ATTRS: &[DiskAttribute] = &[
    DiskAttribute {
        name: "size",
        show: Some(show_size),
        store: None,
    },
    DiskAttribute {
        name: "disk_id",
        show: Some(show_disk_id),
        store: None,
    },
];

fn lookup(attr_name: &str) -> Result<&'static DiskAttribute, AttrError> {
    DEFAULT_ATTRS
        .iter()
        .find(|attr| attr.name == attr_name)
        .ok_or_else(|| AttrError::UnknownAttribute(attr_name.to_string()))
}

/// Reads one attribute value. The attribute is resolved first; a known
/// attribute with no node (or no reader) fails with `IoError`.
pub fn read_attribute(node: Option<&NodeRef>, attr_name: &str) -> Result<String, AttrError> {
    let attr = lookup(attr_name)?;
    let node = node.ok_or(AttrError::IoError)?;
    let show = attr.show.ok_or(AttrError::IoError)?;
    Ok(show(node.metadata()))
}

/// Store path. Every attribute in the fixed table is read-only, so a known
/// attribute always fails with `ReadOnly`.
pub fn write_attribute(
    node: Option<&NodeRef>,
    attr_name: &str,
    value: &str,
) -> Result<(), AttrError> {
    let attr = lookup(attr_name)?;
    let node = node.ok_or(AttrError::IoError)?;
    match attr.store {
        Some(store) => store(node, value),
        None => Err(AttrError::ReadOnly),
    }
}
