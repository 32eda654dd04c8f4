use crate::pci::{BusQuery, ClassFilter, PciBdf};

/// Lazy, one-shot enumeration of the bus devices admitted by `filter`.
///
/// The sequence is finite and non-restartable; class codes are read as the
/// iterator advances. Enumeration order is bus-assigned and not part of the
/// contract. No nodes are allocated here.
pub fn storage_scan<'a>(
    bus: &'a dyn BusQuery,
    filter: ClassFilter,
) -> impl Iterator<Item = PciBdf> + 'a {
    bus.list_devices()
        .into_iter()
        .filter(move |dev| filter.matches(bus.class_code(*dev)))
}
