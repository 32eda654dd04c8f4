use aero_disk_registry::{
    is_storage_class, storage_scan, ClassFilter, MemoryPciBus, PciBdf, IDE_PIIX3,
    NIC_E1000_82540EM, PCI_CLASS_STORAGE_IDE, PCI_CLASS_STORAGE_RAID, PCI_CLASS_STORAGE_SATA,
    PCI_CLASS_STORAGE_SCSI, RAID_ICH9R, SATA_AHCI_ICH9, SCSI_LSI53C895A,
};

#[test]
fn storage_classes_are_exactly_the_allow_list() {
    assert!(is_storage_class(PCI_CLASS_STORAGE_SCSI));
    assert!(is_storage_class(PCI_CLASS_STORAGE_IDE));
    assert!(is_storage_class(PCI_CLASS_STORAGE_RAID));
    assert!(is_storage_class(PCI_CLASS_STORAGE_SATA));

    assert!(!is_storage_class(0x0000));
    assert!(!is_storage_class(0xFFFF));
    // Other mass-storage subclasses (floppy, NVMe) are outside the allow-list.
    assert!(!is_storage_class(0x0102));
    assert!(!is_storage_class(0x0108));
    // Non-storage base classes.
    assert!(!is_storage_class(0x0200));
    assert!(!is_storage_class(0x0300));
}

#[test]
fn storage_filter_matches_the_free_function_for_every_code() {
    let filter = ClassFilter::storage();
    for code in 0..=u16::MAX {
        assert_eq!(filter.matches(code), is_storage_class(code), "code {code:#06x}");
    }
}

#[test]
fn scan_admits_all_four_controller_kinds_and_nothing_else() {
    let mut bus = MemoryPciBus::new();
    bus.add_device(PciBdf::new(0, 1, 0), NIC_E1000_82540EM);
    bus.add_device(PciBdf::new(0, 2, 0), SATA_AHCI_ICH9);
    bus.add_device(PciBdf::new(0, 3, 0), IDE_PIIX3);
    bus.add_device(PciBdf::new(0, 4, 0), SCSI_LSI53C895A);
    bus.add_device(PciBdf::new(0, 5, 0), RAID_ICH9R);

    let matched: Vec<PciBdf> = storage_scan(&bus, ClassFilter::storage()).collect();
    assert_eq!(
        matched,
        vec![
            PciBdf::new(0, 2, 0),
            PciBdf::new(0, 3, 0),
            PciBdf::new(0, 4, 0),
            PciBdf::new(0, 5, 0),
        ]
    );
}
