//! Consistency checks between the generated enums and the descriptor tables.
use super::*;

#[test]
/// Every class enum variant maps back to a descriptor with the same byte and name.
fn test_classes_match_descriptors() {
    assert_eq!(MessageClass::ALL.len(), CLASSES.len());
    for class in MessageClass::ALL {
        let descriptor = class_descriptor(class.as_u8()).expect("class must be described");
        assert_eq!(descriptor.name, class.name());
        assert_eq!(descriptor.messages, class.messages());
        assert_eq!(MessageClass::from_u8(class.as_u8()), Some(class));
    }
}

#[test]
/// Class bytes follow the receiver protocol reference.
fn test_class_bytes() {
    assert_eq!(MessageClass::Nav.as_u8(), 0x01);
    assert_eq!(MessageClass::Rxm.as_u8(), 0x02);
    assert_eq!(MessageClass::Inf.as_u8(), 0x04);
    assert_eq!(MessageClass::Ack.as_u8(), 0x05);
    assert_eq!(MessageClass::Cfg.as_u8(), 0x06);
    assert_eq!(MessageClass::Mon.as_u8(), 0x0A);
    assert_eq!(MessageClass::Aid.as_u8(), 0x0B);
    assert_eq!(MessageClass::Tim.as_u8(), 0x0D);
    assert_eq!(MessageClass::Esf.as_u8(), 0x10);
    assert_eq!(MessageClass::from_u8(0x03), None);
}

#[test]
/// Id enums resolve bytes and labels within their class only.
fn test_id_enums() {
    assert_eq!(NavId::from_u8(0x02), Some(NavId::Posllh));
    assert_eq!(NavId::Posllh.name(), "POSLLH");
    assert_eq!(CfgId::from_u8(0x3D), Some(CfgId::Tmode2));
    assert_eq!(CfgId::Nav5.as_u8(), 0x24);
    assert_eq!(MonId::Hw2.as_u8(), 0x0B);
    assert_eq!(EsfId::Status.as_u8(), 0x10);
    assert_eq!(InfId::Error.as_u8(), 0x00);
    assert_eq!(TimId::CLASS, MessageClass::Tim);
    assert_eq!(RxmId::from_u8(0xFF), None);
}

#[test]
/// Lookups by raw bytes.
fn test_descriptor_lookups() {
    let descriptor = message_descriptor(0x01, 0x60).expect("NAV-AOPSTATUS is known");
    assert_eq!(descriptor.name, "AOPSTATUS");
    assert!(message_descriptor(0x01, 0x99).is_none());
    assert!(message_descriptor(0x42, 0x01).is_none());
}

#[test]
/// The flattened iterator yields every described message exactly once.
fn test_known_messages() {
    let total: usize = CLASSES.iter().map(|class| class.messages.len()).sum();
    assert_eq!(known_messages().count(), total);
    assert!(known_messages().all(|id| id.is_known()));
    assert!(known_messages().any(|id| id == MessageId::new(0x0B, 0x50)));
}
