//! Unit tests for the UBX checksum accumulator.
use super::*;

#[test]
/// A fresh accumulator matches an all-zero checksum.
fn test_new_is_zero() {
    let checksum = UbxChecksum::new();
    assert!(checksum.matches(0, 0));
    assert_eq!(checksum, UbxChecksum::default());
}

#[test]
/// Reference value for a CFG-MSG poll, computed by hand:
/// 0x06 → (0x06, 0x06), 0x01 → (0x07, 0x0D), 0x00 → (0x07, 0x14), 0x00 → (0x07, 0x1B).
fn test_cfg_msg_poll_reference() {
    assert_eq!(checksum(&[0x06, 0x01, 0x00, 0x00]), (0x07, 0x1B));
}

#[test]
/// Other well-known poll frames (MON-VER, NAV-PVT).
fn test_known_poll_checksums() {
    assert_eq!(checksum(&[0x0A, 0x04, 0x00, 0x00]), (0x0E, 0x34));
    assert_eq!(checksum(&[0x01, 0x07, 0x00, 0x00]), (0x08, 0x19));
}

#[test]
/// Full frame captured from a receiver: B5 62 13 40 18 00 ... 51 AC.
fn test_captured_frame_checksum() {
    let frame = [
        0x13, 0x40, 0x18, 0x00, 0x10, 0x00, 0x00, 0x12, 0xE4, 0x07, 0x09, 0x05, 0x06, 0x28,
        0x30, 0x00, 0x40, 0x28, 0xEF, 0x0C, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
    let mut accumulator = UbxChecksum::new();
    for byte in frame {
        accumulator.update(byte);
    }
    assert!(accumulator.matches(0x51, 0xAC));
}

#[test]
/// Both sums wrap modulo 256 instead of overflowing.
fn test_sums_wrap() {
    let mut accumulator = UbxChecksum::new();
    accumulator.update_slice(&[0xFF, 0xFF]);
    // CK_A: 0xFF, 0x1FE → 0xFE ; CK_B: 0xFF, 0xFF + 0xFE = 0x1FD → 0xFD
    assert_eq!(accumulator.value(), (0xFE, 0xFD));
}

#[test]
/// `reset` discards everything accumulated so far.
fn test_reset() {
    let mut accumulator = UbxChecksum::new();
    accumulator.update_slice(&[0xF0, 0xE0]);
    assert!(!accumulator.matches(0, 0));

    accumulator.reset();
    assert!(accumulator.matches(0, 0));
}
