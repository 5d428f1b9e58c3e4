//! Tests for the UBX frame encoder and its lazy byte iterator.
use super::*;
use crate::protocol::lookups::{CfgId, MonId};

#[test]
/// CFG-MSG poll: zero length field and the hand-computed checksum 0x07 0x1B.
fn test_cfg_msg_poll() {
    let mut out = [0u8; 16];
    let written = UbxFrameBuilder::poll(CfgId::Msg.into())
        .encode_into(&mut out)
        .unwrap();

    assert_eq!(written, 8);
    assert_eq!(&out[..8], &[0xB5, 0x62, 0x06, 0x01, 0x00, 0x00, 0x07, 0x1B]);
    assert_eq!(encode_poll(CfgId::Msg.into()), out[..8]);
}

#[test]
/// Payload bytes follow a little-endian length field.
fn test_payload_frame_layout() {
    // CFG-MSG set: enable NAV-POSLLH on the current port at rate 1.
    let payload = [0x01, 0x02, 0x01];
    let mut out = [0u8; 16];
    let written = encode(0x06, 0x01, &payload, &mut out).unwrap();

    assert_eq!(written, 11);
    assert_eq!(&out[..6], &[0xB5, 0x62, 0x06, 0x01, 0x03, 0x00]);
    assert_eq!(&out[6..9], &payload);
    // 06 01 03 00 01 02 01
    // CK_A: 06 07 0A 0A 0B 0D 0E ; CK_B: 06 0D 17 21 2C 39 47
    assert_eq!(&out[9..11], &[0x0E, 0x47]);
}

#[test]
/// Length field above 255 uses both bytes.
fn test_length_field_little_endian() {
    let payload = [0xAA; 300];
    let builder = UbxFrameBuilder::new(MessageId::new(0x02, 0x10), &payload);
    assert_eq!(builder.length_field().unwrap(), 300);

    let mut out = [0u8; 400];
    builder.encode_into(&mut out).unwrap();
    assert_eq!(out[4], 0x2C);
    assert_eq!(out[5], 0x01);
}

#[test]
/// Payloads beyond the 16-bit length field are refused and nothing is written.
fn test_invalid_length() {
    let payload = [0u8; MAX_PAYLOAD_LEN + 1];
    let builder = UbxFrameBuilder::new(MessageId::new(0x02, 0x15), &payload);
    let mut out = [0x55u8; 8];

    assert_eq!(
        builder.encode_into(&mut out),
        Err(EncodeError::InvalidLength {
            len: MAX_PAYLOAD_LEN + 1
        })
    );
    assert!(out.iter().all(|&b| b == 0x55));
    assert!(matches!(
        builder.build(),
        Err(EncodeError::InvalidLength { .. })
    ));
}

#[test]
/// The largest representable payload is accepted.
fn test_max_length_accepted() {
    let payload = [0u8; MAX_PAYLOAD_LEN];
    let builder = UbxFrameBuilder::new(MessageId::new(0x02, 0x15), &payload);
    assert_eq!(builder.length_field().unwrap(), u16::MAX);
    assert_eq!(builder.build().unwrap().len(), MAX_PAYLOAD_LEN + FRAME_OVERHEAD);
}

#[test]
/// Output buffer shorter than the frame is reported without partial writes.
fn test_buffer_too_small() {
    let mut out = [0u8; 7];
    let result = UbxFrameBuilder::poll(MonId::Ver.into()).encode_into(&mut out);

    assert_eq!(
        result,
        Err(EncodeError::BufferTooSmall {
            asked: 8,
            available: 7
        })
    );
    assert_eq!(out, [0u8; 7]);
}

#[test]
/// The lazy iterator yields exactly the bytes of `encode_into`.
fn test_frame_bytes_match_buffer_encoding() {
    let payload = [0x10, 0x20, 0x30, 0x40, 0xB5, 0x62, 0x00];
    let builder = UbxFrameBuilder::new(MessageId::new(0x0A, 0x09), &payload);

    let mut out = [0u8; 32];
    let written = builder.encode_into(&mut out).unwrap();

    let mut bytes = builder.build().unwrap();
    assert_eq!(bytes.len(), written);
    for expected in &out[..written] {
        assert_eq!(bytes.next(), Some(*expected));
    }
    assert_eq!(bytes.len(), 0);
    assert_eq!(bytes.next(), None);
}

#[test]
/// Builder-level checksum agrees with the encoded trailer.
fn test_checksum_accessor() {
    let builder = UbxFrameBuilder::poll(MonId::Ver.into());
    assert_eq!(builder.checksum().unwrap(), (0x0E, 0x34));
    assert_eq!(builder.encoded_len(), POLL_FRAME_LEN);
}
