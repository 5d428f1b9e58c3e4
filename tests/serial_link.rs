//! End-to-end tests of `UbxSender` and `FrameReader` over an in-memory UART.
mod helpers;

use helpers::{encode_frame, MockSerialPort};
use korri_ubx::error::{EncodeError, ParseError, ReadFrameError, SendFrameError};
use korri_ubx::protocol::lookups::{AckId, CfgId, MonId, NavId};
use korri_ubx::protocol::transport::message_id::MessageId;
use korri_ubx::protocol::transport::reader::FrameReader;
use korri_ubx::protocol::transport::traits::serial_port::SerialPort;
use korri_ubx::protocol::transport::traits::ubx_sender::UbxSender;

#[tokio::test]
async fn test_send_poll_wire_bytes() {
    let (mut dut, mut receiver) = MockSerialPort::create_pair();

    dut.send_poll(CfgId::Msg.into()).await.unwrap();

    let bytes = receiver.collect(8).await;
    assert_eq!(bytes, [0xB5, 0x62, 0x06, 0x01, 0x00, 0x00, 0x07, 0x1B]);
}

#[tokio::test]
/// Frames larger than the send chunk are streamed in several writes.
async fn test_send_large_frame_in_chunks() {
    let (mut dut, mut receiver) = MockSerialPort::create_pair();
    let payload: Vec<u8> = (0..200u16).map(|value| value as u8).collect();

    dut.send_frame(MessageId::new(0x06, 0x8A), &payload)
        .await
        .unwrap();

    let bytes = receiver.collect(208).await;
    assert_eq!(bytes, encode_frame(0x06, 0x8A, &payload));
}

#[tokio::test]
async fn test_send_frame_too_long_writes_nothing() {
    let (mut dut, mut receiver) = MockSerialPort::create_pair();
    let payload = vec![0u8; 65_536];

    let result = dut.send_frame(CfgId::Prt.into(), &payload).await;
    assert!(matches!(
        result,
        Err(SendFrameError::Encode(EncodeError::InvalidLength { len: 65_536 }))
    ));

    drop(dut);
    let mut buf = [0u8; 8];
    assert_eq!(receiver.read(&mut buf).await, Err(()));
}

#[tokio::test]
/// Version poll answered by MON-VER: the reader returns the decoded reply.
async fn test_poll_and_read_reply() {
    let (mut dut, mut receiver) = MockSerialPort::create_pair();
    let mut reader: FrameReader = FrameReader::new();

    dut.send_poll(MonId::Ver.into()).await.unwrap();
    let request = receiver.collect(8).await;
    assert_eq!(&request[2..4], &[0x0A, 0x04]);

    let mut version = [0u8; 40];
    version[..8].copy_from_slice(b"ROM CORE");
    version[30..37].copy_from_slice(b"0008000");
    receiver
        .send_frame(MonId::Ver.into(), &version)
        .await
        .unwrap();

    let frame = reader.next_frame(&mut dut).await.unwrap();
    assert_eq!(frame.id, MessageId::from(MonId::Ver));
    assert_eq!(frame.payload(), &version);
}

#[tokio::test]
/// Two frames and an NMEA sentence in a single chunk: nothing is lost.
async fn test_reader_keeps_bytes_between_calls() {
    let (mut dut, receiver) = MockSerialPort::create_pair();
    let mut reader: FrameReader<128, 256> = FrameReader::new();

    let mut chunk = encode_frame(0x05, 0x01, &[0x06, 0x01]);
    chunk.extend_from_slice(b"$GNGGA,,,,,,0,00,99.99,,,,,,*56\r\n");
    chunk.extend_from_slice(&encode_frame(0x01, 0x07, &[0x11; 92]));
    receiver.inject(&chunk);

    let ack = reader.next_frame(&mut dut).await.unwrap();
    assert_eq!(ack.id, MessageId::from(AckId::Ack));
    assert!(!reader.buffered().is_empty());

    // NAV-PVT is not in the identity tables; it is delivered all the same.
    let pvt = reader.next_frame(&mut dut).await.unwrap();
    assert_eq!(pvt.id, MessageId::new(0x01, 0x07));
    assert!(!pvt.id.is_known());
    assert_eq!(pvt.len, 92);
    assert!(reader.buffered().is_empty());
    assert_eq!(reader.stats().frames, 2);
}

#[tokio::test]
/// Bytes trickling in one at a time still produce the frame.
async fn test_reader_byte_by_byte() {
    let (mut dut, receiver) = MockSerialPort::create_pair();
    let mut reader: FrameReader<64, 1> = FrameReader::new();

    for byte in encode_frame(0x01, 0x12, &[0xAB; 36]) {
        receiver.inject(&[byte]);
    }

    let frame = reader.next_frame(&mut dut).await.unwrap();
    assert_eq!(frame.id, MessageId::from(NavId::Velned));
    assert_eq!(frame.payload(), &[0xAB; 36]);
}

#[tokio::test]
/// A corrupted frame is reported once, then the next frame is read normally.
async fn test_reader_corruption_recovery() {
    let (mut dut, receiver) = MockSerialPort::create_pair();
    let mut reader: FrameReader<64> = FrameReader::new();

    let mut corrupted = encode_frame(0x01, 0x02, &[0x55; 28]);
    let last = corrupted.len() - 1;
    corrupted[last] ^= 0x01;
    receiver.inject(&corrupted);
    receiver.inject(&encode_frame(0x01, 0x03, &[0x03; 16]));

    match reader.next_frame(&mut dut).await {
        Err(ReadFrameError::Parse(ParseError::ChecksumMismatch { id, .. })) => {
            assert_eq!(id, MessageId::from(NavId::Posllh));
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let status = reader.next_frame(&mut dut).await.unwrap();
    assert_eq!(status.id, MessageId::from(NavId::Status));
    assert_eq!(reader.stats().checksum_errors, 1);
}

#[tokio::test]
/// A length above the reader bound is rejected without waiting for the payload.
async fn test_reader_oversized_frame() {
    let (mut dut, receiver) = MockSerialPort::create_pair();
    let mut reader: FrameReader<16> = FrameReader::new();

    receiver.inject(&encode_frame(0x0A, 0x09, &[0u8; 60]));
    receiver.inject(&encode_frame(0x0A, 0x09, &[0u8; 16]));

    assert!(matches!(
        reader.next_frame(&mut dut).await,
        Err(ReadFrameError::Parse(ParseError::FrameTooLarge {
            declared: 60,
            max: 16,
            ..
        }))
    ));
    let frame = reader.next_frame(&mut dut).await.unwrap();
    assert_eq!(frame.id, MessageId::from(MonId::Hw));
    assert_eq!(frame.len, 16);
}

#[tokio::test]
async fn test_reader_receive_error() {
    let (mut dut, receiver) = MockSerialPort::create_pair();
    let mut reader: FrameReader = FrameReader::new();

    drop(receiver);
    assert!(matches!(
        reader.next_frame(&mut dut).await,
        Err(ReadFrameError::Receive(()))
    ));
}
