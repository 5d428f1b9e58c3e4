//! Quickstart: build a few configuration frames, then parse a captured
//! receiver stream that mixes NMEA sentences, UBX replies and a corrupted frame.

use korri_ubx::protocol::{
    lookups::{CfgId, MonId, NavId},
    transport::{
        frame_builder::{encode_poll, UbxFrameBuilder},
        message_id::MessageId,
        parser::UbxParser,
    },
};

fn print_hex(label: &str, bytes: &[u8]) {
    print!("  {label}:");
    for byte in bytes {
        print!(" {byte:02X}");
    }
    println!();
}

fn main() {
    println!("=== UBX Quickstart ===\n");

    // Example 1: poll requests are fixed 8-byte frames.
    println!("1. Poll requests:");
    for id in [CfgId::Msg.message_id(), MonId::Ver.message_id()] {
        print_hex(&id.to_string(), &encode_poll(id));
    }
    println!();

    // Example 2: frames with a payload.
    println!("2. CFG-MSG enabling NAV-POSLLH once per solution:");
    let builder = UbxFrameBuilder::new(CfgId::Msg.into(), &[0x01, 0x02, 0x01]);
    let mut out = [0u8; 16];
    match builder.encode_into(&mut out) {
        Ok(len) => print_hex("frame", &out[..len]),
        Err(error) => println!("  encode failed: {error}"),
    }
    if let Ok((ck_a, ck_b)) = builder.checksum() {
        println!("  checksum: {ck_a:02X} {ck_b:02X}");
    }
    println!();

    // Example 3: parse a noisy stream.
    println!("3. Parsing a receiver stream:");
    let mut stream = Vec::new();
    stream.extend_from_slice(b"$GNRMC,,V,,,,,,,,,,N*4D\r\n");
    stream.extend_from_slice(&[0xB5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0F, 0x38]);

    let posllh = [0u8; 28];
    let mut frame = [0u8; 36];
    if let Ok(len) = UbxFrameBuilder::new(NavId::Posllh.into(), &posllh).encode_into(&mut frame) {
        let mut corrupted = frame;
        corrupted[len - 1] ^= 0xFF;
        stream.extend_from_slice(&corrupted[..len]);
        stream.extend_from_slice(&frame[..len]);
    }
    stream.extend_from_slice(&encode_poll(MessageId::new(0x01, 0x07)));

    let mut parser: UbxParser<256> = UbxParser::new();
    // Deliver the stream in UART-sized chunks.
    for chunk in stream.chunks(16) {
        for result in parser.feed(chunk) {
            match result {
                Ok(frame) => println!(
                    "  {} ({} payload bytes, known: {})",
                    frame.id,
                    frame.len,
                    frame.id.is_known()
                ),
                Err(error) => println!("  discarded: {error}"),
            }
        }
    }

    let stats = parser.stats();
    println!(
        "\n  frames: {}, checksum errors: {}, oversized: {}, noise bytes: {}",
        stats.frames, stats.checksum_errors, stats.oversized_frames, stats.noise_bytes
    );
}
