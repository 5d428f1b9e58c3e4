//! UBX transport layer: message identities, frame encoding, incremental
//! parsing, and serial port abstraction traits.
//!
//! ## Frame layout
//!
//! ```text
//! size:  |   1   |   1   |   1   |   1   |    2    |  length  |   1   |   1   |
//! data:  | SYNC1 | SYNC2 | CLASS |  ID   | LENGTH  | PAYLOAD  | CK_A  | CK_B  |
//! ```
//!
//! - `SYNC1`/`SYNC2` are always `0xB5 0x62` and are not checksummed.
//! - `LENGTH` is little-endian and counts payload bytes only.
//! - `CK_A`/`CK_B` cover `CLASS`, `ID`, `LENGTH` and `PAYLOAD`.
//!
//! A `0xB5 0x62` pair inside a payload is not escaped: frame boundaries come
//! from the length field, sync hunting only happens between frames.

pub mod frame;
pub mod frame_builder;
pub mod message_id;
pub mod parser;
pub mod reader;
pub mod traits;

/// First sync character (`µ`).
pub const SYNC_CHAR_1: u8 = 0xB5;
/// Second sync character (`b`).
pub const SYNC_CHAR_2: u8 = 0x62;

/// Sync (2) + class (1) + id (1) + length (2).
pub const HEADER_LEN: usize = 6;
/// CK_A + CK_B.
pub const CHECKSUM_LEN: usize = 2;
/// Bytes added around the payload by the framing.
pub const FRAME_OVERHEAD: usize = HEADER_LEN + CHECKSUM_LEN;

/// Largest payload the 16-bit length field can describe.
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// Default payload bound of [`UbxParser`](parser::UbxParser) and [`UbxFrame`](frame::UbxFrame).
///
/// Large enough for the common navigation and monitoring messages
/// (NAV-SVINFO with 32 channels, MON-VER with extensions) while keeping a
/// parser around one kilobyte of RAM. Receivers configured for raw
/// measurement output need a larger bound.
pub const DEFAULT_MAX_PAYLOAD: usize = 1024;

/// Size of a poll frame (empty payload).
pub const POLL_FRAME_LEN: usize = FRAME_OVERHEAD;
