//! `korri-ubx` library: frame codec for the u-blox UBX binary protocol in a
//! `no_std` environment. The crate exposes the checksum primitive, the frame
//! encoder and the incremental parser, the message identity tables, and an
//! optional link service that pumps a serial port through the codec.
#![no_std]
//==================================================================================
/// Descriptor types shared between the generated tables and the runtime.
pub mod core;
/// Encoding, parsing and transport errors.
pub mod error;
/// Low-level codec primitives (UBX checksum).
pub mod infra;
/// UBX protocol implementation: framing, identity tables, serial transport and link service.
pub mod protocol;
//==================================================================================
