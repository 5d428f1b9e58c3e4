//! Byte-level codec primitives.
pub mod checksum;
