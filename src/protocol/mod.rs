//! High-level components of the UBX protocol: message identity tables,
//! framing/transport, and the serial link service.
pub mod link;
pub mod lookups;
pub mod transport;
