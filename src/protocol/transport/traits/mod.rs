//! Abstraction traits used by the transport layer (serial port and frame sender).
pub mod serial_port;
pub mod ubx_sender;
