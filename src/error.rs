//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (frame encoding, stream
//! parsing, serial transmission, link supervision).
use crate::protocol::transport::message_id::MessageId;
use thiserror_no_std::Error;

//==================================================================================ENCODE_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failures while building a UBX frame. No byte is produced when one occurs.
pub enum EncodeError {
    /// Payload does not fit the 16-bit length field.
    #[error("Invalid payload length: {len} bytes exceeds the 16-bit length field")]
    InvalidLength { len: usize },
    /// Output buffer cannot hold the whole frame.
    #[error("Buffer too small -> asked: {asked}, available: {available}")]
    BufferTooSmall { asked: usize, available: usize },
}

//==================================================================================PARSE_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Frames rejected by the incremental parser. The parser has already
/// returned to sync hunting when one of these is reported.
pub enum ParseError {
    /// Received CK_A/CK_B differ from the checksum computed over the frame.
    #[error(
        "Checksum mismatch for {id}: expected {expected_a:#04x} {expected_b:#04x}, received {received_a:#04x} {received_b:#04x}"
    )]
    ChecksumMismatch {
        id: MessageId,
        expected_a: u8,
        expected_b: u8,
        received_a: u8,
        received_b: u8,
    },
    /// Declared payload length exceeds the parser buffer.
    #[error("Frame too large for {id}: declared {declared} bytes, max {max}")]
    FrameTooLarge {
        id: MessageId,
        declared: u16,
        max: usize,
    },
}

impl ParseError {
    /// Identity of the frame that was discarded.
    pub fn message_id(&self) -> MessageId {
        match self {
            ParseError::ChecksumMismatch { id, .. } | ParseError::FrameTooLarge { id, .. } => *id,
        }
    }
}

//==================================================================================SEND_ERROR
#[derive(Error, Debug)]
/// Errors encountered when sending a frame (encode + transmit).
pub enum SendFrameError<E: core::fmt::Debug> {
    /// Frame could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// Serial port refused or failed to write the bytes.
    #[error("Serial send error: {0:?}")]
    Send(E),
}

//==================================================================================READ_ERROR
#[derive(Error, Debug)]
/// Errors encountered while pulling the next frame from a serial port.
pub enum ReadFrameError<E: core::fmt::Debug> {
    /// A frame was discarded; the reader keeps going on the next call.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Serial port failed to deliver bytes.
    #[error("Serial receive error: {0:?}")]
    Receive(E),
}

//==================================================================================LINK_ERRORS
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised by [`LinkHandle`](crate::protocol::link::LinkHandle) before a command is queued.
pub enum LinkHandleError {
    /// Payload does not fit in the command buffer of the link service.
    #[error("Payload too large for link command -> asked: {asked}, available: {available}")]
    PayloadTooLarge { asked: usize, available: usize },
}

#[derive(Error, Debug)]
/// Errors ending the link service loop.
pub enum LinkRunError<E: core::fmt::Debug> {
    /// Serial port failed while receiving.
    #[error("Serial receive error: {0:?}")]
    Receive(E),
    /// A queued frame could not be sent.
    #[error("Frame send error: {0:?}")]
    Send(SendFrameError<E>),
}
