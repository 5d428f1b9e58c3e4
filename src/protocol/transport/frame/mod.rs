//! In-memory representation of a validated UBX frame.
use crate::error::EncodeError;
use crate::protocol::transport::frame_builder::UbxFrameBuilder;
use crate::protocol::transport::message_id::MessageId;
use crate::protocol::transport::DEFAULT_MAX_PAYLOAD;

/// Frame delivered by the parser once its checksum has been verified.
///
/// The payload is copied out of the parser into a fixed `[u8; N]` array so
/// the frame can outlive the parser call and be forwarded through channels
/// without allocation. Only the first `len` bytes are meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UbxFrame<const N: usize = DEFAULT_MAX_PAYLOAD> {
    /// Class/id pair from the header.
    pub id: MessageId,
    /// Payload storage.
    pub payload: [u8; N],
    /// Number of valid payload bytes (the header length field).
    pub len: usize,
}

impl<const N: usize> UbxFrame<N> {
    /// Build a frame from an identity and a payload slice.
    ///
    /// Returns `None` when `payload` does not fit in `N` bytes.
    pub fn new(id: MessageId, payload: &[u8]) -> Option<Self> {
        if payload.len() > N {
            return None;
        }
        let mut storage = [0u8; N];
        storage[..payload.len()].copy_from_slice(payload);
        Some(Self {
            id,
            payload: storage,
            len: payload.len(),
        })
    }

    /// Raw class byte.
    #[inline]
    pub fn class(&self) -> u8 {
        self.id.class()
    }

    /// Raw id byte.
    #[inline]
    pub fn msg_id(&self) -> u8 {
        self.id.id()
    }

    /// Valid payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload[..self.len]
    }

    /// Checks whether the frame carries no payload (e.g. a poll).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the frame once re-encoded on the wire.
    #[inline]
    pub fn wire_len(&self) -> usize {
        self.builder().encoded_len()
    }

    /// Encoder for this frame.
    pub fn builder(&self) -> UbxFrameBuilder<'_> {
        UbxFrameBuilder::new(self.id, self.payload())
    }

    /// Re-encode the frame into `out`, returning the number of bytes written.
    pub fn encode_into(&self, out: &mut [u8]) -> Result<usize, EncodeError> {
        self.builder().encode_into(out)
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for UbxFrame<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "UbxFrame {{ id: {}, payload: {=[u8]} }}", self.id, self.payload())
    }
}
