//! UBX frame encoder. Wraps a (class, id, payload) triple into the wire
//! layout: sync pair, header, payload and CK_A/CK_B.
//!
//! Two output styles are available:
//! - [`UbxFrameBuilder::encode_into`] writes the whole frame into a caller buffer;
//! - [`UbxFrameBuilder::build`] returns a lazy byte iterator, handy to feed a
//!   UART FIFO without reserving a full-frame buffer.
use core::iter::FusedIterator;

use crate::error::EncodeError;
use crate::infra::codec::checksum::UbxChecksum;
use crate::protocol::transport::message_id::MessageId;
use crate::protocol::transport::{
    FRAME_OVERHEAD, HEADER_LEN, MAX_PAYLOAD_LEN, POLL_FRAME_LEN, SYNC_CHAR_1, SYNC_CHAR_2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Parameters of a single outgoing frame.
pub struct UbxFrameBuilder<'a> {
    id: MessageId,
    payload: &'a [u8],
}

impl<'a> UbxFrameBuilder<'a> {
    /// Prepare a frame carrying `payload`.
    pub fn new(id: MessageId, payload: &'a [u8]) -> Self {
        Self { id, payload }
    }

    /// Identity written in the header.
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Payload that will follow the header.
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Total number of bytes on the wire (payload + 8).
    pub fn encoded_len(&self) -> usize {
        FRAME_OVERHEAD + self.payload.len()
    }

    /// Value of the 16-bit length field, or `InvalidLength` when the payload is too large.
    pub fn length_field(&self) -> Result<u16, EncodeError> {
        if self.payload.len() > MAX_PAYLOAD_LEN {
            return Err(EncodeError::InvalidLength {
                len: self.payload.len(),
            });
        }
        Ok(self.payload.len() as u16)
    }

    /// `(CK_A, CK_B)` over class, id, length and payload.
    pub fn checksum(&self) -> Result<(u8, u8), EncodeError> {
        let length = self.length_field()?.to_le_bytes();
        let mut checksum = UbxChecksum::new();
        checksum.update_slice(&[self.id.class(), self.id.id(), length[0], length[1]]);
        checksum.update_slice(self.payload);
        Ok(checksum.value())
    }

    /// Write the complete frame at the start of `out` and return its length.
    ///
    /// Nothing is written when the payload is too large or `out` is too small.
    pub fn encode_into(&self, out: &mut [u8]) -> Result<usize, EncodeError> {
        let length = self.length_field()?;
        let total = self.encoded_len();
        if out.len() < total {
            return Err(EncodeError::BufferTooSmall {
                asked: total,
                available: out.len(),
            });
        }

        let payload_end = HEADER_LEN + self.payload.len();
        out[0] = SYNC_CHAR_1;
        out[1] = SYNC_CHAR_2;
        out[2] = self.id.class();
        out[3] = self.id.id();
        out[4..HEADER_LEN].copy_from_slice(&length.to_le_bytes());
        out[HEADER_LEN..payload_end].copy_from_slice(self.payload);

        // Sync bytes are excluded from the checksum.
        let mut checksum = UbxChecksum::new();
        checksum.update_slice(&out[2..payload_end]);
        let (ck_a, ck_b) = checksum.value();
        out[payload_end] = ck_a;
        out[payload_end + 1] = ck_b;

        #[cfg(feature = "defmt")]
        defmt::trace!("Encoded {} ({} bytes)", self.id, total);

        Ok(total)
    }

    /// Validate the frame and return an iterator producing its bytes one by one.
    pub fn build(self) -> Result<FrameBytes<'a>, EncodeError> {
        let length = self.length_field()?;
        Ok(FrameBytes {
            id: self.id,
            payload: self.payload,
            length: length.to_le_bytes(),
            position: 0,
            checksum: UbxChecksum::new(),
        })
    }
}

impl UbxFrameBuilder<'static> {
    /// Empty-payload frame asking the receiver to output `id` once.
    pub fn poll(id: MessageId) -> Self {
        Self::new(id, &[])
    }
}

//==================================================================================FRAME_BYTES
/// Lazy iterator yielding the wire bytes of a frame. The checksum is
/// accumulated while the bytes go out, so no buffer is needed.
#[derive(Debug, Clone)]
pub struct FrameBytes<'a> {
    id: MessageId,
    payload: &'a [u8],
    length: [u8; 2],
    position: usize,
    checksum: UbxChecksum,
}

impl FrameBytes<'_> {
    fn total_len(&self) -> usize {
        FRAME_OVERHEAD + self.payload.len()
    }
}

impl Iterator for FrameBytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let payload_end = HEADER_LEN + self.payload.len();
        if self.position >= self.total_len() {
            return None;
        }

        let byte = match self.position {
            0 => SYNC_CHAR_1,
            1 => SYNC_CHAR_2,
            2 => self.id.class(),
            3 => self.id.id(),
            4 => self.length[0],
            5 => self.length[1],
            p if p < payload_end => self.payload[p - HEADER_LEN],
            p if p == payload_end => self.checksum.value().0,
            _ => self.checksum.value().1,
        };

        if (2..payload_end).contains(&self.position) {
            self.checksum.update(byte);
        }
        self.position += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameBytes<'_> {}
impl FusedIterator for FrameBytes<'_> {}

//==================================================================================HELPERS
/// Encode `class`/`id`/`payload` into `out`; see [`UbxFrameBuilder::encode_into`].
pub fn encode(class: u8, id: u8, payload: &[u8], out: &mut [u8]) -> Result<usize, EncodeError> {
    UbxFrameBuilder::new(MessageId::new(class, id), payload).encode_into(out)
}

/// Poll frame for `id`: zero-length payload and its real checksum.
///
/// # Example
///
/// ```
/// use korri_ubx::protocol::lookups::CfgId;
/// use korri_ubx::protocol::transport::frame_builder::encode_poll;
///
/// assert_eq!(
///     encode_poll(CfgId::Msg.into()),
///     [0xB5, 0x62, 0x06, 0x01, 0x00, 0x00, 0x07, 0x1B]
/// );
/// ```
pub fn encode_poll(id: MessageId) -> [u8; POLL_FRAME_LEN] {
    let mut checksum = UbxChecksum::new();
    checksum.update_slice(&[id.class(), id.id(), 0x00, 0x00]);
    let (ck_a, ck_b) = checksum.value();
    [
        SYNC_CHAR_1,
        SYNC_CHAR_2,
        id.class(),
        id.id(),
        0x00,
        0x00,
        ck_a,
        ck_b,
    ]
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
