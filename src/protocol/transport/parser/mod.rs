//! Incremental UBX parser: rebuilds validated frames from an arbitrary,
//! possibly chunked byte stream (UART interrupt, DMA half-buffer, polling loop).
//!
//! ```text
//! SeekSync1 → SeekSync2 → ReadClass → ReadId → ReadLenLo → ReadLenHi
//!           → ReadPayload → ReadCkA → ReadCkB → (emit) → SeekSync1
//! ```
//!
//! Bytes outside a frame are skipped silently. A checksum mismatch or an
//! oversized length field discards the frame in progress and sends the
//! parser back to `SeekSync1`; it never gets stuck.
use crate::error::ParseError;
use crate::infra::codec::checksum::UbxChecksum;
use crate::protocol::transport::frame::UbxFrame;
use crate::protocol::transport::message_id::MessageId;
use crate::protocol::transport::{DEFAULT_MAX_PAYLOAD, SYNC_CHAR_1, SYNC_CHAR_2};

//==================================================================================Enums and Structs
/// Outcome of feeding one byte to the parser.
#[derive(Debug, PartialEq, Eq)]
pub enum ProcessResult<const N: usize = DEFAULT_MAX_PAYLOAD> {
    /// Byte discarded while hunting for the sync pair.
    Ignored,
    /// Byte integrated into the frame in progress.
    ByteConsumed,
    /// Checksum verified; the complete frame is now available.
    FrameComplete(UbxFrame<N>),
    /// Frame in progress discarded; the parser is hunting for sync again.
    Rejected(ParseError),
}

/// Parser states, one per header field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum ParserState {
    SeekSync1,
    SeekSync2,
    ReadClass,
    ReadId,
    ReadLenLo,
    ReadLenHi,
    ReadPayload,
    ReadCkA,
    ReadCkB,
}

/// Diagnostic counters, never reset by frame-level errors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParserStats {
    /// Frames delivered with a valid checksum.
    pub frames: u32,
    /// Frames discarded because of a checksum mismatch.
    pub checksum_errors: u32,
    /// Frames discarded because the declared length exceeded the buffer.
    pub oversized_frames: u32,
    /// Bytes skipped while hunting for the sync pair, a `0xB5` not
    /// followed by `0x62` included.
    pub noise_bytes: u32,
}

/// Byte-wise UBX frame parser with a fixed `N`-byte payload buffer.
///
/// One parser per input stream; it holds the partial frame across calls.
///
/// # Example
///
/// ```
/// use korri_ubx::protocol::transport::parser::UbxParser;
///
/// let mut parser: UbxParser = UbxParser::new();
/// // Leading noise, then an ACK-ACK for CFG-MSG.
/// let stream = [0xFF, 0xB5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0F, 0x38];
///
/// let mut frames = parser.feed(&stream);
/// let frame = frames.next().unwrap().unwrap();
/// assert_eq!(frame.payload(), &[0x06, 0x01]);
/// assert!(frames.next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct UbxParser<const N: usize = DEFAULT_MAX_PAYLOAD> {
    state: ParserState,
    class: u8,
    id: u8,
    len: u16,
    received: usize,
    checksum: UbxChecksum,
    ck_a: u8,
    buffer: [u8; N],
    stats: ParserStats,
}

impl<const N: usize> Default for UbxParser<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> UbxParser<N> {
    /// Instantiate a parser hunting for the first sync byte.
    pub const fn new() -> Self {
        Self {
            state: ParserState::SeekSync1,
            class: 0,
            id: 0,
            len: 0,
            received: 0,
            checksum: UbxChecksum::new(),
            ck_a: 0,
            buffer: [0; N],
            stats: ParserStats {
                frames: 0,
                checksum_errors: 0,
                oversized_frames: 0,
                noise_bytes: 0,
            },
        }
    }

    /// Largest payload this parser accepts.
    pub const fn max_payload(&self) -> usize {
        N
    }

    /// Drop any partial frame and hunt for sync again. Counters are kept.
    pub fn reset(&mut self) {
        self.state = ParserState::SeekSync1;
        self.len = 0;
        self.received = 0;
        self.checksum.reset();
        // No need to wipe the buffer; upcoming copies will overwrite it.
    }

    /// Whether no frame is in progress.
    pub fn is_idle(&self) -> bool {
        self.state == ParserState::SeekSync1
    }

    /// Diagnostic counters accumulated since construction.
    pub fn stats(&self) -> ParserStats {
        self.stats
    }

    //==================================================================================Process Functions
    /// Feed a single byte.
    ///
    /// Returns a `ProcessResult` telling whether the byte was skipped,
    /// consumed, completed a frame, or caused the frame to be discarded.
    pub fn process_byte(&mut self, byte: u8) -> ProcessResult<N> {
        match self.state {
            ParserState::SeekSync1 => {
                if byte == SYNC_CHAR_1 {
                    self.state = ParserState::SeekSync2;
                    return ProcessResult::ByteConsumed;
                }
                self.stats.noise_bytes = self.stats.noise_bytes.wrapping_add(1);
                ProcessResult::Ignored
            }
            ParserState::SeekSync2 => {
                if byte == SYNC_CHAR_2 {
                    self.checksum.reset();
                    self.state = ParserState::ReadClass;
                    return ProcessResult::ByteConsumed;
                }
                // The held 0xB5 was noise. A repeated 0xB5 may still start a frame.
                if byte == SYNC_CHAR_1 {
                    self.stats.noise_bytes = self.stats.noise_bytes.wrapping_add(1);
                } else {
                    self.stats.noise_bytes = self.stats.noise_bytes.wrapping_add(2);
                    self.state = ParserState::SeekSync1;
                }
                ProcessResult::Ignored
            }
            ParserState::ReadClass => {
                self.class = byte;
                self.checksum.update(byte);
                self.state = ParserState::ReadId;
                ProcessResult::ByteConsumed
            }
            ParserState::ReadId => {
                self.id = byte;
                self.checksum.update(byte);
                self.state = ParserState::ReadLenLo;
                ProcessResult::ByteConsumed
            }
            ParserState::ReadLenLo => {
                self.len = byte as u16;
                self.checksum.update(byte);
                self.state = ParserState::ReadLenHi;
                ProcessResult::ByteConsumed
            }
            ParserState::ReadLenHi => {
                self.len |= (byte as u16) << 8;
                self.checksum.update(byte);
                self.received = 0;

                if self.len as usize > N {
                    return self.reject(ParseError::FrameTooLarge {
                        id: self.message_id(),
                        declared: self.len,
                        max: N,
                    });
                }

                self.state = if self.len == 0 {
                    ParserState::ReadCkA
                } else {
                    ParserState::ReadPayload
                };
                ProcessResult::ByteConsumed
            }
            ParserState::ReadPayload => {
                self.buffer[self.received] = byte;
                self.received += 1;
                self.checksum.update(byte);

                if self.received >= self.len as usize {
                    self.state = ParserState::ReadCkA;
                }
                ProcessResult::ByteConsumed
            }
            ParserState::ReadCkA => {
                self.ck_a = byte;
                self.state = ParserState::ReadCkB;
                ProcessResult::ByteConsumed
            }
            ParserState::ReadCkB => {
                let (expected_a, expected_b) = self.checksum.value();
                if !self.checksum.matches(self.ck_a, byte) {
                    return self.reject(ParseError::ChecksumMismatch {
                        id: self.message_id(),
                        expected_a,
                        expected_b,
                        received_a: self.ck_a,
                        received_b: byte,
                    });
                }
                self.emit()
            }
        }
    }

    /// Feed a buffer; frames are produced lazily as the iterator advances.
    ///
    /// Bytes left unread when the iterator is dropped are not consumed.
    pub fn feed<'p, 'b>(&'p mut self, bytes: &'b [u8]) -> Frames<'p, 'b, N> {
        Frames {
            parser: self,
            bytes,
            position: 0,
        }
    }

    fn message_id(&self) -> MessageId {
        MessageId::new(self.class, self.id)
    }

    /// Copy the payload into a dedicated return structure and release the parser.
    fn emit(&mut self) -> ProcessResult<N> {
        let len = self.len as usize;
        let mut payload = [0u8; N];
        payload[..len].copy_from_slice(&self.buffer[..len]);

        let frame = UbxFrame {
            id: self.message_id(),
            payload,
            len,
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("UBX frame {} complete ({} bytes)", frame.id, len);

        self.stats.frames = self.stats.frames.wrapping_add(1);
        self.reset();
        ProcessResult::FrameComplete(frame)
    }

    fn reject(&mut self, error: ParseError) -> ProcessResult<N> {
        match error {
            ParseError::ChecksumMismatch { .. } => {
                self.stats.checksum_errors = self.stats.checksum_errors.wrapping_add(1);
            }
            ParseError::FrameTooLarge { .. } => {
                self.stats.oversized_frames = self.stats.oversized_frames.wrapping_add(1);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("UBX frame discarded: {}", error);

        self.reset();
        ProcessResult::Rejected(error)
    }
}

//==================================================================================FRAMES_ITERATOR
/// Lazy iterator over the frames (and frame errors) found in a byte buffer.
pub struct Frames<'p, 'b, const N: usize> {
    parser: &'p mut UbxParser<N>,
    bytes: &'b [u8],
    position: usize,
}

impl<const N: usize> Frames<'_, '_, N> {
    /// Bytes of the buffer not yet handed to the parser.
    pub fn remaining(&self) -> &[u8] {
        &self.bytes[self.position..]
    }
}

impl<const N: usize> Iterator for Frames<'_, '_, N> {
    type Item = Result<UbxFrame<N>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&byte) = self.bytes.get(self.position) {
            self.position += 1;
            match self.parser.process_byte(byte) {
                ProcessResult::FrameComplete(frame) => return Some(Ok(frame)),
                ProcessResult::Rejected(error) => return Some(Err(error)),
                ProcessResult::Ignored | ProcessResult::ByteConsumed => {}
            }
        }
        None
    }
}
