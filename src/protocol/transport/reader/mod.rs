//! Async frame reader: pulls chunks from a [`SerialPort`] and runs them
//! through a [`UbxParser`] until a frame (or a frame error) comes out.
use crate::error::ReadFrameError;
use crate::protocol::transport::frame::UbxFrame;
use crate::protocol::transport::parser::{ParserStats, ProcessResult, UbxParser};
use crate::protocol::transport::traits::serial_port::SerialPort;
use crate::protocol::transport::DEFAULT_MAX_PAYLOAD;

/// Default size of the receive chunk handed to [`SerialPort::read`].
pub const DEFAULT_RX_CHUNK: usize = 64;

/// Parser plus a receive chunk that survives between calls.
///
/// Bytes read from the port but not yet parsed stay in the chunk, so two
/// frames delivered by the same `read` both come out, one per call.
///
/// `RX` must be non-zero; a zero-sized chunk is rejected at compile time.
///
/// ```compile_fail
/// use korri_ubx::protocol::transport::reader::FrameReader;
///
/// let reader: FrameReader<16, 0> = FrameReader::new();
/// ```
#[derive(Debug, Clone)]
pub struct FrameReader<const N: usize = DEFAULT_MAX_PAYLOAD, const RX: usize = DEFAULT_RX_CHUNK> {
    parser: UbxParser<N>,
    rx: [u8; RX],
    pos: usize,
    filled: usize,
}

impl<const N: usize, const RX: usize> Default for FrameReader<N, RX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const RX: usize> FrameReader<N, RX> {
    const RX_NOT_EMPTY: () = assert!(RX > 0, "FrameReader receive chunk must be non-zero");

    pub const fn new() -> Self {
        let () = Self::RX_NOT_EMPTY;
        Self {
            parser: UbxParser::new(),
            rx: [0; RX],
            pos: 0,
            filled: 0,
        }
    }

    /// Wait for the next validated frame.
    ///
    /// A [`ReadFrameError::Parse`] reports a discarded frame; the reader is
    /// already hunting for the next one and can be called again right away.
    ///
    /// Cancel-safe as long as the port's `read` is: every byte taken from the
    /// port is stored in the reader before the next await point.
    pub async fn next_frame<P: SerialPort>(
        &mut self,
        port: &mut P,
    ) -> Result<UbxFrame<N>, ReadFrameError<P::Error>> {
        loop {
            // Step 1: drain what is left of the previous chunk.
            while self.pos < self.filled {
                let byte = self.rx[self.pos];
                self.pos += 1;
                match self.parser.process_byte(byte) {
                    ProcessResult::FrameComplete(frame) => return Ok(frame),
                    ProcessResult::Rejected(error) => return Err(error.into()),
                    ProcessResult::Ignored | ProcessResult::ByteConsumed => {}
                }
            }

            // Step 2: refill from the port.
            self.pos = 0;
            self.filled = 0;
            let read = port
                .read(&mut self.rx)
                .await
                .map_err(ReadFrameError::Receive)?;
            self.filled = read.min(RX);
        }
    }

    /// Bytes received but not parsed yet.
    pub fn buffered(&self) -> &[u8] {
        &self.rx[self.pos..self.filled]
    }

    /// Drop buffered bytes and any partial frame. Counters are kept.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.filled = 0;
        self.parser.reset();
    }

    pub fn parser(&self) -> &UbxParser<N> {
        &self.parser
    }

    pub fn stats(&self) -> ParserStats {
        self.parser.stats()
    }
}
