//! `SerialPort` extension providing a high-level API to send UBX frames: it
//! encodes the frame lazily and writes it in small chunks, so no full-frame
//! buffer is needed even for large configuration payloads.
use crate::{
    error::SendFrameError,
    protocol::transport::frame_builder::{encode_poll, UbxFrameBuilder},
    protocol::transport::message_id::MessageId,
    protocol::transport::traits::serial_port::SerialPort,
};

/// Stack chunk used to stream a frame to the port.
pub const SEND_CHUNK_LEN: usize = 64;

/// Trait extending `SerialPort` with ergonomic frame-sending helpers.
pub trait UbxSender: SerialPort
where
    <Self as SerialPort>::Error: core::fmt::Debug,
{
    /// Encode and send a frame.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`SendFrameError::Encode`] when the payload does not fit the length field
    ///   (nothing is written in that case)
    /// - [`SendFrameError::Send`] when the port fails
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use korri_ubx::protocol::lookups::CfgId;
    /// use korri_ubx::protocol::transport::traits::ubx_sender::UbxSender;
    ///
    /// // CFG-RATE: 200 ms measurement period, 1 cycle per solution, GPS time.
    /// uart.send_frame(CfgId::Rate.into(), &[0xC8, 0x00, 0x01, 0x00, 0x01, 0x00]).await?;
    /// ```
    fn send_frame<'a>(
        &'a mut self,
        id: MessageId,
        payload: &'a [u8],
    ) -> impl core::future::Future<Output = Result<(), SendFrameError<Self::Error>>> + 'a;

    /// Send a poll request (empty payload) for `id`.
    fn send_poll<'a>(
        &'a mut self,
        id: MessageId,
    ) -> impl core::future::Future<Output = Result<(), SendFrameError<Self::Error>>> + 'a;
}

impl<P: SerialPort> UbxSender for P
where
    P::Error: core::fmt::Debug,
{
    fn send_frame<'a>(
        &'a mut self,
        id: MessageId,
        payload: &'a [u8],
    ) -> impl core::future::Future<Output = Result<(), SendFrameError<Self::Error>>> + 'a {
        async move {
            // Step 1: validate before touching the port.
            let mut bytes = UbxFrameBuilder::new(id, payload).build()?;

            // Step 2: stream the frame chunk by chunk.
            let mut chunk = [0u8; SEND_CHUNK_LEN];
            loop {
                let mut filled = 0;
                for (slot, byte) in chunk.iter_mut().zip(&mut bytes) {
                    *slot = byte;
                    filled += 1;
                }
                if filled == 0 {
                    break;
                }
                self.write(&chunk[..filled])
                    .await
                    .map_err(SendFrameError::Send)?;
            }

            #[cfg(feature = "defmt")]
            defmt::debug!("Sent {} ({} payload bytes)", id, payload.len());

            Ok(())
        }
    }

    fn send_poll<'a>(
        &'a mut self,
        id: MessageId,
    ) -> impl core::future::Future<Output = Result<(), SendFrameError<Self::Error>>> + 'a {
        async move {
            let frame = encode_poll(id);
            self.write(&frame).await.map_err(SendFrameError::Send)?;

            #[cfg(feature = "defmt")]
            defmt::debug!("Polled {}", id);

            Ok(())
        }
    }
}
