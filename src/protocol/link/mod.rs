//! Link service owning the serial port of a u-blox receiver.
//!
//! It keeps the frame reader running and optionally offers:
//!
//! * a transmission handle (`LinkHandle`) to queue frames and polls;
//! * a frame receiver (`LinkFrames`) to pull every validated frame.
//!
//! Firmware decides which features it needs by providing pre-allocated
//! [`embassy_sync::channel::Channel`] instances. No allocation is performed by
//! the library. The raw mutex is a parameter: `CriticalSectionRawMutex` on
//! targets, `NoopRawMutex` for single-executor setups and host tests.

use core::fmt::Debug;

use embassy_sync::{
    blocking_mutex::raw::RawMutex,
    channel::{Channel, Receiver, Sender},
};
use futures_util::{future::select, future::Either, pin_mut};

use crate::error::{LinkHandleError, LinkRunError, ReadFrameError, SendFrameError};
use crate::protocol::transport::frame::UbxFrame;
use crate::protocol::transport::message_id::MessageId;
use crate::protocol::transport::reader::FrameReader;
use crate::protocol::transport::traits::serial_port::SerialPort;
use crate::protocol::transport::traits::ubx_sender::UbxSender;
use crate::protocol::transport::{DEFAULT_MAX_PAYLOAD, MAX_PAYLOAD_LEN};

/// Service assembling the link components.
pub struct UbxLinkService<
    'a,
    M: RawMutex,
    P: SerialPort,
    const CMD_CAP: usize,
    const FRAME_CAP: usize,
    const N: usize = DEFAULT_MAX_PAYLOAD,
> where
    P::Error: Debug,
{
    port: P,
    reader: FrameReader<N>,
    command_channel: Option<&'a Channel<M, LinkCommand<N>, CMD_CAP>>,
    frame_channel: Option<&'a Channel<M, UbxFrame<N>, FRAME_CAP>>,
}

impl<'a, M, P, const CMD_CAP: usize, const FRAME_CAP: usize, const N: usize>
    UbxLinkService<'a, M, P, CMD_CAP, FRAME_CAP, N>
where
    M: RawMutex,
    P: SerialPort,
    P::Error: Debug,
{
    /// Take ownership of the port. Channels left to `None` disable the matching part.
    pub fn new(
        port: P,
        command_channel: Option<&'a Channel<M, LinkCommand<N>, CMD_CAP>>,
        frame_channel: Option<&'a Channel<M, UbxFrame<N>, FRAME_CAP>>,
    ) -> Self {
        Self {
            port,
            reader: FrameReader::new(),
            command_channel,
            frame_channel,
        }
    }

    /// Split into handle/receiver/runner components.
    pub fn into_parts(self) -> LinkServiceParts<'a, M, P, CMD_CAP, FRAME_CAP, N> {
        let handle = self.command_channel.map(|channel| LinkHandle {
            sender: channel.sender(),
        });
        let frames = self.frame_channel.map(|channel| LinkFrames {
            receiver: channel.receiver(),
        });
        LinkServiceParts {
            handle,
            frames,
            runner: LinkRunner {
                port: self.port,
                reader: self.reader,
                command_channel: self.command_channel,
                frame_channel: self.frame_channel,
            },
        }
    }
}

/// Bundle returned by [`UbxLinkService::into_parts`].
pub struct LinkServiceParts<'a, M, P, const CMD_CAP: usize, const FRAME_CAP: usize, const N: usize>
where
    M: RawMutex,
    P: SerialPort,
    P::Error: Debug,
{
    pub handle: Option<LinkHandle<'a, M, CMD_CAP, N>>,
    pub frames: Option<LinkFrames<'a, M, FRAME_CAP, N>>,
    pub runner: LinkRunner<'a, M, P, CMD_CAP, FRAME_CAP, N>,
}

/// Runner that drives the link loop.
pub struct LinkRunner<'a, M, P, const CMD_CAP: usize, const FRAME_CAP: usize, const N: usize>
where
    M: RawMutex,
    P: SerialPort,
    P::Error: Debug,
{
    port: P,
    reader: FrameReader<N>,
    command_channel: Option<&'a Channel<M, LinkCommand<N>, CMD_CAP>>,
    frame_channel: Option<&'a Channel<M, UbxFrame<N>, FRAME_CAP>>,
}

impl<'a, M, P, const CMD_CAP: usize, const FRAME_CAP: usize, const N: usize>
    LinkRunner<'a, M, P, CMD_CAP, FRAME_CAP, N>
where
    M: RawMutex,
    P: SerialPort,
    P::Error: Debug,
{
    /// Run until the port fails. Discarded frames are logged and skipped.
    ///
    /// Frames are dropped silently when no frame channel was provided; a full
    /// frame channel applies back-pressure to the reader.
    pub async fn drive(mut self) -> Result<(), LinkRunError<P::Error>> {
        let frame_channel = self.frame_channel;
        let command_channel = self.command_channel;

        loop {
            match command_channel {
                Some(cmd_ch) => {
                    let mut command_to_process = None;
                    let mut read_result = None;

                    {
                        let cmd_future = cmd_ch.receive();
                        let read_future = self.reader.next_frame(&mut self.port);
                        pin_mut!(cmd_future);
                        pin_mut!(read_future);

                        match select(read_future, cmd_future).await {
                            Either::Left((result, pending_cmd)) => {
                                read_result = Some(result);
                                drop(pending_cmd);
                            }
                            Either::Right((command, pending_read)) => {
                                command_to_process = Some(command);
                                drop(pending_read);
                            }
                        }
                    }

                    if let Some(result) = read_result {
                        forward_frame(frame_channel, result).await?;
                    }

                    if let Some(command) = command_to_process {
                        handle_command(&mut self.port, command)
                            .await
                            .map_err(LinkRunError::Send)?;
                    }
                }
                None => {
                    let result = self.reader.next_frame(&mut self.port).await;
                    forward_frame(frame_channel, result).await?;
                }
            }
        }
    }
}

/// Transmission handle (optional).
pub struct LinkHandle<'a, M: RawMutex, const CMD_CAP: usize, const N: usize = DEFAULT_MAX_PAYLOAD> {
    sender: Sender<'a, M, LinkCommand<N>, CMD_CAP>,
}

impl<'a, M: RawMutex, const CMD_CAP: usize, const N: usize> LinkHandle<'a, M, CMD_CAP, N> {
    /// Queue a frame. Waits while the command channel is full.
    ///
    /// Payloads that could not be encoded are refused here, so the runner
    /// never stops on a bad command.
    pub async fn send(&self, id: MessageId, payload: &[u8]) -> Result<(), LinkHandleError> {
        // Bounded by the command buffer and by the 16-bit length field.
        let available = N.min(MAX_PAYLOAD_LEN);
        if payload.len() > available {
            return Err(LinkHandleError::PayloadTooLarge {
                asked: payload.len(),
                available,
            });
        }

        let mut buffer = [0u8; N];
        buffer[..payload.len()].copy_from_slice(payload);

        let command = LinkCommand::Send {
            id,
            len: payload.len(),
            payload: buffer,
        };
        self.sender.send(command).await;
        Ok(())
    }

    /// Queue a poll request for `id`.
    pub async fn poll(&self, id: MessageId) {
        self.sender.send(LinkCommand::Poll(id)).await;
    }
}

/// Optional receiver returning every validated frame.
pub struct LinkFrames<'a, M: RawMutex, const FRAME_CAP: usize, const N: usize = DEFAULT_MAX_PAYLOAD> {
    receiver: Receiver<'a, M, UbxFrame<N>, FRAME_CAP>,
}

impl<'a, M: RawMutex, const FRAME_CAP: usize, const N: usize> LinkFrames<'a, M, FRAME_CAP, N> {
    pub async fn recv(&mut self) -> UbxFrame<N> {
        self.receiver.receive().await
    }

    /// Next frame if one is already queued.
    pub fn try_recv(&mut self) -> Option<UbxFrame<N>> {
        self.receiver.try_receive().ok()
    }
}

/// Commands queued by producer tasks.
#[derive(Debug, Clone)]
pub enum LinkCommand<const N: usize = DEFAULT_MAX_PAYLOAD> {
    Send {
        id: MessageId,
        len: usize,
        payload: [u8; N],
    },
    Poll(MessageId),
}

async fn forward_frame<M: RawMutex, E: Debug, const FRAME_CAP: usize, const N: usize>(
    frame_channel: Option<&Channel<M, UbxFrame<N>, FRAME_CAP>>,
    result: Result<UbxFrame<N>, ReadFrameError<E>>,
) -> Result<(), LinkRunError<E>> {
    match result {
        Ok(frame) => {
            if let Some(frame_ch) = frame_channel {
                frame_ch.send(frame).await;
            }
            Ok(())
        }
        Err(ReadFrameError::Parse(_error)) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("UBX link skipped a frame: {}", _error);
            Ok(())
        }
        Err(ReadFrameError::Receive(err)) => Err(LinkRunError::Receive(err)),
    }
}

async fn handle_command<P: SerialPort, const N: usize>(
    port: &mut P,
    command: LinkCommand<N>,
) -> Result<(), SendFrameError<P::Error>>
where
    P::Error: Debug,
{
    match command {
        LinkCommand::Send { id, len, payload } => {
            port.send_frame(id, &payload[..len.min(N)]).await
        }
        LinkCommand::Poll(id) => port.send_poll(id).await,
    }
}
