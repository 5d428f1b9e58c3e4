//! Minimal abstraction for an asynchronous serial link. Allows the library to
//! plug into various implementations (embedded HAL UART, USB CDC, desktop tty).
use futures_util::Future;

/// Contract to write and read raw bytes asynchronously.
pub trait SerialPort {
    type Error: core::fmt::Debug;
    /// Write every byte of `bytes` to the link.
    fn write<'a>(&'a mut self, bytes: &'a [u8])
        -> impl Future<Output = Result<(), Self::Error>> + 'a;
    /// Wait for incoming bytes and copy them into `buf`, returning how many were read.
    ///
    /// Implementations must be cancel-safe: when the future is dropped before
    /// completion no byte may be lost. The link service relies on it when a
    /// queued command wins the race against an incoming byte.
    fn read<'a>(
        &'a mut self,
        buf: &'a mut [u8],
    ) -> impl core::future::Future<Output = Result<usize, Self::Error>> + 'a;
}
