/// Test doubles to simulate a UART link between the library and a receiver.
use korri_ubx::protocol::transport::traits::serial_port::SerialPort;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

#[derive(Clone)]
#[allow(dead_code)]
/// In-memory serial port reproducing the `SerialPort` trait behavior.
///
/// Every `write` is delivered to the peer as one chunk; a `read` returns at
/// most one chunk and keeps the tail for the next call when `buf` is short.
pub struct MockSerialPort {
    tx: mpsc::UnboundedSender<Vec<u8>>,
    rx: Arc<Mutex<mpsc::UnboundedReceiver<Vec<u8>>>>,
    pending: Arc<Mutex<Vec<u8>>>,
}

#[allow(dead_code)]
impl MockSerialPort {
    /// Construct a pair of interconnected ports (DUT ↔ receiver).
    pub fn create_pair() -> (Self, Self) {
        let (dut_tx, host_rx) = mpsc::unbounded_channel();
        let (host_tx, dut_rx) = mpsc::unbounded_channel();

        let dut_port = Self {
            tx: dut_tx,
            rx: Arc::new(Mutex::new(dut_rx)),
            pending: Arc::new(Mutex::new(Vec::new())),
        };

        let host_port = Self {
            tx: host_tx,
            rx: Arc::new(Mutex::new(host_rx)),
            pending: Arc::new(Mutex::new(Vec::new())),
        };

        (dut_port, host_port)
    }

    /// Push raw bytes to the peer without going through the trait.
    pub fn inject(&self, bytes: &[u8]) {
        self.tx.send(bytes.to_vec()).expect("peer dropped");
    }

    /// Collect everything written by the peer until `len` bytes are available.
    pub async fn collect(&mut self, len: usize) -> Vec<u8> {
        let mut out = Vec::new();
        let mut buf = [0u8; 64];
        while out.len() < len {
            let read = self.read(&mut buf).await.expect("peer dropped");
            out.extend_from_slice(&buf[..read]);
        }
        out
    }
}

impl SerialPort for MockSerialPort {
    type Error = ();

    async fn write<'a>(&'a mut self, bytes: &'a [u8]) -> Result<(), Self::Error> {
        self.tx.send(bytes.to_vec()).map_err(|_| ())?;
        Ok(())
    }

    async fn read<'a>(&'a mut self, buf: &'a mut [u8]) -> Result<usize, Self::Error> {
        let mut pending = self.pending.lock().await;
        if pending.is_empty() {
            let mut rx = self.rx.lock().await;
            // `recv` is cancel-safe: a dropped call loses no chunk.
            *pending = rx.recv().await.ok_or(())?;
        }
        let len = pending.len().min(buf.len());
        buf[..len].copy_from_slice(&pending[..len]);
        pending.drain(..len);
        Ok(len)
    }
}

#[allow(dead_code)]
/// Encode a frame into a fresh vector.
pub fn encode_frame(class: u8, id: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; payload.len() + korri_ubx::protocol::transport::FRAME_OVERHEAD];
    let len = korri_ubx::protocol::transport::frame_builder::encode(class, id, payload, &mut out)
        .expect("frame fits");
    out.truncate(len);
    out
}
