//! Sensor client combining transport and frame decoding

use bytes::Bytes;
use hailin_core::{HailinResult, Reading};
use hailin_protocol::{FrameDecoder, RECV_BUFFER_SIZE};
use hailin_transport::TransportLayer;

/// Client for one sensor device
///
/// Owns the transport exclusively. All operations take `&mut self`; at most
/// one receive is in flight per connection.
#[derive(Debug)]
pub struct SensorClient<T: TransportLayer> {
    transport: T,
}

impl<T: TransportLayer> SensorClient<T> {
    /// Create a new sensor client over the given transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Probe the endpoint by opening a connection, for setup validation.
    ///
    /// Network failures collapse to `false`; the probe connection is not
    /// kept.
    pub async fn check_connection(&mut self) -> bool {
        if !self.transport.is_closed() {
            return true;
        }
        match self.transport.open().await {
            Ok(()) => {
                let _ = self.transport.close().await;
                true
            }
            Err(e) => {
                log::warn!("Failed to connect to sensor: {e}");
                false
            }
        }
    }

    /// Receive one raw frame from the device.
    ///
    /// Opens the transport first if it is closed; an open failure is
    /// returned immediately and leaves no connection behind. Otherwise one
    /// read of up to 1024 bytes is performed and the bytes are returned
    /// as-is. A single read is assumed to contain exactly one whole frame;
    /// the device sends small, unfragmented responses, so no framing-aware
    /// accumulation is done here. A read failure tears the connection down
    /// so the next call starts with a fresh connect.
    pub async fn receive_frame(&mut self) -> HailinResult<Bytes> {
        if self.transport.is_closed() {
            self.transport.open().await?;
        }

        let mut buf = [0u8; RECV_BUFFER_SIZE];
        match self.transport.read(&mut buf).await {
            Ok(n) => Ok(Bytes::copy_from_slice(&buf[..n])),
            Err(e) => {
                let _ = self.transport.close().await;
                Err(e)
            }
        }
    }

    /// Run one poll cycle: receive a frame and decode it.
    ///
    /// Every failure branch is logged and reported as `None`; nothing here
    /// fails toward the scheduler.
    pub async fn poll(&mut self) -> Option<Reading> {
        let frame = match self.receive_frame().await {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("Error receiving data from sensor: {e}");
                return None;
            }
        };

        log::debug!("Received frame: {:02X?}", &frame[..]);

        match FrameDecoder::decode(&frame) {
            Ok(reading) => Some(reading),
            Err(e) => {
                log::warn!("Failed to decode frame {:02X?}: {e}", &frame[..]);
                None
            }
        }
    }

    /// Close the connection. Idempotent.
    pub async fn close(&mut self) -> HailinResult<()> {
        if !self.transport.is_closed() {
            self.transport.close().await?;
        }
        Ok(())
    }
}
