//! Stream accessor trait for the transport layer

use async_trait::async_trait;
use hailin_core::HailinResult;
use std::time::Duration;

/// Stream accessor interface to access a physical stream to a remote sensor
///
/// The device protocol is receive-only: the sensor pushes response frames on
/// its own, so the accessor exposes no write half.
#[async_trait]
pub trait StreamAccessor: Send + Sync {
    /// Set the read timeout
    ///
    /// # Arguments
    ///
    /// * `timeout` - The timeout duration. None means infinite timeout.
    async fn set_timeout(&mut self, timeout: Option<Duration>) -> HailinResult<()>;

    /// Read data from the stream
    ///
    /// # Arguments
    ///
    /// * `buf` - Buffer to read into
    ///
    /// # Returns
    ///
    /// Number of bytes read, or 0 if EOF
    async fn read(&mut self, buf: &mut [u8]) -> HailinResult<usize>;

    /// Check if the stream is closed
    fn is_closed(&self) -> bool;

    /// Close the stream
    async fn close(&mut self) -> HailinResult<()>;
}

/// Transport layer trait that extends StreamAccessor
#[async_trait]
pub trait TransportLayer: StreamAccessor {
    /// Open the physical layer connection
    async fn open(&mut self) -> HailinResult<()>;
}
