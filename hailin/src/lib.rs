//! hailin_rs - TCP polling client for Hailin environmental sensors
//!
//! The device answers each poll with one Modbus-RTU-style response frame
//! carrying PM2.5, temperature and humidity registers. This library
//! connects to it over TCP, receives and decodes the frames, and exposes
//! the readings for periodic consumption.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `hailin-core`: Error types, the reading record, configuration
//! - `hailin-transport`: Transport layer (TCP)
//! - `hailin-protocol`: Response frame parsing and decoding
//! - `hailin-client`: Polling client and periodic poller
//!
//! # Usage
//!
//! ```no_run
//! use hailin::client::SensorClient;
//! use hailin::{SensorConfig, TcpTransport};
//!
//! # async fn poll_once() -> hailin::HailinResult<()> {
//! let config = SensorConfig::new("192.168.1.10", 502);
//! let transport = TcpTransport::from_config(&config)?;
//! let mut client = SensorClient::new(transport);
//!
//! if let Some(reading) = client.poll().await {
//!     println!("PM2.5 {} µg/m³, {} °C, {} %", reading.pm25, reading.temperature, reading.humidity);
//! }
//! # Ok(())
//! # }
//! ```

// Re-export core types
pub use hailin_core::{FrameError, HailinError, HailinResult, Reading, SensorConfig, DEFAULT_PORT};

// Re-export transport layer
pub use hailin_transport::{StreamAccessor, TcpSettings, TcpTransport, TransportLayer};

// Re-export framing layer
pub use hailin_protocol::{FrameDecoder, ResponseFrame};

// Re-export client API
pub mod client {
    pub use hailin_client::*;
}
