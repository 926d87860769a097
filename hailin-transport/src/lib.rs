//! Transport layer module for the Hailin sensor protocol
//!
//! This crate provides the stream abstraction and the TCP transport used to
//! talk to the sensor device.

pub mod stream;
pub mod tcp;

pub use hailin_core::{HailinError, HailinResult};
pub use stream::{StreamAccessor, TransportLayer};
pub use tcp::{TcpSettings, TcpTransport};
