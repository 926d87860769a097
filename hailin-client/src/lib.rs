//! Polling client for Hailin environmental sensors
//!
//! Combines the transport and framing layers into the per-poll cycle:
//! receive one response frame, decode it, hand the reading (or nothing) to
//! the consumer. The client never propagates a network or decode failure to
//! the scheduler driving it; polling is self-healing.

pub mod client;
pub mod poller;
pub mod sensor;

pub use client::SensorClient;
pub use poller::{Poller, DEFAULT_SCAN_INTERVAL};
pub use sensor::SensorKind;
