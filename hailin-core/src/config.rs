//! Sensor endpoint configuration

use crate::error::{HailinError, HailinResult};
use serde::{Deserialize, Serialize};

/// Conventional Modbus TCP port, used when the setup data omits one
pub const DEFAULT_PORT: u16 = 502;

/// Endpoint of one sensor device, supplied once at setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl SensorConfig {
    /// Create a new sensor configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Check that the endpoint is well-formed
    pub fn validate(&self) -> HailinResult<()> {
        if self.host.is_empty() {
            return Err(HailinError::InvalidData("Host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(HailinError::InvalidData(
                "Port must be in the range 1-65535".into(),
            ));
        }
        Ok(())
    }
}
