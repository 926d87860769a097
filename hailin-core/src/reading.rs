//! Decoded sensor reading

use serde::{Deserialize, Serialize};

/// One decoded measurement set from the device
///
/// Produced only by a successful decode of a complete register payload;
/// partial readings are never constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// PM2.5 concentration in µg/m³
    pub pm25: u16,
    /// Temperature in °C, one decimal place
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: u16,
}

impl Reading {
    /// Build a reading from the three raw holding register values.
    ///
    /// The device reports temperature in tenths of a degree; PM2.5 and
    /// humidity are unscaled.
    pub fn from_registers(pm25: u16, temperature: u16, humidity: u16) -> Self {
        Self {
            pm25,
            temperature: f64::from(temperature) / 10.0,
            humidity,
        }
    }
}
