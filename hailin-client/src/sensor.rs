//! Consumer-facing sensor metadata

use hailin_core::Reading;

/// The three measurements exposed by one device
///
/// Carries the display metadata a consumer needs to present a reading:
/// name, unit of measurement and icon, plus the accessor extracting the
/// matching field from a `Reading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Pm25,
    Temperature,
    Humidity,
}

impl SensorKind {
    /// All sensors provided by one device
    pub const ALL: [SensorKind; 3] = [
        SensorKind::Pm25,
        SensorKind::Temperature,
        SensorKind::Humidity,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            SensorKind::Pm25 => "PM2.5",
            SensorKind::Temperature => "Temperature",
            SensorKind::Humidity => "Humidity",
        }
    }

    /// Unit of measurement
    pub fn unit(&self) -> &'static str {
        match self {
            SensorKind::Pm25 => "µg/m³",
            SensorKind::Temperature => "°C",
            SensorKind::Humidity => "%",
        }
    }

    /// Material Design icon name
    pub fn icon(&self) -> &'static str {
        match self {
            SensorKind::Pm25 => "mdi:molecule",
            SensorKind::Temperature => "mdi:thermometer",
            SensorKind::Humidity => "mdi:water-percent",
        }
    }

    /// Extract this sensor's value from a reading
    pub fn value(&self, reading: &Reading) -> f64 {
        match self {
            SensorKind::Pm25 => f64::from(reading.pm25),
            SensorKind::Temperature => reading.temperature,
            SensorKind::Humidity => f64::from(reading.humidity),
        }
    }
}
