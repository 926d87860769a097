//! Periodic polling of a sensor client

use crate::client::SensorClient;
use hailin_core::Reading;
use hailin_transport::TransportLayer;
use std::time::Duration;
use tokio::sync::watch;

/// Default polling cadence
pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(30);

/// Drives a sensor client on a fixed interval and caches the latest reading
///
/// The only state carried across poll cycles is the cached last reading and
/// the client itself, which owns the connection. Failed cycles leave the
/// last good reading in place so consumers can report a stale value instead
/// of nothing.
#[derive(Debug)]
pub struct Poller<T: TransportLayer> {
    client: SensorClient<T>,
    interval: Duration,
    last_reading: Option<Reading>,
    last_update_success: bool,
}

impl<T: TransportLayer> Poller<T> {
    /// Create a poller with the default scan interval
    pub fn new(client: SensorClient<T>) -> Self {
        Self::with_interval(client, DEFAULT_SCAN_INTERVAL)
    }

    /// Create a poller with a custom scan interval
    pub fn with_interval(client: SensorClient<T>, interval: Duration) -> Self {
        Self {
            client,
            interval,
            last_reading: None,
            last_update_success: false,
        }
    }

    /// Latest successfully decoded reading, kept across failed cycles
    pub fn last_reading(&self) -> Option<Reading> {
        self.last_reading
    }

    /// Whether the most recent cycle produced a reading
    pub fn last_update_success(&self) -> bool {
        self.last_update_success
    }

    /// Run one poll cycle and update the cached state
    pub async fn refresh(&mut self) -> Option<Reading> {
        let reading = self.client.poll().await;
        self.last_update_success = reading.is_some();
        if let Some(reading) = reading {
            self.last_reading = Some(reading);
        }
        reading
    }

    /// Poll on the configured interval, publishing each cycle's outcome.
    ///
    /// Subscribers see `None` for a cycle where the device was unreachable
    /// or the frame did not decode. Stops when every receiver is gone.
    pub async fn run(mut self, tx: watch::Sender<Option<Reading>>) {
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;
            let reading = self.refresh().await;
            if tx.send(reading).is_err() {
                break;
            }
        }
    }
}
