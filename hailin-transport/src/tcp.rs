//! TCP transport implementation

use crate::stream::{StreamAccessor, TransportLayer};
use async_trait::async_trait;
use hailin_core::{HailinError, HailinResult, SensorConfig};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// TCP transport layer settings
///
/// The host may be an IP address or a hostname; resolution happens at
/// connect time.
#[derive(Debug, Clone)]
pub struct TcpSettings {
    pub host: String,
    pub port: u16,
    pub timeout: Option<Duration>,
}

impl TcpSettings {
    /// Create new TCP settings
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Some(Duration::from_secs(30)),
        }
    }

    /// Create TCP settings with timeout
    pub fn with_timeout(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Some(timeout),
        }
    }
}

/// TCP transport layer implementation
///
/// Owns at most one live connection to the configured endpoint. Any read
/// error or EOF marks the transport closed so the caller can reopen it on
/// the next attempt.
#[derive(Debug)]
pub struct TcpTransport {
    stream: Option<TcpStream>,
    settings: TcpSettings,
    closed: bool,
}

impl TcpTransport {
    /// Create a new TCP transport layer
    pub fn new(settings: TcpSettings) -> Self {
        Self {
            stream: None,
            settings,
            closed: true,
        }
    }

    /// Create a TCP transport from a sensor configuration
    pub fn from_config(config: &SensorConfig) -> HailinResult<Self> {
        config.validate()?;
        Ok(Self::new(TcpSettings::new(config.host.clone(), config.port)))
    }
}

#[async_trait]
impl TransportLayer for TcpTransport {
    async fn open(&mut self) -> HailinResult<()> {
        if !self.closed {
            return Err(HailinError::Connection(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Connection has already been opened",
            )));
        }

        let addr = (self.settings.host.as_str(), self.settings.port);

        // Apply timeout to connection establishment if specified
        let stream = if let Some(timeout) = self.settings.timeout {
            tokio::time::timeout(timeout, TcpStream::connect(addr))
                .await
                .map_err(|_| HailinError::Timeout)?
                .map_err(HailinError::Connection)?
        } else {
            TcpStream::connect(addr)
                .await
                .map_err(HailinError::Connection)?
        };

        self.stream = Some(stream);
        self.closed = false;
        Ok(())
    }
}

#[async_trait]
impl StreamAccessor for TcpTransport {
    async fn set_timeout(&mut self, timeout: Option<Duration>) -> HailinResult<()> {
        self.settings.timeout = timeout;
        Ok(())
    }

    async fn read(&mut self, buf: &mut [u8]) -> HailinResult<usize> {
        let stream = self.stream.as_mut().ok_or_else(|| {
            HailinError::Connection(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "TCP stream not connected",
            ))
        })?;

        let result = if let Some(timeout) = self.settings.timeout {
            tokio::time::timeout(timeout, stream.read(buf))
                .await
                .map_err(|_| HailinError::Timeout)?
                .map_err(HailinError::Connection)
        } else {
            stream.read(buf).await.map_err(HailinError::Connection)
        };

        match result {
            Ok(0) => {
                self.closed = true;
                Ok(0)
            }
            Ok(n) => Ok(n),
            Err(e) => {
                self.closed = true;
                Err(e)
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    async fn close(&mut self) -> HailinResult<()> {
        if let Some(mut stream) = self.stream.take() {
            let _ = stream.shutdown().await;
        }
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_tcp_settings() {
        let settings = TcpSettings::new("192.168.1.10", 502);
        assert_eq!(settings.host, "192.168.1.10");
        assert_eq!(settings.port, 502);
        assert!(settings.timeout.is_some());
    }

    #[tokio::test]
    async fn test_from_config_rejects_invalid() {
        let config = SensorConfig::new("", 502);
        assert!(TcpTransport::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_read_not_connected() {
        let mut transport = TcpTransport::new(TcpSettings::new("127.0.0.1", 502));
        let mut buf = [0u8; 16];
        let result = transport.read(&mut buf).await;
        match result {
            Err(HailinError::Connection(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotConnected)
            }
            other => panic!("expected NotConnected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_open_and_read_loopback() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let frame = vec![
            0x01, 0x03, 0x06, 0x00, 0x32, 0x00, 0xFA, 0x00, 0x32, 0xAA, 0xBB,
        ];

        let sent = frame.clone();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            socket.write_all(&sent).await.unwrap();
        });

        let mut transport = TcpTransport::new(TcpSettings::new("127.0.0.1", addr.port()));
        transport.open().await.unwrap();
        assert!(!transport.is_closed());

        let mut buf = [0u8; 1024];
        let mut received = Vec::new();
        while received.len() < frame.len() {
            let n = transport.read(&mut buf).await.unwrap();
            assert!(n > 0);
            received.extend_from_slice(&buf[..n]);
        }
        assert_eq!(received, frame);

        server.await.unwrap();
        transport.close().await.unwrap();
        assert!(transport.is_closed());
    }

    #[tokio::test]
    async fn test_open_refused() {
        // Bind and immediately drop a listener so the port is unoccupied
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut transport = TcpTransport::new(TcpSettings::new("127.0.0.1", addr.port()));
        assert!(transport.open().await.is_err());
        assert!(transport.is_closed());
    }

    #[tokio::test]
    async fn test_close_idempotent() {
        let mut transport = TcpTransport::new(TcpSettings::new("127.0.0.1", 502));
        transport.close().await.unwrap();
        transport.close().await.unwrap();
        assert!(transport.is_closed());
    }

    #[tokio::test]
    async fn test_eof_marks_closed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            drop(socket);
        });

        let mut transport = TcpTransport::new(TcpSettings::new("127.0.0.1", addr.port()));
        transport.open().await.unwrap();
        server.await.unwrap();

        let mut buf = [0u8; 16];
        let n = transport.read(&mut buf).await.unwrap();
        assert_eq!(n, 0);
        assert!(transport.is_closed());
    }
}
