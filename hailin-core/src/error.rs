use thiserror::Error;

/// Main error type for Hailin sensor operations
#[derive(Error, Debug)]
pub enum HailinError {
    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Frame invalid: {0}")]
    Frame(#[from] FrameError),
}

/// Result type alias for Hailin sensor operations
pub type HailinResult<T> = Result<T, HailinError>;

/// Structural errors raised while decoding a response frame
///
/// Every variant means the frame carries no usable reading. The polling
/// layer collapses all of them to "no data"; the distinction exists for
/// diagnostics only.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("Frame too short: {len} bytes")]
    TooShort { len: usize },

    #[error("Unsupported function code: 0x{code:02X}")]
    UnsupportedFunction { code: u8 },

    #[error("Payload truncated: declared {expected} bytes, {actual} available")]
    TruncatedPayload { expected: usize, actual: usize },

    #[error("Unsupported payload length: {len}")]
    UnsupportedPayloadLength { len: usize },
}
