//! Response frame envelope structure and decoding

use bytes::Bytes;
use hailin_core::FrameError;

/// Function code of a read-holding-registers response, the only operation
/// the device answers with
pub const FUNCTION_READ_HOLDING_REGISTERS: u8 = 0x03;

/// Smallest valid envelope: address, function code, length byte, payload
/// room and the two-byte checksum trailer
pub const MIN_FRAME_LENGTH: usize = 8;

/// Receive buffer size used for one frame
pub const RECV_BUFFER_SIZE: usize = 1024;

/// Parsed response frame envelope
///
/// | Offset | Field | Size |
/// |---|---|---|
/// | 0 | slave address | 1 |
/// | 1 | function code | 1 |
/// | 2 | data length | 1 |
/// | 3 | payload | data length |
/// | 3+len | trailer | remainder |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    slave_address: u8,
    function_code: u8,
    payload: Bytes,
}

impl ResponseFrame {
    /// Decode a frame envelope from raw bytes.
    ///
    /// The slave address is accepted as-is; the device is the only peer on
    /// the link. Bytes after the declared payload (the checksum region) are
    /// carried by the frame but not validated.
    pub fn decode(frame: &[u8]) -> Result<Self, FrameError> {
        if frame.len() < MIN_FRAME_LENGTH {
            return Err(FrameError::TooShort { len: frame.len() });
        }

        let slave_address = frame[0];
        let function_code = frame[1];
        if function_code != FUNCTION_READ_HOLDING_REGISTERS {
            return Err(FrameError::UnsupportedFunction {
                code: function_code,
            });
        }

        let data_length = frame[2] as usize;
        let data = &frame[3..];
        if data.len() < data_length {
            return Err(FrameError::TruncatedPayload {
                expected: data_length,
                actual: data.len(),
            });
        }

        Ok(Self {
            slave_address,
            function_code,
            payload: Bytes::copy_from_slice(&data[..data_length]),
        })
    }

    /// Slave address from the frame header
    pub fn slave_address(&self) -> u8 {
        self.slave_address
    }

    /// Function code from the frame header
    pub fn function_code(&self) -> u8 {
        self.function_code
    }

    /// Payload bytes, exactly as many as the length field declared
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}
