//! Frame payload decoding into sensor readings

use crate::frame::ResponseFrame;
use hailin_core::{FrameError, Reading};

/// Payload length carrying the PM2.5 / temperature / humidity register
/// triple, the only payload shape the device produces
pub const READING_PAYLOAD_LENGTH: usize = 6;

/// Stateless decoder for sensor response frames
pub struct FrameDecoder;

impl FrameDecoder {
    /// Decode one raw frame into a reading.
    ///
    /// All-or-nothing: any structural defect fails the whole frame and no
    /// partial reading is produced. The payload is three consecutive
    /// big-endian u16 registers: PM2.5, temperature (tenths of °C),
    /// humidity.
    pub fn decode(frame: &[u8]) -> Result<Reading, FrameError> {
        let frame = ResponseFrame::decode(frame)?;

        let payload = frame.payload();
        if payload.len() != READING_PAYLOAD_LENGTH {
            return Err(FrameError::UnsupportedPayloadLength {
                len: payload.len(),
            });
        }

        let pm25 = u16::from_be_bytes([payload[0], payload[1]]);
        let temperature = u16::from_be_bytes([payload[2], payload[3]]);
        let humidity = u16::from_be_bytes([payload[4], payload[5]]);

        Ok(Reading::from_registers(pm25, temperature, humidity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reading() {
        // pm25=0x0032, temp=0x00FA (25.0 °C), humidity=0x0032, trailer ignored
        let frame = [
            0x01, 0x03, 0x06, 0x00, 0x32, 0x00, 0xFA, 0x00, 0x32, 0xAA, 0xBB,
        ];
        let reading = FrameDecoder::decode(&frame).unwrap();
        assert_eq!(reading.pm25, 50);
        assert_eq!(reading.temperature, 25.0);
        assert_eq!(reading.humidity, 50);
    }

    #[test]
    fn test_decode_all_zero_registers() {
        let frame = [
            0x01, 0x03, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        let reading = FrameDecoder::decode(&frame).unwrap();
        assert_eq!(reading.pm25, 0);
        assert_eq!(reading.temperature, 0.0);
        assert_eq!(reading.humidity, 0);
    }

    #[test]
    fn test_decode_short_frames_fail() {
        let frame = [
            0x01, 0x03, 0x06, 0x00, 0x32, 0x00, 0xFA, 0x00, 0x32, 0xAA, 0xBB,
        ];
        for len in 0..8 {
            assert!(FrameDecoder::decode(&frame[..len]).is_err());
        }
    }

    #[test]
    fn test_decode_wrong_function_code_fails() {
        let frame = [
            0x01, 0x04, 0x06, 0x00, 0x32, 0x00, 0xFA, 0x00, 0x32, 0xAA, 0xBB,
        ];
        assert_eq!(
            FrameDecoder::decode(&frame),
            Err(FrameError::UnsupportedFunction { code: 0x04 })
        );
    }

    #[test]
    fn test_decode_truncated_payload_fails() {
        let frame = [0x01, 0x03, 0x0A, 0x00, 0x32, 0x00, 0xFA, 0x00, 0x32];
        assert_eq!(
            FrameDecoder::decode(&frame),
            Err(FrameError::TruncatedPayload {
                expected: 10,
                actual: 6,
            })
        );
    }

    #[test]
    fn test_decode_unsupported_payload_length_fails() {
        // 4-byte payload, valid envelope otherwise
        let frame = [0x01, 0x03, 0x04, 0x00, 0x32, 0x00, 0xFA, 0xAA, 0xBB];
        assert_eq!(
            FrameDecoder::decode(&frame),
            Err(FrameError::UnsupportedPayloadLength { len: 4 })
        );
    }

    #[test]
    fn test_decode_zero_length_payload_fails() {
        // Exactly 8 bytes with a zero length field is not an empty reading
        let frame = [0x01, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(
            FrameDecoder::decode(&frame),
            Err(FrameError::UnsupportedPayloadLength { len: 0 })
        );
    }

    #[test]
    fn test_decode_is_pure() {
        let frame = [
            0x01, 0x03, 0x06, 0x01, 0x2C, 0x00, 0xDC, 0x00, 0x41, 0xAA, 0xBB,
        ];
        let first = FrameDecoder::decode(&frame).unwrap();
        let second = FrameDecoder::decode(&frame).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.pm25, 300);
        assert_eq!(first.temperature, 22.0);
        assert_eq!(first.humidity, 65);
    }
}
