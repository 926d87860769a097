//! Framing layer for the Hailin sensor protocol
//!
//! The device answers each poll with one Modbus-RTU-style response frame.
//! This crate validates the frame envelope and decodes the register payload
//! into a typed reading. All functions here are pure; the transport layer
//! lives in `hailin-transport`.

pub mod decoder;
pub mod frame;

pub use decoder::{FrameDecoder, READING_PAYLOAD_LENGTH};
pub use frame::{
    ResponseFrame, FUNCTION_READ_HOLDING_REGISTERS, MIN_FRAME_LENGTH, RECV_BUFFER_SIZE,
};
