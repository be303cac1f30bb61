//! CAN frame construction errors.

/// Errors raised while building a [`CanFrame`](https://docs.rs/cansafe-can) from raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// Payload does not fit in the frame buffer
    #[error("payload of {len} bytes exceeds the {max}-byte frame buffer")]
    PayloadTooLong {
        /// Supplied payload length
        len: usize,
        /// Buffer capacity
        max: usize,
    },

    /// Identifier wider than 29 bits
    #[error("address {addr:#x} does not fit in a 29-bit CAN identifier")]
    AddressOutOfRange {
        /// Offending identifier
        addr: u32,
    },
}
