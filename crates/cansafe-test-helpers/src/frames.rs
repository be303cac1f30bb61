//! Frame builders for hook tests.

use cansafe_can::{BitField, CanFrame};

/// Build a frame, panicking on an invalid address or length.
///
/// # Panics
///
/// Panics when [`CanFrame::new`] rejects the input.
#[track_caller]
pub fn frame(bus: u8, addr: u32, data: &[u8]) -> CanFrame {
    match CanFrame::new(bus, addr, data) {
        Ok(f) => f,
        Err(e) => panic!("frame: {e}"),
    }
}

/// Incrementally assembles a frame payload from signal values.
///
/// ```rust
/// use cansafe_can::BitField;
/// use cansafe_test_helpers::frames::FrameBuilder;
///
/// let frame = FrameBuilder::new(0, 0x164, 8)
///     .field(BitField::unsigned(24, 1), 1)
///     .build();
/// assert_eq!(frame.data()[3], 0x01);
/// ```
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    bus: u8,
    addr: u32,
    payload: Vec<u8>,
}

impl FrameBuilder {
    /// A zeroed payload of `len` bytes.
    pub fn new(bus: u8, addr: u32, len: usize) -> Self {
        Self {
            bus,
            addr,
            payload: vec![0; len],
        }
    }

    /// Write `value` into `field`.
    pub fn field(mut self, field: BitField, value: i32) -> Self {
        field.encode(&mut self.payload, value);
        self
    }

    /// Overwrite one byte.
    ///
    /// # Panics
    ///
    /// Panics when `index` is outside the payload.
    #[track_caller]
    pub fn byte(mut self, index: usize, value: u8) -> Self {
        match self.payload.get_mut(index) {
            Some(b) => *b = value,
            None => panic!("byte: index {index} outside {}-byte payload", self.payload.len()),
        }
        self
    }

    /// Finish the frame.
    ///
    /// # Panics
    ///
    /// Panics when the address or payload is invalid.
    #[track_caller]
    pub fn build(self) -> CanFrame {
        frame(self.bus, self.addr, &self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_writes_fields() {
        let f = FrameBuilder::new(2, 0x160, 8)
            .field(BitField::unsigned(0, 16), 0x1234)
            .byte(7, 0xAA)
            .build();
        assert_eq!(f.bus(), 2);
        assert_eq!(f.data(), &[0x34, 0x12, 0, 0, 0, 0, 0, 0xAA]);
    }

    #[test]
    #[should_panic(expected = "byte: index 8")]
    fn test_byte_out_of_range() {
        let _ = FrameBuilder::new(0, 0x160, 8).byte(8, 1);
    }
}
