//! Fixed-size CAN frame.

use core::fmt;

use cansafe_errors::FrameError;

/// Payload buffer capacity (CAN FD maximum).
pub const MAX_PAYLOAD_LEN: usize = 64;

/// Largest extended (29-bit) identifier.
pub const MAX_ADDR: u32 = 0x1FFF_FFFF;

/// One CAN frame as seen by the safety hooks.
///
/// The payload lives in a fixed 64-byte buffer so every read is bounded.
/// Bytes past `len` are always zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanFrame {
    bus: u8,
    addr: u32,
    len: u8,
    data: [u8; MAX_PAYLOAD_LEN],
}

impl CanFrame {
    /// Build a frame from its raw parts.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::PayloadTooLong`] when `payload` exceeds
    /// [`MAX_PAYLOAD_LEN`] and [`FrameError::AddressOutOfRange`] when `addr`
    /// does not fit a 29-bit identifier.
    pub fn new(bus: u8, addr: u32, payload: &[u8]) -> Result<Self, FrameError> {
        if addr > MAX_ADDR {
            return Err(FrameError::AddressOutOfRange { addr });
        }
        let mut data = [0u8; MAX_PAYLOAD_LEN];
        let Some(dst) = data.get_mut(..payload.len()) else {
            return Err(FrameError::PayloadTooLong {
                len: payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        };
        dst.copy_from_slice(payload);
        Ok(Self {
            bus,
            addr,
            // bounded by MAX_PAYLOAD_LEN above
            len: payload.len() as u8,
            data,
        })
    }

    /// Bus the frame was received on or is destined for.
    #[inline]
    pub const fn bus(&self) -> u8 {
        self.bus
    }

    /// CAN identifier.
    #[inline]
    pub const fn addr(&self) -> u32 {
        self.addr
    }

    /// Payload length in bytes.
    #[inline]
    pub const fn len(&self) -> u8 {
        self.len
    }

    /// `true` for a zero-length frame.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `len` bytes of payload.
    pub fn data(&self) -> &[u8] {
        self.data.get(..usize::from(self.len)).unwrap_or(&[])
    }

    /// The full fixed-size buffer, including zero padding past `len`.
    #[inline]
    pub const fn buffer(&self) -> &[u8; MAX_PAYLOAD_LEN] {
        &self.data
    }

    /// Copy of this frame moved onto another bus.
    #[must_use]
    pub const fn with_bus(mut self, bus: u8) -> Self {
        self.bus = bus;
        self
    }
}

impl fmt::Debug for CanFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanFrame")
            .field("bus", &self.bus)
            .field("addr", &format_args!("{:#05x}", self.addr))
            .field("len", &self.len)
            .field("data", &self.data())
            .finish()
    }
}

impl fmt::Display for CanFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bus{} {:#05x} [{}]", self.bus, self.addr, self.len)?;
        for b in self.data() {
            write!(f, " {b:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_payload_and_pads() {
        let frame = CanFrame::new(2, 0xD3, &[1, 2, 3, 4, 5, 6, 7]).expect("valid frame");
        assert_eq!(frame.bus(), 2);
        assert_eq!(frame.addr(), 0xD3);
        assert_eq!(frame.len(), 7);
        assert_eq!(frame.data(), &[1, 2, 3, 4, 5, 6, 7]);
        assert!(frame.buffer().iter().skip(7).all(|&b| b == 0));
    }

    #[test]
    fn test_new_rejects_long_payload() {
        let payload = [0u8; MAX_PAYLOAD_LEN + 1];
        assert_eq!(
            CanFrame::new(0, 0x100, &payload),
            Err(FrameError::PayloadTooLong { len: 65, max: 64 })
        );
    }

    #[test]
    fn test_new_rejects_wide_identifier() {
        assert_eq!(
            CanFrame::new(0, MAX_ADDR + 1, &[]),
            Err(FrameError::AddressOutOfRange { addr: MAX_ADDR + 1 })
        );
    }

    #[test]
    fn test_empty_frame() {
        let frame = CanFrame::new(0, 0x7FF, &[]).expect("valid frame");
        assert!(frame.is_empty());
        assert!(frame.data().is_empty());
    }

    #[test]
    fn test_with_bus_keeps_payload() {
        let frame = CanFrame::new(0, 0x164, &[9; 8]).expect("valid frame");
        let moved = frame.with_bus(2);
        assert_eq!(moved.bus(), 2);
        assert_eq!(moved.data(), frame.data());
    }

    #[test]
    fn test_display() {
        let frame = CanFrame::new(0, 0x164, &[0x00, 0xAB]).expect("valid frame");
        assert_eq!(frame.to_string(), "bus0 0x164 [2] 00 AB");
    }
}
