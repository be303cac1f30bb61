//! Signal extraction helpers.
//!
//! All helpers are pure, allocation-free and run in constant time over the
//! fixed frame buffer. Reads past the end of the buffer yield zero.

use crate::CanFrame;

/// Byte `idx` of the payload, or zero past the buffer.
#[inline]
pub fn get_byte(frame: &CanFrame, idx: usize) -> u8 {
    frame.buffer().get(idx).copied().unwrap_or(0)
}

/// Up to four bytes starting at `start`, assembled little-endian.
///
/// `len` is clamped to 4.
#[inline]
pub fn get_bytes(frame: &CanFrame, start: usize, len: usize) -> u32 {
    let mut value = 0u32;
    for i in 0..len.min(4) {
        value |= u32::from(get_byte(frame, start.saturating_add(i))) << (8 * i);
    }
    value
}

/// Single bit at payload bit position `bit`.
#[inline]
pub fn get_bit(frame: &CanFrame, bit: usize) -> bool {
    (get_byte(frame, bit / 8) >> (bit % 8)) & 1 != 0
}

/// `width` bits starting at bit `start`, right-aligned.
///
/// `width` is clamped to 32.
#[inline]
pub fn extract_bits(frame: &CanFrame, start: usize, width: u32) -> u32 {
    let width = width.min(32);
    if width == 0 {
        return 0;
    }
    let first = start / 8;
    let shift = start % 8;
    // 32 bits at a sub-byte offset span at most five bytes
    let mut raw = 0u64;
    for i in 0..5 {
        raw |= u64::from(get_byte(frame, first.saturating_add(i))) << (8 * i);
    }
    let mask = (1u64 << width) - 1;
    ((raw >> shift) & mask) as u32
}

/// Interpret the low `bits` bits of `value` as two's complement.
#[inline]
pub const fn to_signed(value: u32, bits: u32) -> i32 {
    let bits = if bits == 0 {
        1
    } else if bits > 32 {
        32
    } else {
        bits
    };
    let value = (value as u64) & ((1u64 << bits) - 1);
    let half = 1u64 << (bits - 1);
    if value >= half {
        (value as i64 - (1i64 << bits)) as i32
    } else {
        value as i32
    }
}

/// Position, width and signedness of one signal inside a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    start: u16,
    width: u8,
    signed: bool,
}

impl BitField {
    /// Unsigned field of `width` bits (at most 31) starting at bit `start`.
    pub const fn unsigned(start: u16, width: u8) -> Self {
        assert!(width > 0 && width <= 31, "unsigned field must be 1..=31 bits wide");
        Self {
            start,
            width,
            signed: false,
        }
    }

    /// Two's complement field of `width` bits (at most 32) starting at bit `start`.
    pub const fn signed(start: u16, width: u8) -> Self {
        assert!(width > 0 && width <= 32, "signed field must be 1..=32 bits wide");
        Self {
            start,
            width,
            signed: true,
        }
    }

    /// First bit of the field.
    pub const fn start(&self) -> u16 {
        self.start
    }

    /// Width in bits.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Whether the field is two's complement.
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Raw, right-aligned bits of the field.
    #[inline]
    pub fn raw(&self, frame: &CanFrame) -> u32 {
        extract_bits(frame, usize::from(self.start), u32::from(self.width))
    }

    /// Decoded value of the field.
    #[inline]
    pub fn decode(&self, frame: &CanFrame) -> i32 {
        let raw = self.raw(frame);
        if self.signed {
            to_signed(raw, u32::from(self.width))
        } else {
            // width <= 31 keeps the value positive
            raw as i32
        }
    }

    /// Write `value` into the field of `payload`, leaving other bits intact.
    ///
    /// Bits that fall outside `payload` are dropped.
    pub fn encode(&self, payload: &mut [u8], value: i32) {
        let bits = value as u32;
        for i in 0..usize::from(self.width) {
            let bit = usize::from(self.start).saturating_add(i);
            let Some(byte) = payload.get_mut(bit / 8) else {
                continue;
            };
            let mask = 1u8 << (bit % 8);
            if (bits >> i) & 1 != 0 {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
    }
}
