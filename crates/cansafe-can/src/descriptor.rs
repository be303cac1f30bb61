//! Message descriptors and allow-list matching.

use crate::CanFrame;

/// Identifies one known message by `(address, bus, length)`.
///
/// Used both for transmit allow-lists and for receive monitoring tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageDescriptor {
    /// CAN identifier.
    pub addr: u32,
    /// Bus number.
    pub bus: u8,
    /// Payload length in bytes.
    pub len: u8,
}

impl MessageDescriptor {
    /// Placeholder used to initialise const arrays before filling them.
    pub const EMPTY: Self = Self::new(0, 0, 0);

    /// Create a descriptor.
    pub const fn new(addr: u32, bus: u8, len: u8) -> Self {
        Self { addr, bus, len }
    }

    /// Exact `(address, bus, length)` match against `frame`.
    #[inline]
    pub const fn matches(&self, frame: &CanFrame) -> bool {
        self.addr == frame.addr() && self.bus == frame.bus() && self.len == frame.len()
    }
}

/// `true` when `frame` exactly matches an entry of `allowed`.
#[inline]
pub fn is_allowed(frame: &CanFrame, allowed: &[MessageDescriptor]) -> bool {
    allowed.iter().any(|msg| msg.matches(frame))
}

/// Concatenate two descriptor tables at compile time.
///
/// `N` must equal `A + B`; a mismatch fails const evaluation.
///
/// ```
/// use cansafe_can::{MessageDescriptor, concat_descriptors};
///
/// const BASE: [MessageDescriptor; 1] = [MessageDescriptor::new(0x164, 0, 8)];
/// const EXTRA: [MessageDescriptor; 1] = [MessageDescriptor::new(0xD3, 2, 7)];
/// const ALL: [MessageDescriptor; 2] = concat_descriptors(&BASE, &EXTRA);
///
/// assert_eq!(ALL[1].addr, 0xD3);
/// ```
#[allow(
    clippy::indexing_slicing,
    reason = "const fn; bounds are checked by the length assertion"
)]
pub const fn concat_descriptors<const A: usize, const B: usize, const N: usize>(
    a: &[MessageDescriptor; A],
    b: &[MessageDescriptor; B],
) -> [MessageDescriptor; N] {
    assert!(A + B == N, "concatenated table length mismatch");
    let mut out = [MessageDescriptor::EMPTY; N];
    let mut i = 0;
    while i < A {
        out[i] = a[i];
        i += 1;
    }
    let mut j = 0;
    while j < B {
        out[A + j] = b[j];
        j += 1;
    }
    out
}
