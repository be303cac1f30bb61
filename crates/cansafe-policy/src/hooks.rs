//! Host-facing hook vtable.

use cansafe_can::{CanFrame, MessageDescriptor};

use crate::RxCheck;

/// What a vehicle variant hands back to the host when it is initialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyConfig {
    /// Messages the host must see at their expected rate.
    pub rx_checks: &'static [RxCheck],
    /// Base transmit allow-list.
    pub tx_msgs: &'static [MessageDescriptor],
}

/// Per-frame entry points of one vehicle variant.
///
/// The host guarantees calls are serialised and never reentrant.
pub trait SafetyHooks {
    /// Inbound frame; may update tracked vehicle state.
    fn rx(&mut self, frame: &CanFrame);

    /// Outbound frame; `true` when it may be sent.
    fn tx(&mut self, frame: &CanFrame) -> bool;

    /// Relay target for a frame received on `bus`, or `None` to drop it.
    fn fwd(&self, bus: u8, addr: u32) -> Option<u8>;
}
