//! CAN frame primitives shared by the CanSafe safety hooks.
//!
//! This crate is intentionally I/O-free and allocation-free. It provides the
//! frame type handed to every hook, the `(address, bus, length)` descriptors
//! used for allow-lists and receive monitoring, and small pure helpers for
//! pulling signals out of a payload.
//!
//! Bit positions follow the little-endian convention used throughout the
//! hooks: bit `n` lives in byte `n / 8` at position `n % 8`.
//!
//! # Example
//!
//! ```
//! use cansafe_can::{BitField, CanFrame, MessageDescriptor, is_allowed};
//!
//! const TX: [MessageDescriptor; 1] = [MessageDescriptor::new(0x164, 0, 8)];
//! const STEER_REQUEST: BitField = BitField::unsigned(24, 1);
//!
//! let frame = CanFrame::new(0, 0x164, &[0, 0, 0, 0x01, 0, 0, 0, 0])?;
//! assert!(is_allowed(&frame, &TX));
//! assert_eq!(STEER_REQUEST.decode(&frame), 1);
//! # Ok::<(), cansafe_errors::FrameError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod bits;
pub mod checksum;
pub mod descriptor;
pub mod frame;

pub use bits::{BitField, extract_bits, get_bit, get_byte, get_bytes, to_signed};
pub use checksum::additive_checksum;
pub use descriptor::{MessageDescriptor, concat_descriptors, is_allowed};
pub use frame::{CanFrame, MAX_ADDR, MAX_PAYLOAD_LEN};
