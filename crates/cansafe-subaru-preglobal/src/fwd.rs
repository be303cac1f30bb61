//! Forwarding gate between the vehicle and camera buses.

use crate::catalog::{CAM_BUS, MAIN_BUS, msg_ids};
use crate::SafetyState;

/// Target bus for a frame received on `bus`, or `None` to drop it.
///
/// Camera traffic we replace is dropped: steering and dash messages always,
/// brake, distance and status messages only with longitudinal control.
/// With longitudinal control the brake status echo to the camera is also
/// ours to send.
pub const fn forward_target(longitudinal: bool, bus: u8, addr: u32) -> Option<u8> {
    match bus {
        MAIN_BUS => {
            if longitudinal && addr == msg_ids::BRAKE_STATUS {
                None
            } else {
                Some(CAM_BUS)
            }
        }
        CAM_BUS => {
            let block_lkas = matches!(
                addr,
                msg_ids::ES_LKAS | msg_ids::ES_DASH_STATUS | msg_ids::ES_DASH_STATUS_2
            );
            let block_long = longitudinal
                && matches!(addr, msg_ids::ES_BRAKE | msg_ids::ES_DISTANCE | msg_ids::ES_STATUS);
            if block_lkas || block_long {
                None
            } else {
                Some(MAIN_BUS)
            }
        }
        _ => None,
    }
}

/// [`forward_target`] for the mode recorded in `state`.
pub fn fwd_hook(state: &SafetyState, bus: u8, addr: u32) -> Option<u8> {
    forward_target(state.longitudinal_enabled(), bus, addr)
}
