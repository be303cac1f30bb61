//! Payload encoders for the messages this crate validates.
//!
//! Each encoder writes the guarded fields exactly where the transmit
//! validator reads them back and finishes with the additive checksum.
//! Out-of-range inputs are clamped to the field width.

use cansafe_can::{BitField, additive_checksum};

use crate::catalog::signals;

/// Payload length of every encoded message.
pub const PAYLOAD_LEN: usize = 8;

const LKAS_CHECKSUM_BYTE: usize = 7;
const BRAKE_CHECKSUM_BYTE: usize = 7;
const DISTANCE_CHECKSUM_BYTE: usize = 7;
const STATUS_CHECKSUM_BYTE: usize = 4;

/// Sum of every payload byte except `checksum_byte`, modulo 256.
pub fn preglobal_checksum(payload: &[u8], checksum_byte: usize) -> u8 {
    additive_checksum(payload, checksum_byte)
}

fn seal(mut payload: [u8; PAYLOAD_LEN], checksum_byte: usize) -> [u8; PAYLOAD_LEN] {
    let checksum = preglobal_checksum(&payload, checksum_byte);
    if let Some(slot) = payload.get_mut(checksum_byte) {
        *slot = checksum;
    }
    payload
}

fn clamp_to(field: BitField, value: i32) -> i32 {
    let width = u32::from(field.width());
    let (lo, hi) = if field.is_signed() {
        let half = 1i64 << (width - 1);
        (-half, half - 1)
    } else {
        (0, (1i64 << width) - 1)
    };
    // bounds fit in i32 for every field width up to 32
    i64::from(value).clamp(lo, hi) as i32
}

/// `ES_LKAS` carrying `torque` in the policy's sign convention.
pub fn es_lkas(torque: i32, steer_req: bool) -> [u8; PAYLOAD_LEN] {
    let mut payload = [0u8; PAYLOAD_LEN];
    let wire = clamp_to(signals::LKAS_OUTPUT, torque.saturating_neg());
    signals::LKAS_OUTPUT.encode(&mut payload, wire);
    signals::LKAS_REQUEST.encode(&mut payload, i32::from(steer_req));
    seal(payload, LKAS_CHECKSUM_BYTE)
}

/// `ES_Brake` requesting `brake_pressure`.
pub fn es_brake(brake_pressure: i32) -> [u8; PAYLOAD_LEN] {
    let mut payload = [0u8; PAYLOAD_LEN];
    let field = signals::BRAKE_PRESSURE;
    field.encode(&mut payload, clamp_to(field, brake_pressure));
    seal(payload, BRAKE_CHECKSUM_BYTE)
}

/// `ES_Distance` requesting `cruise_throttle`.
pub fn es_distance(cruise_throttle: i32) -> [u8; PAYLOAD_LEN] {
    let mut payload = [0u8; PAYLOAD_LEN];
    let field = signals::CRUISE_THROTTLE;
    field.encode(&mut payload, clamp_to(field, cruise_throttle));
    seal(payload, DISTANCE_CHECKSUM_BYTE)
}

/// `ES_Status` requesting `cruise_rpm`.
pub fn es_status(cruise_rpm: i32) -> [u8; PAYLOAD_LEN] {
    let mut payload = [0u8; PAYLOAD_LEN];
    let field = signals::CRUISE_RPM;
    field.encode(&mut payload, clamp_to(field, cruise_rpm));
    seal(payload, STATUS_CHECKSUM_BYTE)
}
