//! Message catalog: addresses, buses, signal layouts and allow-lists.

use cansafe_can::{BitField, MessageDescriptor, concat_descriptors};
use cansafe_policy::RxCheck;

/// Main vehicle bus.
pub const MAIN_BUS: u8 = 0;

/// Forward-camera bus.
pub const CAM_BUS: u8 = 2;

/// CAN identifiers used on the preglobal platform.
pub mod msg_ids {
    /// Accelerator pedal position.
    pub const THROTTLE: u32 = 0x140;
    /// Cruise main switch and engaged state.
    pub const CRUISE_CONTROL: u32 = 0x144;
    /// Wheel speeds.
    pub const WHEEL_SPEEDS: u32 = 0xD4;
    /// Brake pedal.
    pub const BRAKE_PEDAL: u32 = 0xD1;
    /// Driver steering torque.
    pub const STEERING_TORQUE: u32 = 0x371;
    /// Lane keeping steering command.
    pub const ES_LKAS: u32 = 0x164;
    /// Brake command.
    pub const ES_BRAKE: u32 = 0x160;
    /// Cruise throttle and distance.
    pub const ES_DISTANCE: u32 = 0x161;
    /// Cruise status and transmission rpm request.
    pub const ES_STATUS: u32 = 0x162;
    /// Dash status.
    pub const ES_DASH_STATUS: u32 = 0x166;
    /// Secondary dash status.
    pub const ES_DASH_STATUS_2: u32 = 0x163;
    /// Brake status echoed to the camera.
    pub const BRAKE_STATUS: u32 = 0xD3;
}

use msg_ids::*;

/// Signal layouts, little-endian bit numbering.
pub mod signals {
    use super::BitField;

    /// Driver torque on `Steering_Torque`.
    pub const DRIVER_TORQUE: BitField = BitField::signed(29, 11);
    /// Cruise main switch on `CruiseControl`.
    pub const CRUISE_ON: BitField = BitField::unsigned(48, 1);
    /// Cruise engaged on `CruiseControl`.
    pub const CRUISE_ACTIVATED: BitField = BitField::unsigned(49, 1);
    /// Steering torque command on `ES_LKAS`, sign inverted on the wire.
    pub const LKAS_OUTPUT: BitField = BitField::signed(8, 13);
    /// Steering request on `ES_LKAS`.
    pub const LKAS_REQUEST: BitField = BitField::unsigned(24, 1);
    /// Brake pressure on `ES_Brake`.
    pub const BRAKE_PRESSURE: BitField = BitField::unsigned(0, 16);
    /// Cruise throttle on `ES_Distance`.
    pub const CRUISE_THROTTLE: BitField = BitField::unsigned(0, 12);
    /// Transmission rpm request on `ES_Status`.
    pub const CRUISE_RPM: BitField = BitField::unsigned(16, 12);
}

/// Messages that may always be sent.
pub const BASE_TX_MSGS: [MessageDescriptor; 4] = [
    MessageDescriptor::new(ES_DISTANCE, MAIN_BUS, 8),
    MessageDescriptor::new(ES_LKAS, MAIN_BUS, 8),
    MessageDescriptor::new(ES_DASH_STATUS, MAIN_BUS, 8),
    MessageDescriptor::new(ES_DASH_STATUS_2, MAIN_BUS, 8),
];

/// Additional messages sent while longitudinal control is enabled.
pub const LONG_TX_EXTRA: [MessageDescriptor; 3] = [
    MessageDescriptor::new(ES_BRAKE, MAIN_BUS, 8),
    MessageDescriptor::new(ES_STATUS, MAIN_BUS, 8),
    // the camera expects the echo one byte shorter than the vehicle sends it
    MessageDescriptor::new(BRAKE_STATUS, CAM_BUS, 7),
];

/// Full allow-list with longitudinal control.
pub const LONG_TX_MSGS: [MessageDescriptor; 7] = concat_descriptors(&BASE_TX_MSGS, &LONG_TX_EXTRA);

/// Messages that must keep arriving for controls to stay allowed.
pub const RX_CHECKS: [RxCheck; 3] = [
    RxCheck::new(MessageDescriptor::new(THROTTLE, MAIN_BUS, 8), 100),
    RxCheck::new(MessageDescriptor::new(STEERING_TORQUE, MAIN_BUS, 8), 50),
    RxCheck::new(MessageDescriptor::new(CRUISE_CONTROL, MAIN_BUS, 8), 20),
];

/// Allow-list for the given mode.
pub fn tx_msgs(longitudinal: bool) -> &'static [MessageDescriptor] {
    if longitudinal {
        &LONG_TX_MSGS
    } else {
        &BASE_TX_MSGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_list_extends_base() {
        assert_eq!(LONG_TX_MSGS[..4], BASE_TX_MSGS);
        assert_eq!(LONG_TX_MSGS[4..], LONG_TX_EXTRA);
    }

    #[test]
    fn test_brake_status_echo_is_short() {
        let echo = LONG_TX_MSGS.iter().find(|m| m.addr == BRAKE_STATUS);
        assert_eq!(echo, Some(&MessageDescriptor::new(BRAKE_STATUS, CAM_BUS, 7)));
    }

    #[test]
    fn test_monitored_rates() {
        let rates: Vec<(u32, u32)> = RX_CHECKS.iter().map(|c| (c.msg.addr, c.frequency_hz)).collect();
        assert_eq!(rates, vec![(THROTTLE, 100), (STEERING_TORQUE, 50), (CRUISE_CONTROL, 20)]);
    }

    #[test]
    fn test_mode_selects_list() {
        assert_eq!(tx_msgs(false).len(), 4);
        assert_eq!(tx_msgs(true).len(), 7);
    }
}
