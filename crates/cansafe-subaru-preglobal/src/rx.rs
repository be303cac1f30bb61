//! Receive decoder.

use cansafe_can::{CanFrame, get_byte, get_bytes};
use cansafe_policy::SafetyPolicy;

use crate::catalog::{MAIN_BUS, msg_ids, signals};
use crate::SafetyState;

/// Decode one received frame into `state`.
///
/// Frames off the main bus are ignored completely. Every main-bus frame,
/// recognised or not, ends with the policy's generic receive checks; a
/// steering command seen on the main bus means the stock camera is still
/// talking to the car.
pub fn rx_hook<P>(state: &mut SafetyState, policy: &mut P, frame: &CanFrame)
where
    P: SafetyPolicy + ?Sized,
{
    if frame.bus() != MAIN_BUS {
        return;
    }

    match frame.addr() {
        msg_ids::STEERING_TORQUE => {
            let mut torque = signals::DRIVER_TORQUE.decode(frame);
            if state.reversed_driver_torque() {
                torque = torque.saturating_neg();
            }
            policy.update_sample(&mut state.driver_torque, torque);
        }
        msg_ids::CRUISE_CONTROL => {
            state.acc_main_on = signals::CRUISE_ON.raw(frame) != 0;
            let engaged = signals::CRUISE_ACTIVATED.raw(frame) != 0;
            state.cruise_engaged_request = engaged;
            policy.cruise_check(engaged, state.acc_main_on);
        }
        msg_ids::WHEEL_SPEEDS => {
            state.vehicle_moving = (get_bytes(frame, 0, 4) >> 12) != 0 || get_bytes(frame, 4, 4) != 0;
        }
        msg_ids::BRAKE_PEDAL => {
            state.brake_pressed = ((get_bytes(frame, 0, 4) >> 16) & 0xFF) != 0;
        }
        msg_ids::THROTTLE => {
            state.gas_pressed = get_byte(frame, 0) != 0;
        }
        _ => {}
    }

    let stock_ecu_detected = frame.addr() == msg_ids::ES_LKAS;
    policy.rx_checks(stock_ecu_detected, &state.signals());
}
