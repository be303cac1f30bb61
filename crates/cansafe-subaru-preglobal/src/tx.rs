//! Transmit validator.

use cansafe_can::{CanFrame, is_allowed};
use cansafe_policy::SafetyPolicy;
use tracing::trace;

use crate::catalog::{msg_ids, signals, tx_msgs};
use crate::limits::{GLOBAL_LONG_LIMITS, LONG_LIMITS, STEERING_LIMITS};
use crate::SafetyState;

/// Decide whether `frame` may be sent.
///
/// The frame must be on the allow-list for the current mode, then every
/// command it carries must pass the matching policy check. Brake and rpm
/// commands are checked regardless of mode; the allow-list already keeps
/// them off the bus outside longitudinal mode. Gas is only checked with
/// longitudinal control enabled.
pub fn tx_hook<P>(state: &SafetyState, policy: &mut P, frame: &CanFrame) -> bool
where
    P: SafetyPolicy + ?Sized,
{
    if !is_allowed(frame, tx_msgs(state.longitudinal_enabled())) {
        trace!(%frame, "tx blocked: not on the allow-list");
        return false;
    }

    let violation = match frame.addr() {
        msg_ids::ES_LKAS => {
            // the command is sign-inverted on the wire
            let desired_torque = signals::LKAS_OUTPUT.decode(frame).saturating_neg();
            let steer_req = signals::LKAS_REQUEST.raw(frame) != 0;
            policy.steer_torque_checks(
                desired_torque,
                steer_req,
                &STEERING_LIMITS,
                state.driver_torque(),
            )
        }
        msg_ids::ES_BRAKE => {
            let brake_pressure = signals::BRAKE_PRESSURE.decode(frame);
            policy.brake_checks(brake_pressure, &LONG_LIMITS)
        }
        msg_ids::ES_DISTANCE if state.longitudinal_enabled() => {
            let cruise_throttle = signals::CRUISE_THROTTLE.decode(frame);
            policy.gas_checks(cruise_throttle, &GLOBAL_LONG_LIMITS)
        }
        msg_ids::ES_STATUS => {
            let cruise_rpm = signals::CRUISE_RPM.decode(frame);
            policy.transmission_rpm_checks(cruise_rpm, &GLOBAL_LONG_LIMITS)
        }
        _ => false,
    };

    if violation {
        trace!(%frame, "tx blocked: policy violation");
    }
    !violation
}
