//! Limit tables for the preglobal platform.

use cansafe_policy::{LongitudinalLimits, SteeringControl, SteeringLimits};

/// Steering torque limits.
pub const STEERING_LIMITS: SteeringLimits = SteeringLimits {
    max_steer: 2047,
    max_rate_up: 50,
    max_rate_down: 70,
    max_rt_delta: 940,
    max_rt_interval: 250_000,
    driver_torque_factor: 10,
    driver_torque_allowance: 75,
    max_torque_error: 0,
    control: SteeringControl::DriverLimited,
};

/// Longitudinal limits for the preglobal platform. Brake commands use these.
pub const LONG_LIMITS: LongitudinalLimits = LongitudinalLimits {
    min_gas: 808,
    max_gas: 3400,
    inactive_gas: 1818,
    max_brake: 600,
    min_transmission_rpm: 0,
    max_transmission_rpm: 2400,
    inactive_transmission_rpm: 0,
};

/// Longitudinal limits shared with the global platform.
///
/// Gas and transmission rpm commands are checked against this table rather
/// than [`LONG_LIMITS`].
///
/// The values are a placeholder copied from [`LONG_LIMITS`] and have not been
/// checked against the global platform's own table, whose rpm ceiling may be
/// higher. Confirm them before relying on gas or rpm verdicts.
pub const GLOBAL_LONG_LIMITS: LongitudinalLimits = LongitudinalLimits {
    min_gas: 808,
    max_gas: 3400,
    inactive_gas: 1818,
    max_brake: 600,
    min_transmission_rpm: 0,
    max_transmission_rpm: 2400,
    inactive_transmission_rpm: 0,
};
