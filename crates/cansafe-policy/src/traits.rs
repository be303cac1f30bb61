//! The policy capability interface.

use crate::{LongitudinalLimits, SteeringLimits, TorqueSample};

/// Snapshot of the vehicle signals a hook has decoded so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VehicleSignals {
    /// Adaptive cruise main switch.
    pub acc_main_on: bool,
    /// Last cruise-engaged observation.
    pub cruise_engaged: bool,
    /// Driver is on the gas.
    pub gas_pressed: bool,
    /// Driver is on the brake.
    pub brake_pressed: bool,
    /// Any wheel is turning.
    pub vehicle_moving: bool,
}

/// Numeric limit checks and controls state owned outside the vehicle hooks.
///
/// Hooks decode signals and decide which capability applies; the
/// implementation decides what is safe. Every `*_checks` method returns
/// `true` on a **violation**. Implementations must run in bounded time with
/// no allocation, since they are called from the frame path.
pub trait SafetyPolicy {
    /// Push a new driver torque reading into `sample`.
    fn update_sample(&mut self, sample: &mut TorqueSample, value: i32);

    /// Feed the cruise state machine one cruise-engaged observation.
    ///
    /// Controls enter on a rising edge of `cruise_engaged` while
    /// `acc_main_on`, and exit when either drops.
    fn cruise_check(&mut self, cruise_engaged: bool, acc_main_on: bool);

    /// Generic per-frame receive checks.
    ///
    /// `stock_ecu_detected` is set when the frame is one the stock ECU should
    /// no longer be sending on this bus.
    fn rx_checks(&mut self, stock_ecu_detected: bool, signals: &VehicleSignals);

    /// Steering torque command check.
    fn steer_torque_checks(
        &mut self,
        desired_torque: i32,
        steer_req: bool,
        limits: &SteeringLimits,
        driver_torque: &TorqueSample,
    ) -> bool;

    /// Brake command check.
    fn brake_checks(&mut self, desired_brake: i32, limits: &LongitudinalLimits) -> bool;

    /// Gas command check.
    fn gas_checks(&mut self, desired_gas: i32, limits: &LongitudinalLimits) -> bool;

    /// Transmission rpm request check.
    fn transmission_rpm_checks(&mut self, desired_rpm: i32, limits: &LongitudinalLimits) -> bool;
}
