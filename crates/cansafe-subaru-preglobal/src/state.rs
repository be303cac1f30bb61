//! Vehicle state tracked from main-bus traffic.

use cansafe_policy::{TorqueSample, VehicleSignals};
use tracing::warn;

use crate::SafetyParam;

/// Everything the transmit validator needs to know about the vehicle.
///
/// Only [`rx_hook`](crate::rx_hook) writes to it, and only for main-bus
/// frames. The two mode flags are fixed when the state is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyState {
    pub(crate) driver_torque: TorqueSample,
    pub(crate) acc_main_on: bool,
    pub(crate) cruise_engaged_request: bool,
    pub(crate) vehicle_moving: bool,
    pub(crate) brake_pressed: bool,
    pub(crate) gas_pressed: bool,
    longitudinal_enabled: bool,
    reversed_driver_torque: bool,
}

impl SafetyState {
    pub(crate) const fn new(longitudinal_enabled: bool, reversed_driver_torque: bool) -> Self {
        Self {
            driver_torque: TorqueSample::new(),
            acc_main_on: false,
            cruise_engaged_request: false,
            vehicle_moving: false,
            brake_pressed: false,
            gas_pressed: false,
            longitudinal_enabled,
            reversed_driver_torque,
        }
    }

    /// Fresh state for the mode selected by `param`.
    ///
    /// A longitudinal request is dropped with a warning unless the crate
    /// was built with `allow-debug`.
    pub fn from_param(param: SafetyParam) -> Self {
        let longitudinal = param.longitudinal_effective();
        if param.longitudinal_requested() && !longitudinal {
            warn!(%param, "longitudinal control requested but not enabled in this build");
        }
        Self::new(longitudinal, param.reversed_driver_torque())
    }

    /// Recent driver torque readings.
    pub fn driver_torque(&self) -> &TorqueSample {
        &self.driver_torque
    }

    /// Cruise main switch.
    pub fn acc_main_on(&self) -> bool {
        self.acc_main_on
    }

    /// Cruise-engaged bit from the last `CruiseControl` frame.
    pub fn cruise_engaged_request(&self) -> bool {
        self.cruise_engaged_request
    }

    /// Any wheel turning.
    pub fn vehicle_moving(&self) -> bool {
        self.vehicle_moving
    }

    /// Driver on the brake.
    pub fn brake_pressed(&self) -> bool {
        self.brake_pressed
    }

    /// Driver on the gas.
    pub fn gas_pressed(&self) -> bool {
        self.gas_pressed
    }

    /// Longitudinal control is active.
    pub fn longitudinal_enabled(&self) -> bool {
        self.longitudinal_enabled
    }

    /// Driver torque is sign-flipped on decode.
    pub fn reversed_driver_torque(&self) -> bool {
        self.reversed_driver_torque
    }

    /// Snapshot handed to the policy's generic receive checks.
    pub fn signals(&self) -> VehicleSignals {
        VehicleSignals {
            acc_main_on: self.acc_main_on,
            cruise_engaged: self.cruise_engaged_request,
            gas_pressed: self.gas_pressed,
            brake_pressed: self.brake_pressed,
            vehicle_moving: self.vehicle_moving,
        }
    }
}
