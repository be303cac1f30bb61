//! Unit tests that need a longitudinal-mode state regardless of features.


use cansafe_can::CanFrame;
use cansafe_policy::{LongitudinalLimits, SafetyPolicy, SteeringLimits, TorqueSample, VehicleSignals};

pub(crate) fn frame(bus: u8, addr: u32, data: &[u8]) -> CanFrame {
    CanFrame::new(bus, addr, data).expect("valid test frame")
}

/// Records what the hooks pass in and answers with fixed verdicts.
#[derive(Debug, Default)]
pub(crate) struct RecordingPolicy {
    pub samples: Vec<i32>,
    pub cruise: Vec<(bool, bool)>,
    pub rx: Vec<(bool, VehicleSignals)>,
    pub steer: Vec<(i32, bool)>,
    pub brake: Vec<i32>,
    pub gas: Vec<i32>,
    pub rpm: Vec<i32>,
    pub reject: bool,
}

impl SafetyPolicy for RecordingPolicy {
    fn update_sample(&mut self, sample: &mut TorqueSample, value: i32) {
        self.samples.push(value);
        sample.update(value);
    }

    fn cruise_check(&mut self, cruise_engaged: bool, acc_main_on: bool) {
        self.cruise.push((cruise_engaged, acc_main_on));
    }

    fn rx_checks(&mut self, stock_ecu_detected: bool, signals: &VehicleSignals) {
        self.rx.push((stock_ecu_detected, *signals));
    }

    fn steer_torque_checks(
        &mut self,
        desired_torque: i32,
        steer_req: bool,
        _limits: &SteeringLimits,
        _driver_torque: &TorqueSample,
    ) -> bool {
        self.steer.push((desired_torque, steer_req));
        self.reject
    }

    fn brake_checks(&mut self, desired_brake: i32, _limits: &LongitudinalLimits) -> bool {
        self.brake.push(desired_brake);
        self.reject
    }

    fn gas_checks(&mut self, desired_gas: i32, _limits: &LongitudinalLimits) -> bool {
        self.gas.push(desired_gas);
        self.reject
    }

    fn transmission_rpm_checks(&mut self, desired_rpm: i32, _limits: &LongitudinalLimits) -> bool {
        self.rpm.push(desired_rpm);
        self.reject
    }
}
