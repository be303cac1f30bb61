//! Reference [`SafetyPolicy`]: the controls-allowed state machine.
//!
//! # State Machine
//!
//! ```text
//! ┌─────────────┐  cruise rising edge + main on  ┌─────────────┐
//! │  Disengaged │───────────────────────────────▶│   Engaged   │
//! └─────────────┘                                └──────┬──────┘
//!        ▲   cruise off / main off / gas edge /         │
//!        │   brake / stale rx / relay malfunction       │
//!        └──────────────────────────────────────────────┘
//! ```
//!
//! Command checks only pass nonzero actuation while engaged.

use tracing::{debug, warn};

use crate::checks::{dist_to_meas_check, driver_limit_check, max_limit_check, rt_rate_limit_check};
use crate::{
    Clock, LongitudinalLimits, RxMonitor, SafetyPolicy, SteeringControl, SteeringLimits,
    TorqueSample, VehicleSignals,
};

/// Safety ticks that must pass before stock ECU traffic counts as a relay
/// malfunction.
pub const RELAY_TRNS_TIMEOUT: u32 = 1;

/// Controls-allowed state machine with steering and longitudinal checks.
#[derive(Debug)]
pub struct ControlsPolicy<C> {
    clock: C,
    controls_allowed: bool,
    cruise_engaged_prev: bool,
    gas_pressed_prev: bool,
    brake_pressed_prev: bool,
    relay_malfunction: bool,
    safety_mode_cnt: u32,
    desired_torque_last: i32,
    rt_torque_last: i32,
    ts_torque_check_last: u32,
    motor_torque: TorqueSample,
}

impl<C: Clock> ControlsPolicy<C> {
    /// A disengaged policy reading time from `clock`.
    pub fn new(clock: C) -> Self {
        let now = clock.now_us();
        Self {
            clock,
            controls_allowed: false,
            cruise_engaged_prev: false,
            gas_pressed_prev: false,
            brake_pressed_prev: false,
            relay_malfunction: false,
            safety_mode_cnt: 0,
            desired_torque_last: 0,
            rt_torque_last: 0,
            ts_torque_check_last: now,
            motor_torque: TorqueSample::new(),
        }
    }

    /// Whether actuation is currently permitted.
    pub fn controls_allowed(&self) -> bool {
        self.controls_allowed
    }

    /// Controls allowed and the driver was not on the gas at the last frame.
    pub fn longitudinal_allowed(&self) -> bool {
        self.controls_allowed && !self.gas_pressed_prev
    }

    /// Latched once stock ECU traffic is seen after the relay grace period.
    pub fn relay_malfunction(&self) -> bool {
        self.relay_malfunction
    }

    /// Last steering command accepted by the rate limiter.
    pub fn desired_torque_last(&self) -> i32 {
        self.desired_torque_last
    }

    /// Push a motor torque reading for [`SteeringControl::MotorLimited`] limits.
    pub fn update_motor_torque(&mut self, value: i32) {
        self.motor_torque.update(value);
    }

    /// Periodic housekeeping, nominally once per second.
    ///
    /// Drops controls when `monitor` reports a lagging message and advances
    /// the relay grace counter.
    pub fn safety_tick(&mut self, monitor: &mut RxMonitor) {
        let now = self.clock.now_us();
        if monitor.tick(now) {
            if self.controls_allowed {
                debug!(now, "rx message lagging, controls disengaged");
            }
            self.controls_allowed = false;
        }
        self.safety_mode_cnt = self.safety_mode_cnt.saturating_add(1);
    }

    /// Forget all history and return to the freshly constructed state.
    pub fn reset(&mut self) {
        let now = self.clock.now_us();
        self.controls_allowed = false;
        self.cruise_engaged_prev = false;
        self.gas_pressed_prev = false;
        self.brake_pressed_prev = false;
        self.relay_malfunction = false;
        self.safety_mode_cnt = 0;
        self.desired_torque_last = 0;
        self.rt_torque_last = 0;
        self.ts_torque_check_last = now;
        self.motor_torque.reset();
    }

    fn disengage(&mut self, reason: &'static str) {
        if self.controls_allowed {
            debug!(reason, "controls disengaged");
        }
        self.controls_allowed = false;
    }
}

impl<C: Clock> SafetyPolicy for ControlsPolicy<C> {
    fn update_sample(&mut self, sample: &mut TorqueSample, value: i32) {
        sample.update(value);
    }

    fn cruise_check(&mut self, cruise_engaged: bool, acc_main_on: bool) {
        if !acc_main_on {
            self.disengage("acc main off");
        } else if !cruise_engaged {
            self.disengage("cruise disengaged");
        }
        if cruise_engaged && !self.cruise_engaged_prev && acc_main_on {
            if !self.controls_allowed {
                debug!("controls engaged on cruise rising edge");
            }
            self.controls_allowed = true;
        }
        self.cruise_engaged_prev = cruise_engaged;
    }

    fn rx_checks(&mut self, stock_ecu_detected: bool, signals: &VehicleSignals) {
        if signals.gas_pressed && !self.gas_pressed_prev {
            self.disengage("gas pressed");
        }
        self.gas_pressed_prev = signals.gas_pressed;

        if signals.brake_pressed && (!self.brake_pressed_prev || signals.vehicle_moving) {
            self.disengage("brake pressed");
        }
        self.brake_pressed_prev = signals.brake_pressed;

        if stock_ecu_detected && self.safety_mode_cnt > RELAY_TRNS_TIMEOUT {
            if !self.relay_malfunction {
                warn!("stock ECU traffic on the vehicle bus, relay malfunction latched");
            }
            self.relay_malfunction = true;
            self.disengage("relay malfunction");
        }
    }

    fn steer_torque_checks(
        &mut self,
        desired_torque: i32,
        steer_req: bool,
        limits: &SteeringLimits,
        driver_torque: &TorqueSample,
    ) -> bool {
        let mut violation = false;
        let ts = self.clock.now_us();

        if self.controls_allowed {
            violation |= max_limit_check(desired_torque, limits.max_steer, -limits.max_steer);

            violation |= match limits.control {
                SteeringControl::DriverLimited => driver_limit_check(
                    desired_torque,
                    self.desired_torque_last,
                    driver_torque,
                    limits,
                ),
                SteeringControl::MotorLimited => dist_to_meas_check(
                    desired_torque,
                    self.desired_torque_last,
                    &self.motor_torque,
                    limits,
                ),
            };
            self.desired_torque_last = desired_torque;

            violation |= rt_rate_limit_check(desired_torque, self.rt_torque_last, limits.max_rt_delta);

            if ts.wrapping_sub(self.ts_torque_check_last) > limits.max_rt_interval {
                self.rt_torque_last = desired_torque;
                self.ts_torque_check_last = ts;
            }
        }

        if !self.controls_allowed && desired_torque != 0 {
            violation = true;
        }

        if !steer_req && desired_torque != 0 {
            violation = true;
        }

        if violation || !self.controls_allowed {
            self.desired_torque_last = 0;
            self.rt_torque_last = 0;
            self.ts_torque_check_last = ts;
        }

        violation
    }

    fn brake_checks(&mut self, desired_brake: i32, limits: &LongitudinalLimits) -> bool {
        let mut violation = false;
        violation |= !self.longitudinal_allowed() && desired_brake != 0;
        violation |= desired_brake > limits.max_brake;
        violation
    }

    fn gas_checks(&mut self, desired_gas: i32, limits: &LongitudinalLimits) -> bool {
        let gas_valid = self.longitudinal_allowed()
            && !max_limit_check(desired_gas, limits.max_gas, limits.min_gas);
        let gas_inactive = desired_gas == limits.inactive_gas;
        !(gas_valid || gas_inactive)
    }

    fn transmission_rpm_checks(&mut self, desired_rpm: i32, limits: &LongitudinalLimits) -> bool {
        let rpm_valid = self.longitudinal_allowed()
            && !max_limit_check(
                desired_rpm,
                limits.max_transmission_rpm,
                limits.min_transmission_rpm,
            );
        let rpm_inactive = desired_rpm == limits.inactive_transmission_rpm;
        !(rpm_valid || rpm_inactive)
    }
}
