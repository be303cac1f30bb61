//! Subaru preglobal CAN safety hooks.
//!
//! Sits between openpilot-style controls and the car: tracks the few vehicle
//! signals that matter for safety, decides which commands may go onto the
//! main bus, and relays traffic between the main bus and the forward camera.
//!
//! The numeric limit checks are not implemented here. Every decision that
//! needs one calls into a [`SafetyPolicy`], so the hooks run against the
//! reference [`ControlsPolicy`](cansafe_policy::ControlsPolicy), a test mock,
//! or a host's own implementation.
//!
//! # Example
//!
//! ```
//! use cansafe_can::CanFrame;
//! use cansafe_policy::{ControlsPolicy, ManualClock};
//! use cansafe_subaru_preglobal::{SafetyParam, SubaruPreglobal, encode, msg_ids, MAIN_BUS};
//!
//! let clock = ManualClock::new(0);
//! let (mut hooks, config) = SubaruPreglobal::init(SafetyParam::new(0), ControlsPolicy::new(&clock));
//! assert_eq!(config.tx_msgs.len(), 4);
//!
//! // steering is refused until stock cruise engages
//! let lkas = CanFrame::new(MAIN_BUS, msg_ids::ES_LKAS, &encode::es_lkas(100, true))?;
//! assert!(!hooks.on_transmit(&lkas));
//!
//! let cruise = CanFrame::new(MAIN_BUS, msg_ids::CRUISE_CONTROL, &[0, 0, 0, 0, 0, 0, 0x03, 0])?;
//! hooks.on_receive(&cruise);
//! assert!(hooks.policy().controls_allowed());
//!
//! let lkas = CanFrame::new(MAIN_BUS, msg_ids::ES_LKAS, &encode::es_lkas(40, true))?;
//! assert!(hooks.on_transmit(&lkas));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - `allow-debug`: honour [`PARAM_LONGITUDINAL`]. Without it longitudinal
//!   control is never enabled, whatever the parameter word says.

#![deny(static_mut_refs)]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
mod config;
pub mod encode;
mod fwd;
pub mod limits;
mod rx;
mod state;
mod tx;

pub use catalog::{
    BASE_TX_MSGS, CAM_BUS, LONG_TX_EXTRA, LONG_TX_MSGS, MAIN_BUS, RX_CHECKS, msg_ids, tx_msgs,
};
pub use config::{PARAM_LONGITUDINAL, PARAM_REVERSED_DRIVER_TORQUE, SafetyParam};
pub use fwd::{forward_target, fwd_hook};
pub use rx::rx_hook;
pub use state::SafetyState;
pub use tx::tx_hook;

use cansafe_can::CanFrame;
use cansafe_policy::{SafetyConfig, SafetyHooks, SafetyPolicy};
use tracing::debug;

/// One active preglobal safety mode: its [`SafetyState`] plus the policy
/// making the numeric decisions.
#[derive(Debug)]
pub struct SubaruPreglobal<P> {
    state: SafetyState,
    policy: P,
}

impl<P: SafetyPolicy> SubaruPreglobal<P> {
    /// Enter the mode selected by `param`.
    ///
    /// The returned [`SafetyConfig`] always names the base allow-list; with
    /// longitudinal control the instance widens it itself on transmit.
    pub fn init(param: impl Into<SafetyParam>, policy: P) -> (Self, SafetyConfig) {
        let param = param.into();
        let state = SafetyState::from_param(param);
        debug!(
            %param,
            longitudinal = state.longitudinal_enabled(),
            reversed_driver_torque = state.reversed_driver_torque(),
            "subaru preglobal safety initialised"
        );
        let config = SafetyConfig {
            rx_checks: &RX_CHECKS,
            tx_msgs: &BASE_TX_MSGS,
        };
        (Self { state, policy }, config)
    }

    /// Inbound frame.
    pub fn on_receive(&mut self, frame: &CanFrame) {
        rx_hook(&mut self.state, &mut self.policy, frame);
    }

    /// Outbound frame; `true` when it may be sent.
    pub fn on_transmit(&mut self, frame: &CanFrame) -> bool {
        tx_hook(&self.state, &mut self.policy, frame)
    }

    /// Relay target for a frame received on `bus`.
    pub fn on_forward(&self, bus: u8, addr: u32) -> Option<u8> {
        fwd_hook(&self.state, bus, addr)
    }

    /// Tracked vehicle state.
    pub fn state(&self) -> &SafetyState {
        &self.state
    }

    /// The policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The policy, mutably, for host housekeeping such as safety ticks.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Tear down and hand the policy back.
    pub fn into_policy(self) -> P {
        self.policy
    }
}

impl<P: SafetyPolicy> SafetyHooks for SubaruPreglobal<P> {
    fn rx(&mut self, frame: &CanFrame) {
        self.on_receive(frame);
    }

    fn tx(&mut self, frame: &CanFrame) -> bool {
        self.on_transmit(frame)
    }

    fn fwd(&self, bus: u8, addr: u32) -> Option<u8> {
        self.on_forward(bus, addr)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "test code")]
mod tests;
