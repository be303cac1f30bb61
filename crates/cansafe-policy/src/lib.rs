//! Limit-check policy for CanSafe safety hooks.
//!
//! Vehicle-specific hooks decode frames and decide *which* checks apply; the
//! numeric policy itself lives behind the [`SafetyPolicy`] trait so hooks can
//! be tested against a mock and hosted against any implementation.
//!
//! # Overview
//!
//! - **Limits**: [`SteeringLimits`] and [`LongitudinalLimits`] constant tables
//! - **Policy**: the [`SafetyPolicy`] capability trait, one method per check
//! - **Hooks**: the [`SafetyHooks`] vtable a host dispatches frames through
//! - **Monitoring**: [`RxCheck`] tables and the [`RxMonitor`] staleness tracker
//! - **Reference**: [`ControlsPolicy`], the controls-allowed state machine
//!   with steering, gas, brake and transmission-rpm checks
//!
//! # RT Safety
//!
//! Every check is a handful of integer comparisons:
//! - No heap allocations after construction
//! - O(1) time complexity for all checks
//! - No syscalls or I/O
//!
//! # Example
//!
//! ```
//! use cansafe_policy::prelude::*;
//!
//! let clock = ManualClock::new(0);
//! let mut policy = ControlsPolicy::new(&clock);
//!
//! // stock cruise engages with the main switch on
//! policy.cruise_check(true, true);
//! assert!(policy.controls_allowed());
//!
//! let limits = SteeringLimits {
//!     max_steer: 2047,
//!     max_rate_up: 50,
//!     max_rate_down: 70,
//!     max_rt_delta: 940,
//!     max_rt_interval: 250_000,
//!     driver_torque_factor: 10,
//!     driver_torque_allowance: 75,
//!     max_torque_error: 0,
//!     control: SteeringControl::DriverLimited,
//! };
//! let driver = TorqueSample::new();
//! assert!(!policy.steer_torque_checks(limits.max_rate_up, true, &limits, &driver));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod checks;
pub mod clock;
mod controls;
mod hooks;
mod limits;
pub mod prelude;
mod rx_check;
mod sample;
mod traits;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use controls::{ControlsPolicy, RELAY_TRNS_TIMEOUT};
pub use hooks::{SafetyConfig, SafetyHooks};
pub use limits::{LongitudinalLimits, SteeringControl, SteeringLimits};
pub use rx_check::{MAX_MISSED_MSGS, MAX_RX_CHECKS, RxCheck, RxMonitor};
pub use sample::{MAX_SAMPLE_VALS, TorqueSample};
pub use traits::{SafetyPolicy, VehicleSignals};
