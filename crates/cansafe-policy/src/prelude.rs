//! Prelude for the policy crate.
//!
//! ```
//! use cansafe_policy::prelude::*;
//!
//! let limits = LongitudinalLimits {
//!     min_gas: 808,
//!     max_gas: 3400,
//!     inactive_gas: 1818,
//!     max_brake: 600,
//!     min_transmission_rpm: 0,
//!     max_transmission_rpm: 2400,
//!     inactive_transmission_rpm: 0,
//! };
//! assert!(limits.validate().is_ok());
//! ```

pub use crate::clock::{Clock, ManualClock, MonotonicClock};
pub use crate::controls::{ControlsPolicy, RELAY_TRNS_TIMEOUT};
pub use crate::hooks::{SafetyConfig, SafetyHooks};
pub use crate::limits::{LongitudinalLimits, SteeringControl, SteeringLimits};
pub use crate::rx_check::{RxCheck, RxMonitor};
pub use crate::sample::TorqueSample;
pub use crate::traits::{SafetyPolicy, VehicleSignals};
