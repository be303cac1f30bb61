//! Per-variant limit tables.
//!
//! Each vehicle variant declares its limits as `const` values. When a table
//! is assembled at runtime instead (for example deserialized with the `serde`
//! feature), run `validate()` before handing it to a policy.

use cansafe_errors::ValidationError;

/// How steering torque rate limits are anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SteeringControl {
    /// Limits widen or shrink with the driver's own torque on the wheel.
    DriverLimited,
    /// Limits track the torque measured at the steering motor.
    MotorLimited,
}

/// Steering torque command limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringLimits {
    /// Absolute torque bound.
    pub max_steer: i32,
    /// Largest increase in magnitude per command.
    pub max_rate_up: i32,
    /// Largest decrease in magnitude per command.
    pub max_rate_down: i32,
    /// Largest change over one real-time window.
    pub max_rt_delta: i32,
    /// Real-time window length in microseconds.
    pub max_rt_interval: u32,
    /// Driver torque to command scale.
    pub driver_torque_factor: i32,
    /// Driver torque ignored before limits start shrinking.
    pub driver_torque_allowance: i32,
    /// Allowed gap between command and measured motor torque.
    pub max_torque_error: i32,
    /// Rate limit anchoring.
    pub control: SteeringControl,
}

impl SteeringLimits {
    /// Check that the table is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_steer <= 0 {
            return Err(ValidationError::out_of_range("max_steer", self.max_steer, 1, i32::MAX));
        }
        for (field, value) in [
            ("max_rate_up", self.max_rate_up),
            ("max_rate_down", self.max_rate_down),
            ("max_rt_delta", self.max_rt_delta),
        ] {
            if value <= 0 || value > self.max_steer {
                return Err(ValidationError::out_of_range(field, value, 1, self.max_steer));
            }
        }
        if self.max_rt_interval == 0 {
            return Err(ValidationError::constraint("max_rt_interval must be non-zero"));
        }
        match self.control {
            SteeringControl::DriverLimited => {
                if self.driver_torque_factor <= 0 {
                    return Err(ValidationError::out_of_range(
                        "driver_torque_factor",
                        self.driver_torque_factor,
                        1,
                        i32::MAX,
                    ));
                }
                if self.driver_torque_allowance < 0 {
                    return Err(ValidationError::out_of_range(
                        "driver_torque_allowance",
                        self.driver_torque_allowance,
                        0,
                        i32::MAX,
                    ));
                }
            }
            SteeringControl::MotorLimited => {
                if self.max_torque_error < 0 {
                    return Err(ValidationError::out_of_range(
                        "max_torque_error",
                        self.max_torque_error,
                        0,
                        i32::MAX,
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Gas, brake and transmission-rpm command limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LongitudinalLimits {
    /// Lowest gas command while longitudinal control is allowed.
    pub min_gas: i32,
    /// Highest gas command while longitudinal control is allowed.
    pub max_gas: i32,
    /// Gas command meaning "no request"; always accepted.
    pub inactive_gas: i32,
    /// Highest brake command.
    pub max_brake: i32,
    /// Lowest transmission rpm request while allowed.
    pub min_transmission_rpm: i32,
    /// Highest transmission rpm request while allowed.
    pub max_transmission_rpm: i32,
    /// Transmission rpm meaning "no request"; always accepted.
    pub inactive_transmission_rpm: i32,
}

impl LongitudinalLimits {
    /// Check that the table is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_gas > self.max_gas {
            return Err(ValidationError::ordering("min_gas", self.min_gas, "max_gas", self.max_gas));
        }
        if self.max_brake < 0 {
            return Err(ValidationError::out_of_range("max_brake", self.max_brake, 0, i32::MAX));
        }
        if self.min_transmission_rpm > self.max_transmission_rpm {
            return Err(ValidationError::ordering(
                "min_transmission_rpm",
                self.min_transmission_rpm,
                "max_transmission_rpm",
                self.max_transmission_rpm,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEER: SteeringLimits = SteeringLimits {
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

    const LONG: LongitudinalLimits = LongitudinalLimits {
        min_gas: 808,
        max_gas: 3400,
        inactive_gas: 1818,
        max_brake: 600,
        min_transmission_rpm: 0,
        max_transmission_rpm: 2400,
        inactive_transmission_rpm: 0,
    };

    #[test]
    fn test_valid_tables() {
        assert_eq!(STEER.validate(), Ok(()));
        assert_eq!(LONG.validate(), Ok(()));
    }

    #[test]
    fn test_rate_above_bound_rejected() {
        let limits = SteeringLimits {
            max_rate_up: 4096,
            ..STEER
        };
        let err = limits.validate().expect_err("rate larger than bound");
        assert_eq!(err.field(), Some("max_rate_up"));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let limits = SteeringLimits {
            max_rt_interval: 0,
            ..STEER
        };
        assert!(matches!(
            limits.validate(),
            Err(ValidationError::ConstraintViolation(_))
        ));
    }

    #[test]
    fn test_motor_limited_ignores_driver_factor() {
        let limits = SteeringLimits {
            driver_torque_factor: 0,
            max_torque_error: 350,
            control: SteeringControl::MotorLimited,
            ..STEER
        };
        assert_eq!(limits.validate(), Ok(()));
    }

    #[test]
    fn test_inverted_gas_range_rejected() {
        let limits = LongitudinalLimits {
            min_gas: 3500,
            ..LONG
        };
        let err = limits.validate().expect_err("inverted range");
        assert_eq!(err.field(), Some("min_gas"));
    }
}
