//! Limit tables loaded from JSON.

#![cfg(feature = "serde")]

use cansafe_policy::{LongitudinalLimits, SteeringControl, SteeringLimits};

#[test]
fn steering_limits_from_json() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"{
        "max_steer": 2047,
        "max_rate_up": 50,
        "max_rate_down": 70,
        "max_rt_delta": 940,
        "max_rt_interval": 250000,
        "driver_torque_factor": 10,
        "driver_torque_allowance": 75,
        "max_torque_error": 0,
        "control": "DriverLimited"
    }"#;
    let limits: SteeringLimits = serde_json::from_str(json)?;
    assert_eq!(limits.control, SteeringControl::DriverLimited);
    limits.validate()?;
    Ok(())
}

#[test]
fn invalid_table_is_caught_after_load() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"{
        "min_gas": 3400,
        "max_gas": 808,
        "inactive_gas": 1818,
        "max_brake": 600,
        "min_transmission_rpm": 0,
        "max_transmission_rpm": 2400,
        "inactive_transmission_rpm": 0
    }"#;
    let limits: LongitudinalLimits = serde_json::from_str(json)?;
    assert!(limits.validate().is_err());
    Ok(())
}
