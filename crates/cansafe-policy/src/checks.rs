//! Pure limit comparisons shared by policy implementations.
//!
//! All functions return `true` on a **violation**. Intermediate arithmetic
//! saturates so extreme limit tables cannot overflow.

use crate::{SteeringLimits, TorqueSample};

/// `val` outside `[min_val, max_val]`.
#[inline]
pub const fn max_limit_check(val: i32, max_val: i32, min_val: i32) -> bool {
    val > max_val || val < min_val
}

/// Rate limit anchored on the driver's torque.
///
/// Magnitude may rise by `max_rate_up` per command. Once the command exceeds
/// what the driver torque allows it must fall back towards zero by at least
/// `max_rate_down` per command.
pub fn driver_limit_check(
    val: i32,
    val_last: i32,
    driver: &TorqueSample,
    limits: &SteeringLimits,
) -> bool {
    let highest_allowed_rl = val_last.max(0).saturating_add(limits.max_rate_up);
    let lowest_allowed_rl = val_last.min(0).saturating_sub(limits.max_rate_up);

    let driver_max_limit = limits.max_steer.saturating_add(
        limits
            .driver_torque_allowance
            .saturating_add(driver.max())
            .saturating_mul(limits.driver_torque_factor),
    );
    let driver_min_limit = limits.max_steer.saturating_neg().saturating_add(
        limits
            .driver_torque_allowance
            .saturating_neg()
            .saturating_add(driver.min())
            .saturating_mul(limits.driver_torque_factor),
    );

    let highest_allowed = highest_allowed_rl.min(
        val_last
            .saturating_sub(limits.max_rate_down)
            .max(driver_max_limit.max(0)),
    );
    let lowest_allowed = lowest_allowed_rl.max(
        val_last
            .saturating_add(limits.max_rate_down)
            .min(driver_min_limit.min(0)),
    );

    max_limit_check(val, highest_allowed, lowest_allowed)
}

/// Rate limit anchored on the torque measured at the motor.
pub fn dist_to_meas_check(
    val: i32,
    val_last: i32,
    meas: &TorqueSample,
    limits: &SteeringLimits,
) -> bool {
    let highest_allowed_rl = val_last.max(0).saturating_add(limits.max_rate_up);
    let lowest_allowed_rl = val_last.min(0).saturating_sub(limits.max_rate_up);

    let highest_allowed = highest_allowed_rl.min(
        val_last
            .saturating_sub(limits.max_rate_down)
            .max(meas.max().max(0).saturating_add(limits.max_torque_error)),
    );
    let lowest_allowed = lowest_allowed_rl.max(
        val_last
            .saturating_add(limits.max_rate_down)
            .min(meas.min().min(0).saturating_sub(limits.max_torque_error)),
    );

    max_limit_check(val, highest_allowed, lowest_allowed)
}

/// Change from the value saved at the start of the real-time window.
#[inline]
pub fn rt_rate_limit_check(val: i32, val_last: i32, max_rt_delta: i32) -> bool {
    let highest_val = val_last.max(0).saturating_add(max_rt_delta);
    let lowest_val = val_last.min(0).saturating_sub(max_rt_delta);
    max_limit_check(val, highest_val, lowest_val)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SteeringControl;

    const LIMITS: SteeringLimits = SteeringLimits {
        max_steer: 2047,
        max_rate_up: 50,
        max_rate_down: 70,
        max_rt_delta: 940,
        max_rt_interval: 250_000,
        driver_torque_factor: 10,
        driver_torque_allowance: 75,
        max_torque_error: 350,
        control: SteeringControl::DriverLimited,
    };

    fn sample_of(value: i32) -> TorqueSample {
        let mut s = TorqueSample::new();
        for _ in 0..crate::MAX_SAMPLE_VALS {
            s.update(value);
        }
        s
    }

    #[test]
    fn test_max_limit_check_bounds_inclusive() {
        assert!(!max_limit_check(10, 10, -10));
        assert!(!max_limit_check(-10, 10, -10));
        assert!(max_limit_check(11, 10, -10));
        assert!(max_limit_check(-11, 10, -10));
    }

    #[test]
    fn test_driver_limit_rate_up_from_rest() {
        let driver = sample_of(0);
        assert!(!driver_limit_check(50, 0, &driver, &LIMITS));
        assert!(driver_limit_check(51, 0, &driver, &LIMITS));
        assert!(!driver_limit_check(-50, 0, &driver, &LIMITS));
        assert!(driver_limit_check(-51, 0, &driver, &LIMITS));
    }

    #[test]
    fn test_driver_opposing_forces_wind_down() {
        // driver max = 2047 + (75 - 300) * 10 = -203, so the command must fall
        let driver = sample_of(-300);
        assert!(driver_limit_check(1000, 1000, &driver, &LIMITS));
        assert!(!driver_limit_check(930, 1000, &driver, &LIMITS));
        assert!(driver_limit_check(931, 1000, &driver, &LIMITS));
    }

    #[test]
    fn test_dist_to_meas_tracks_motor() {
        // measured 100: ceiling is 100 + 350 = 450
        let meas = sample_of(100);
        assert!(!dist_to_meas_check(450, 420, &meas, &LIMITS));
        assert!(dist_to_meas_check(451, 420, &meas, &LIMITS));
    }

    #[test]
    fn test_rt_rate_limit() {
        assert!(!rt_rate_limit_check(940, 0, 940));
        assert!(rt_rate_limit_check(941, 0, 940));
        assert!(!rt_rate_limit_check(-1440, -500, 940));
        assert!(rt_rate_limit_check(-1441, -500, 940));
    }

    #[test]
    fn test_saturating_extremes_do_not_panic() {
        let wild = SteeringLimits {
            max_steer: i32::MAX,
            max_rate_up: i32::MAX,
            max_rate_down: i32::MAX,
            driver_torque_factor: i32::MAX,
            ..LIMITS
        };
        let driver = sample_of(i32::MIN);
        let _ = driver_limit_check(i32::MAX, i32::MIN, &driver, &wild);
        let _ = dist_to_meas_check(i32::MIN, i32::MAX, &driver, &wild);
    }
}
