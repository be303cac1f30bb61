//! The safety parameter word handed to [`init`](crate::SubaruPreglobal::init).

use core::fmt;

/// Driver torque sensor reports with the opposite sign.
pub const PARAM_REVERSED_DRIVER_TORQUE: u16 = 0x1;

/// Request longitudinal control. Only honoured with the `allow-debug` feature.
pub const PARAM_LONGITUDINAL: u16 = 0x2;

/// Bit flags selecting the preglobal safety mode variant.
///
/// Unknown bits are carried but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SafetyParam(u16);

impl SafetyParam {
    /// Wrap a raw parameter word.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw word.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// [`PARAM_REVERSED_DRIVER_TORQUE`] is set.
    pub const fn reversed_driver_torque(self) -> bool {
        self.0 & PARAM_REVERSED_DRIVER_TORQUE != 0
    }

    /// [`PARAM_LONGITUDINAL`] is set. Whether it takes effect depends on the build.
    pub const fn longitudinal_requested(self) -> bool {
        self.0 & PARAM_LONGITUDINAL != 0
    }

    /// Longitudinal control as this build will actually run it.
    pub const fn longitudinal_effective(self) -> bool {
        cfg!(feature = "allow-debug") && self.longitudinal_requested()
    }
}

impl From<u16> for SafetyParam {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SafetyParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let param = SafetyParam::new(PARAM_REVERSED_DRIVER_TORQUE | PARAM_LONGITUDINAL);
        assert!(param.reversed_driver_torque());
        assert!(param.longitudinal_requested());
        assert_eq!(
            param.longitudinal_effective(),
            cfg!(feature = "allow-debug")
        );
    }

    #[test]
    fn test_unknown_bits_ignored() {
        let param = SafetyParam::from(0xFFF0);
        assert!(!param.reversed_driver_torque());
        assert!(!param.longitudinal_requested());
        assert_eq!(param.to_string(), "0xfff0");
    }
}
