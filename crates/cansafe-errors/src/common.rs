//! Top-level error type wrapping every CanSafe sub-error.

use core::fmt;

use crate::{FrameError, ValidationError};

/// Top-level error type that can wrap all CanSafe sub-errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanSafeError {
    /// Frame construction errors
    #[error("Frame error: {0}")]
    Frame(#[from] FrameError),

    /// Limit and configuration validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CanSafeError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            CanSafeError::Frame(_) => ErrorCategory::Frame,
            CanSafeError::Validation(_) => ErrorCategory::Validation,
        }
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Frame construction errors
    Frame = 0,
    /// Validation errors
    Validation = 1,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Frame => write!(f, "frame"),
            ErrorCategory::Validation => write!(f, "validation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_follows_variant() {
        let err: CanSafeError = FrameError::PayloadTooLong { len: 65, max: 64 }.into();
        assert_eq!(err.category(), ErrorCategory::Frame);

        let err: CanSafeError = ValidationError::constraint("max_rate_down < 0").into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Frame.to_string(), "frame");
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
    }
}
