//! Prelude module for convenient error handling imports.
//!
//! ```
//! use cansafe_errors::prelude::*;
//!
//! fn limits(max_steer: i32) -> Result<()> {
//!     validate_range!("max_steer", max_steer, 0, 4095);
//!     Ok(())
//! }
//!
//! assert!(limits(2047).is_ok());
//! assert!(limits(-1).is_err());
//! ```

pub use crate::{
    Result,
    common::{CanSafeError, ErrorCategory},
    frame::FrameError,
    validation::ValidationError,
};

pub use crate::{validate, validate_range};

/// Return early with `$error` when `$condition` does not hold.
#[macro_export]
macro_rules! validate {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err($error.into());
        }
    };
}

/// Return early with an out of range error when `$value` is outside `[$min, $max]`.
#[macro_export]
macro_rules! validate_range {
    ($field:expr, $value:expr, $min:expr, $max:expr) => {
        if $value < $min || $value > $max {
            return Err($crate::ValidationError::out_of_range($field, $value, $min, $max).into());
        }
    };
}
