//! Centralized error types for CanSafe
//!
//! Hook decisions on the frame path never produce errors: they resolve to a
//! boolean or an optional bus. The types here cover the fallible edges around
//! that path, namely building frames from raw payloads and validating limit
//! tables that were loaded at runtime.
//!
//! - [`frame`]: CAN frame construction errors
//! - [`validation`]: limit and configuration validation errors
//! - [`common`]: the top-level [`CanSafeError`] and its classification
//!
//! # Example
//!
//! ```
//! use cansafe_errors::prelude::*;
//!
//! fn check_rate(rate: i32) -> Result<i32> {
//!     if rate <= 0 {
//!         return Err(ValidationError::out_of_range("max_rate_up", rate, 1, i32::MAX).into());
//!     }
//!     Ok(rate)
//! }
//!
//! assert!(check_rate(0).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod frame;
pub mod prelude;
pub mod validation;

pub use common::{CanSafeError, ErrorCategory};
pub use frame::FrameError;
pub use validation::ValidationError;

/// A specialized `Result` type for CanSafe operations.
pub type Result<T> = std::result::Result<T, CanSafeError>;
