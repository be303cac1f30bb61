//! Shared test utilities for CanSafe.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with `#[track_caller]` panic locations
//! - [`frames`] - Frame builders for hook tests
//! - [`tracking`] - Allocation tracking for frame-path tests
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! cansafe-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use cansafe_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test support code panics on purpose"
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod frames;
pub mod must;
pub mod prelude;

#[cfg(feature = "tracking")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracking")))]
pub mod tracking;

#[cfg(all(test, feature = "tracking"))]
#[global_allocator]
static GLOBAL_TEST: tracking::TrackingAllocator = tracking::TrackingAllocator;

pub use must::*;

#[cfg(feature = "tracking")]
pub use tracking::track;
