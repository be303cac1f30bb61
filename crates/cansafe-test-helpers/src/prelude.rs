//! Convenience re-exports for common test utilities.

pub use crate::frames::{FrameBuilder, frame};
pub use crate::must::{must, must_some, must_with};

#[cfg(feature = "tracking")]
pub use crate::tracking::{AllocationGuard, track};

/// Return type for tests that propagate errors with `?`.
pub type TestResult = Result<(), Box<dyn std::error::Error>>;
