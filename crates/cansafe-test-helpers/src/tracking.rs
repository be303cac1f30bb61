//! Allocation tracking for frame-path tests.
//!
//! Hooks run inside the gateway's frame loop and must not touch the heap.
//! A test binary installs [`TrackingAllocator`] as its global allocator and
//! wraps the code under test in a [`track`] guard:
//!
//! ```rust,ignore
//! #[global_allocator]
//! static ALLOC: cansafe_test_helpers::tracking::TrackingAllocator =
//!     cansafe_test_helpers::tracking::TrackingAllocator;
//!
//! let guard = cansafe_test_helpers::track();
//! hooks.rx(&frame);
//! cansafe_test_helpers::assert_no_alloc!(guard, "rx");
//! ```

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static ALLOCATION_COUNT: Cell<usize> = const { Cell::new(0) };
    static ALLOCATION_BYTES: Cell<usize> = const { Cell::new(0) };
    static TRACKING_ENABLED: Cell<bool> = const { Cell::new(false) };
}

/// System allocator that counts allocations on threads with tracking on.
#[derive(Debug)]
pub struct TrackingAllocator;

// SAFETY: every call is forwarded to `System` unchanged; the counters are
// thread-local `Cell`s and never allocate.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() && TRACKING_ENABLED.with(Cell::get) {
            ALLOCATION_COUNT.with(|count| count.set(count.get().saturating_add(1)));
            ALLOCATION_BYTES.with(|bytes| bytes.set(bytes.get().saturating_add(layout.size())));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() && TRACKING_ENABLED.with(Cell::get) {
            ALLOCATION_COUNT.with(|count| count.set(count.get().saturating_add(1)));
            if new_size > layout.size() {
                ALLOCATION_BYTES.with(|bytes| {
                    bytes.set(bytes.get().saturating_add(new_size - layout.size()));
                });
            }
        }
        new_ptr
    }
}

/// Scope in which allocations on the current thread are counted.
#[derive(Debug)]
pub struct AllocationGuard {
    start_count: usize,
    start_bytes: usize,
}

impl AllocationGuard {
    /// Enable tracking on this thread.
    pub fn new() -> Self {
        TRACKING_ENABLED.with(|e| e.set(true));
        Self {
            start_count: ALLOCATION_COUNT.with(Cell::get),
            start_bytes: ALLOCATION_BYTES.with(Cell::get),
        }
    }

    /// Allocations since the guard was created.
    pub fn allocations(&self) -> usize {
        ALLOCATION_COUNT.with(Cell::get).saturating_sub(self.start_count)
    }

    /// Bytes requested since the guard was created.
    pub fn bytes(&self) -> usize {
        ALLOCATION_BYTES.with(Cell::get).saturating_sub(self.start_bytes)
    }
}

impl Default for AllocationGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AllocationGuard {
    fn drop(&mut self) {
        TRACKING_ENABLED.with(|e| e.set(false));
    }
}

/// Start counting allocations on this thread.
pub fn track() -> AllocationGuard {
    AllocationGuard::new()
}

/// Panic if `guard` saw any allocation.
#[macro_export]
macro_rules! assert_no_alloc {
    ($guard:expr) => {
        $crate::assert_no_alloc!($guard, "frame path")
    };
    ($guard:expr, $context:expr) => {{
        let guard = &$guard;
        let allocs = guard.allocations();
        if allocs > 0 {
            panic!(
                "allocation in '{}': {} allocations ({} bytes) at {}:{}",
                $context,
                allocs,
                guard.bytes(),
                file!(),
                line!()
            );
        }
    }};
}
