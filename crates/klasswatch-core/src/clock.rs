//! Monotonic time sources.
//!
//! The recorder takes its clock as an injected trait object, so hosts and
//! tests control time explicitly instead of reaching for ambient global
//! state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Monotonic clock with millisecond resolution.
pub trait Clock: Send + Sync {
    /// Milliseconds since the clock's origin. Must never decrease.
    fn now_ms(&self) -> u64;
}

/// Clock backed by `std::time::Instant`; origin is construction time.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Manually driven clock for tests and simulated bursts.
///
/// `set` may move the reading backwards; the recorder clamps negative
/// elapsed time, and tests use this to exercise that path.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now_ms: AtomicU64::new(0),
        }
    }

    /// Advance the reading by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.fetch_add(delta_ms, Ordering::Relaxed);
    }

    /// Jump to an absolute reading.
    pub fn set(&self, ms: u64) {
        self.now_ms.store(ms, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::Relaxed)
    }
}
