//! Read-only introspection surface for monitoring clients.

use std::sync::Arc;

use klasswatch_core::telemetry::{CountersSnapshot, LoadCounters};

/// Snapshot reader handed to external introspection clients.
///
/// Pure delegation to the shared counters: no caching, no staleness window
/// beyond the per-field atomicity of the underlying reads. Safe to call at
/// arbitrary frequency without synchronizing with the recorder side.
#[derive(Clone)]
pub struct SnapshotReader {
    counters: Arc<LoadCounters>,
}

impl SnapshotReader {
    pub fn new(counters: Arc<LoadCounters>) -> Self {
        Self { counters }
    }

    /// Milliseconds accumulated across all load attempts.
    pub fn class_loading_time_ms(&self) -> u64 {
        self.counters.total_loading_time_ms()
    }

    /// Classes loaded successfully since startup (cumulative).
    pub fn loaded_class_count(&self) -> u64 {
        self.counters.loaded_classes()
    }

    /// Classes unloaded since startup.
    pub fn unloaded_class_count(&self) -> u64 {
        self.counters.unloaded_classes()
    }

    /// Load attempts currently in flight.
    pub fn active_load_count(&self) -> u64 {
        self.counters.active_loads()
    }

    /// Classes currently live: cumulative loads minus unloads.
    ///
    /// Saturating: the two reads race with the recorder and may observe an
    /// unload ahead of the load it pairs with.
    pub fn live_class_count(&self) -> u64 {
        let snap = self.snapshot();
        snap.loaded_class_count.saturating_sub(snap.unloaded_class_count)
    }

    /// Capture all counters at once (per-field atomic).
    pub fn snapshot(&self) -> CountersSnapshot {
        self.counters.snapshot()
    }
}
