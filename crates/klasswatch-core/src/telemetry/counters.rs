//! Atomic load counters and point-in-time snapshots.
//!
//! Four independent `AtomicU64` cells updated with relaxed fetch-add; safe
//! from any number of loader threads without external locking. Reads are
//! atomic per field only: a snapshot is not a cross-field consistent cut.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Aggregate class-loading counters.
///
/// Mutated exclusively through the recorder side; read-only for
/// introspection clients. Counters start at zero at construction and live
/// for the process lifetime; there is no reset operation.
#[derive(Debug, Default)]
pub struct LoadCounters {
    /// Wall time spent in load attempts (ms). Non-decreasing.
    total_loading_time_ms: AtomicU64,
    /// Successfully loaded classes (cumulative). Non-decreasing.
    loaded_classes: AtomicU64,
    /// Unloaded classes (cumulative).
    unloaded_classes: AtomicU64,
    /// Load attempts currently in flight.
    active_loads: AtomicU64,
}

impl LoadCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed load time.
    pub fn add_loading_time_ms(&self, delta_ms: u64) {
        self.total_loading_time_ms.fetch_add(delta_ms, Ordering::Relaxed);
    }

    /// Count one successful load.
    pub fn record_loaded(&self) {
        self.loaded_classes.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one unload.
    pub fn record_unloaded(&self) {
        self.unloaded_classes.fetch_add(1, Ordering::Relaxed);
    }

    /// Mark a load attempt entering the pipeline.
    pub fn load_begun(&self) {
        self.active_loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Mark a load attempt leaving the pipeline. Must pair with `load_begun`.
    pub fn load_done(&self) {
        self.active_loads.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn total_loading_time_ms(&self) -> u64 {
        self.total_loading_time_ms.load(Ordering::Relaxed)
    }

    pub fn loaded_classes(&self) -> u64 {
        self.loaded_classes.load(Ordering::Relaxed)
    }

    pub fn unloaded_classes(&self) -> u64 {
        self.unloaded_classes.load(Ordering::Relaxed)
    }

    pub fn active_loads(&self) -> u64 {
        self.active_loads.load(Ordering::Relaxed)
    }

    /// Capture all four counters.
    ///
    /// Fields may not be mutually consistent while loads are in flight;
    /// callers must not assume the four values were read at one instant.
    pub fn snapshot(&self) -> CountersSnapshot {
        CountersSnapshot {
            total_loading_time_ms: self.total_loading_time_ms.load(Ordering::Relaxed),
            loaded_class_count: self.loaded_classes.load(Ordering::Relaxed),
            unloaded_class_count: self.unloaded_classes.load(Ordering::Relaxed),
            active_load_count: self.active_loads.load(Ordering::Relaxed),
        }
    }
}

/// Immutable counter snapshot returned to callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountersSnapshot {
    pub total_loading_time_ms: u64,
    pub loaded_class_count: u64,
    pub unloaded_class_count: u64,
    pub active_load_count: u64,
}
