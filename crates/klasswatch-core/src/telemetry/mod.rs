//! Telemetry primitives (counters + recorder).
//!
//! This module hosts the accounting side of the subsystem:
//! - `counters`: atomic aggregate state and point-in-time snapshots.
//! - `event`: the in-flight load handle created at start and consumed at end.
//! - `recorder`: folds start/end/unload events into the counters.
//!
//! All updates are non-blocking atomic operations: counter maintenance must
//! never serialize the host's loader threads.

pub mod counters;
pub mod event;
pub mod recorder;

pub use counters::{CountersSnapshot, LoadCounters};
pub use event::LoadEvent;
pub use recorder::Recorder;
