//! Load accounting: turns start/end events into counter updates.

use std::sync::Arc;

use crate::clock::Clock;

use super::counters::LoadCounters;
use super::event::LoadEvent;

/// Folds the loader pipeline's events into the shared counters.
///
/// Both calls are non-blocking atomic updates and safe from any number of
/// concurrent loader threads. Start/end pairing per class id is the
/// caller's contract; the recorder enforces it structurally by consuming
/// the `LoadEvent` by value.
pub struct Recorder {
    counters: Arc<LoadCounters>,
    clock: Arc<dyn Clock>,
}

impl Recorder {
    pub fn new(counters: Arc<LoadCounters>, clock: Arc<dyn Clock>) -> Self {
        Self { counters, clock }
    }

    /// Counter state shared with this recorder.
    pub fn counters(&self) -> &Arc<LoadCounters> {
        &self.counters
    }

    /// Stamp the clock and mark the attempt active.
    pub fn on_load_start(&self, class_id: &str) -> LoadEvent {
        let started_at_ms = self.clock.now_ms();
        self.counters.load_begun();
        LoadEvent {
            class_id: class_id.to_owned(),
            started_at_ms,
        }
    }

    /// Fold a finished attempt into the counters.
    ///
    /// Elapsed time counts whether or not the load succeeded: failed loads
    /// consume loader time too. An end reading earlier than the start is a
    /// clock anomaly and clamps to zero elapsed rather than corrupting the
    /// accumulator.
    pub fn on_load_end(&self, event: LoadEvent, succeeded: bool) {
        let now = self.clock.now_ms();
        if now < event.started_at_ms {
            tracing::warn!(
                class_id = %event.class_id,
                started_at_ms = event.started_at_ms,
                ended_at_ms = now,
                "clock anomaly, clamping elapsed to zero"
            );
        }
        let elapsed = now.saturating_sub(event.started_at_ms);
        self.counters.add_loading_time_ms(elapsed);
        if succeeded {
            self.counters.record_loaded();
        }
        self.counters.load_done();
    }

    /// Count a class unload reported by the pipeline.
    pub fn on_unload(&self, class_id: &str) {
        tracing::trace!(class_id, "class unloaded");
        self.counters.record_unloaded();
    }
}
