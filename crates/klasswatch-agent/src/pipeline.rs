//! Loader pipeline adapter: the callback surface the runtime's class-loading
//! pipeline drives.
//!
//! Pairing rules:
//! - Every `notify_load_end` must match a prior `notify_load_start` for the
//!   same class id. An unmatched end is a defect in the collaborator and is
//!   surfaced as an error with counters untouched, never swallowed.
//! - Parallel and re-entrant loads of one class id pair LIFO: the innermost
//!   end completes the latest start.

use std::sync::Arc;

use dashmap::DashMap;

use klasswatch_core::error::{KlasswatchError, Result};
use klasswatch_core::telemetry::{LoadEvent, Recorder};

/// Per-class in-flight stacks plus the recorder they fold into.
///
/// The map is sharded; loads of distinct classes never contend on a common
/// lock, and no counter update happens while a map entry is held.
pub struct LoaderPipeline {
    recorder: Arc<Recorder>,
    inflight: DashMap<String, Vec<LoadEvent>>,
    max_inflight_per_class: usize,
    trace_loads: bool,
}

impl LoaderPipeline {
    pub fn new(recorder: Arc<Recorder>, max_inflight_per_class: usize, trace_loads: bool) -> Self {
        Self {
            recorder,
            inflight: DashMap::new(),
            max_inflight_per_class,
            trace_loads,
        }
    }

    /// A class-definition attempt entered the pipeline.
    pub fn notify_load_start(&self, class_id: &str) -> Result<()> {
        let mut stack = self.inflight.entry(class_id.to_string()).or_default();
        if stack.len() >= self.max_inflight_per_class {
            return Err(KlasswatchError::InflightOverflow {
                class_id: class_id.to_string(),
                limit: self.max_inflight_per_class,
            });
        }

        if self.trace_loads {
            tracing::debug!(class_id, depth = stack.len() + 1, "load start");
        }

        let event = self.recorder.on_load_start(class_id);
        stack.push(event);
        Ok(())
    }

    /// A class-definition attempt left the pipeline.
    pub fn notify_load_end(&self, class_id: &str, success: bool) -> Result<()> {
        let event = {
            let Some(mut stack) = self.inflight.get_mut(class_id) else {
                tracing::warn!(class_id, "load end without matching start");
                return Err(KlasswatchError::UnmatchedLoadEnd {
                    class_id: class_id.to_string(),
                });
            };
            match stack.pop() {
                Some(event) => event,
                None => {
                    drop(stack);
                    tracing::warn!(class_id, "load end without matching start");
                    return Err(KlasswatchError::UnmatchedLoadEnd {
                        class_id: class_id.to_string(),
                    });
                }
            }
        };
        self.inflight.remove_if(class_id, |_, stack| stack.is_empty());

        if self.trace_loads {
            tracing::debug!(class_id, success, "load end");
        }

        self.recorder.on_load_end(event, success);
        Ok(())
    }

    /// A previously loaded class was unloaded.
    pub fn notify_unload(&self, class_id: &str) {
        self.recorder.on_unload(class_id);
    }

    /// Load attempts currently tracked, across all classes.
    pub fn inflight_total(&self) -> usize {
        self.inflight.iter().map(|e| e.value().len()).sum()
    }
}
