//! Shared agent state: config compiled into the wired telemetry parts.

use std::sync::Arc;

use klasswatch_core::clock::{Clock, MonotonicClock};
use klasswatch_core::error::Result;
use klasswatch_core::telemetry::{LoadCounters, Recorder};

use crate::config::AgentConfig;
use crate::introspect::SnapshotReader;
use crate::pipeline::LoaderPipeline;

/// One telemetry subsystem instance.
///
/// Constructed per runtime instance and handed to both the loader pipeline
/// and introspection clients: explicit handles instead of a process-wide
/// registry lookup.
#[derive(Clone)]
pub struct AgentState {
    inner: Arc<AgentStateInner>,
}

struct AgentStateInner {
    cfg: AgentConfig,
    pipeline: LoaderPipeline,
    reader: SnapshotReader,
}

impl AgentState {
    /// Build agent state with the default monotonic clock.
    pub fn new(cfg: AgentConfig) -> Result<Self> {
        Self::with_clock(cfg, Arc::new(MonotonicClock::new()))
    }

    /// Build agent state around an injected clock (tests, simulation).
    pub fn with_clock(cfg: AgentConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        // Hand-built configs reach here without passing the loader.
        cfg.validate()?;

        let counters = Arc::new(LoadCounters::new());
        let recorder = Arc::new(Recorder::new(Arc::clone(&counters), clock));
        let pipeline = LoaderPipeline::new(
            recorder,
            cfg.agent.max_inflight_per_class,
            cfg.agent.trace_loads,
        );
        let reader = SnapshotReader::new(counters);

        Ok(Self {
            inner: Arc::new(AgentStateInner {
                cfg,
                pipeline,
                reader,
            }),
        })
    }

    pub fn cfg(&self) -> &AgentConfig {
        &self.inner.cfg
    }

    pub fn pipeline(&self) -> &LoaderPipeline {
        &self.inner.pipeline
    }

    pub fn reader(&self) -> &SnapshotReader {
        &self.inner.reader
    }
}
