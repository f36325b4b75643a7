use serde::Deserialize;

use klasswatch_core::error::{KlasswatchError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    pub version: u32,

    #[serde(default)]
    pub agent: AgentSection,

    #[serde(default)]
    pub harness: HarnessSection,
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(KlasswatchError::UnsupportedVersion);
        }

        self.agent.validate()?;
        self.harness.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSection {
    /// Per-load debug tracing (noisy; off by default).
    #[serde(default)]
    pub trace_loads: bool,

    #[serde(default = "default_max_inflight_per_class")]
    pub max_inflight_per_class: usize,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            trace_loads: false,
            max_inflight_per_class: default_max_inflight_per_class(),
        }
    }
}

impl AgentSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=4096).contains(&self.max_inflight_per_class) {
            return Err(KlasswatchError::BadConfig(
                "agent.max_inflight_per_class must be between 1 and 4096".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_inflight_per_class() -> usize {
    64
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessSection {
    #[serde(default = "default_workers")]
    pub workers: u32,

    #[serde(default = "default_cycles_per_worker")]
    pub cycles_per_worker: u32,

    #[serde(default = "default_simulated_load_ms")]
    pub simulated_load_ms: u64,

    /// Every Nth cycle is reported as a failed load; 0 disables.
    #[serde(default)]
    pub failure_every: u32,
}

impl Default for HarnessSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            cycles_per_worker: default_cycles_per_worker(),
            simulated_load_ms: default_simulated_load_ms(),
            failure_every: 0,
        }
    }
}

impl HarnessSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=1024).contains(&self.workers) {
            return Err(KlasswatchError::BadConfig(
                "harness.workers must be between 1 and 1024".into(),
            ));
        }
        if !(1..=1_000_000).contains(&self.cycles_per_worker) {
            return Err(KlasswatchError::BadConfig(
                "harness.cycles_per_worker must be between 1 and 1000000".into(),
            ));
        }
        if self.simulated_load_ms > 1000 {
            return Err(KlasswatchError::BadConfig(
                "harness.simulated_load_ms must be at most 1000".into(),
            ));
        }
        Ok(())
    }
}

fn default_workers() -> u32 {
    8
}
fn default_cycles_per_worker() -> u32 {
    1000
}
fn default_simulated_load_ms() -> u64 {
    1
}
