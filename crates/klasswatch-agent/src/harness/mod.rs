//! Stress harness: drives simulated load bursts through the pipeline.
//!
//! The redefine-one-class-in-a-loop trick used to amplify loading time lives
//! here, outside the telemetry core: the harness is just another
//! collaborator speaking the notify interface.

use serde::Serialize;
use tokio::time::Duration;

use klasswatch_core::error::{KlasswatchError, Result};
use klasswatch_core::telemetry::CountersSnapshot;

use crate::agent_state::AgentState;
use crate::config::HarnessSection;

/// Outcome of one burst run.
#[derive(Debug, Clone, Serialize)]
pub struct BurstReport {
    pub attempted: u64,
    pub succeeded: u64,
    pub failed: u64,
    /// Snapshot taken before the first worker started.
    pub before: CountersSnapshot,
    /// Snapshot taken after all workers joined. `active_load_count` is zero
    /// here; mid-burst snapshots give no such guarantee.
    pub after: CountersSnapshot,
}

/// Run `workers` concurrent loaders, each performing `cycles_per_worker`
/// load cycles against the shared pipeline.
pub async fn run_burst(state: &AgentState, cfg: &HarnessSection) -> Result<BurstReport> {
    let before = state.reader().snapshot();
    tracing::info!(
        workers = cfg.workers,
        cycles_per_worker = cfg.cycles_per_worker,
        "burst starting"
    );

    let mut tasks = Vec::with_capacity(cfg.workers as usize);
    for worker in 0..cfg.workers {
        let state = state.clone();
        let cycles = cfg.cycles_per_worker;
        let load_ms = cfg.simulated_load_ms;
        let failure_every = cfg.failure_every;

        tasks.push(tokio::spawn(async move {
            let class_id = format!("burst.Target{worker}");
            let mut succeeded = 0u64;
            for cycle in 0..cycles {
                state.pipeline().notify_load_start(&class_id)?;
                if load_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(load_ms)).await;
                }
                let success = failure_every == 0 || (cycle + 1) % failure_every != 0;
                state.pipeline().notify_load_end(&class_id, success)?;
                if success {
                    succeeded += 1;
                }
            }
            Ok::<u64, KlasswatchError>(succeeded)
        }));
    }

    let mut succeeded = 0u64;
    for task in tasks {
        succeeded += task
            .await
            .map_err(|e| KlasswatchError::Internal(format!("burst worker failed: {e}")))??;
    }

    let attempted = u64::from(cfg.workers) * u64::from(cfg.cycles_per_worker);
    let after = state.reader().snapshot();
    tracing::info!(attempted, succeeded, "burst complete");

    Ok(BurstReport {
        attempted,
        succeeded,
        failed: attempted - succeeded,
        before,
        after,
    })
}
