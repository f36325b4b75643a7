//! klasswatch agent binary.
//!
//! Loads the agent config, wires one telemetry subsystem instance, runs a
//! single load burst through the pipeline, and logs the resulting report.

use tracing_subscriber::{fmt, EnvFilter};

use klasswatch_agent::{agent_state, config, harness};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("klasswatch.yaml").expect("config load failed");
    let state = agent_state::AgentState::new(cfg).expect("agent init failed");

    tracing::info!("klasswatch-agent starting");

    let report = harness::run_burst(&state, &state.cfg().harness)
        .await
        .expect("burst failed");

    match serde_json::to_string(&report) {
        Ok(json) => tracing::info!(report = %json, "burst report"),
        Err(e) => tracing::error!(error = %e, "report encode failed"),
    }
}
