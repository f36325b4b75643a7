//! Pipeline behavior under real thread fan-out.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use klasswatch_core::clock::ManualClock;

use klasswatch_agent::agent_state::AgentState;
use klasswatch_agent::config;

const WORKERS: u32 = 8;
const CYCLES: u32 = 2_000;

fn state_with_manual_clock() -> (Arc<ManualClock>, AgentState) {
    let cfg =
        config::load_from_str("version: 1\nagent:\n  max_inflight_per_class: 4096\n").unwrap();
    let clock = Arc::new(ManualClock::new());
    let state = AgentState::with_clock(cfg, clock.clone()).unwrap();
    (clock, state)
}

#[test]
fn no_lost_updates_across_threads() {
    let (_clock, state) = state_with_manual_clock();

    thread::scope(|s| {
        for w in 0..WORKERS {
            let state = state.clone();
            s.spawn(move || {
                let class_id = format!("stress.Worker{w}");
                for i in 0..CYCLES {
                    state.pipeline().notify_load_start(&class_id).unwrap();
                    // every fifth attempt fails
                    state.pipeline().notify_load_end(&class_id, i % 5 != 0).unwrap();
                }
            });
        }
    });

    let snap = state.reader().snapshot();
    assert_eq!(snap.active_load_count, 0);
    assert_eq!(
        snap.loaded_class_count,
        u64::from(WORKERS) * u64::from(CYCLES) * 4 / 5
    );
    assert_eq!(state.pipeline().inflight_total(), 0);
}

#[test]
fn contended_single_class_pairs_exactly() {
    let (clock, state) = state_with_manual_clock();

    thread::scope(|s| {
        for _ in 0..WORKERS {
            let state = state.clone();
            let clock = Arc::clone(&clock);
            s.spawn(move || {
                for _ in 0..CYCLES {
                    state.pipeline().notify_load_start("stress.Shared").unwrap();
                    clock.advance(1);
                    state.pipeline().notify_load_end("stress.Shared", true).unwrap();
                }
            });
        }
    });

    let snap = state.reader().snapshot();
    assert_eq!(snap.active_load_count, 0);
    assert_eq!(snap.loaded_class_count, u64::from(WORKERS) * u64::from(CYCLES));
    assert_eq!(state.pipeline().inflight_total(), 0);
    // every cycle advanced the clock once; interleaving decides attribution,
    // but the total can never exceed the clock's travel
    assert!(snap.total_loading_time_ms <= u64::from(WORKERS) * u64::from(CYCLES));
}
