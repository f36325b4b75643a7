#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use klasswatch_agent::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
agent:
  trace_loads: false
  max_inflight: 9 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.defect_code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = "version: 1\n";
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.agent.max_inflight_per_class, 64);
    assert!(!cfg.agent.trace_loads);
    assert_eq!(cfg.harness.workers, 8);
    assert_eq!(cfg.harness.cycles_per_worker, 1000);
}

#[test]
fn version_must_be_one() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.defect_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn inflight_limit_range_checked() {
    let bad = r#"
version: 1
agent:
  max_inflight_per_class: 0
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.defect_code().as_str(), "BAD_CONFIG");
}

#[test]
fn harness_ranges_checked() {
    let bad = r#"
version: 1
harness:
  workers: 0
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.defect_code().as_str(), "BAD_CONFIG");

    let bad = r#"
version: 1
harness:
  simulated_load_ms: 5000
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.defect_code().as_str(), "BAD_CONFIG");
}
