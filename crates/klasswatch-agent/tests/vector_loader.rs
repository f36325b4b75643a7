//! JSON test vector loader shared by pipeline tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub steps: Vec<Step>,
    #[serde(default)]
    pub expect: Option<ExpectCounters>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

/// One scripted pipeline event.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Start { class: String },
    End { class: String, success: bool },
    Unload { class: String },
    Advance { ms: u64 },
}

#[derive(Debug, Deserialize)]
pub struct ExpectCounters {
    pub total_loading_time_ms: u64,
    pub loaded_class_count: u64,
    pub unloaded_class_count: u64,
    pub active_load_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}
