//! In-flight load event handle.

/// One class-definition attempt between its start and end notifications.
///
/// Created by `Recorder::on_load_start` and consumed by value in
/// `Recorder::on_load_end`, so completing an attempt twice is
/// unrepresentable.
#[derive(Debug)]
pub struct LoadEvent {
    /// Class identifier as reported by the loader pipeline.
    pub class_id: String,
    /// Clock reading when the attempt began (ms, monotonic).
    pub started_at_ms: u64,
}
