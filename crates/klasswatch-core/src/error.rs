//! Shared error type across klasswatch crates.

use thiserror::Error;

/// Stable defect codes reported to monitoring clients (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectCode {
    /// Load end reported without a matching start.
    UnmatchedEnd,
    /// Too many in-flight loads for one class id.
    InflightOverflow,
    /// Invalid or malformed configuration.
    BadConfig,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl DefectCode {
    /// String representation used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            DefectCode::UnmatchedEnd => "UNMATCHED_END",
            DefectCode::InflightOverflow => "INFLIGHT_OVERFLOW",
            DefectCode::BadConfig => "BAD_CONFIG",
            DefectCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            DefectCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, KlasswatchError>;

/// Unified error type used by core and agent.
#[derive(Debug, Error)]
pub enum KlasswatchError {
    #[error("load end without matching start: {class_id}")]
    UnmatchedLoadEnd { class_id: String },
    #[error("in-flight load limit {limit} exceeded for class: {class_id}")]
    InflightOverflow { class_id: String, limit: usize },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl KlasswatchError {
    /// Map internal error to a stable defect code.
    pub fn defect_code(&self) -> DefectCode {
        match self {
            KlasswatchError::UnmatchedLoadEnd { .. } => DefectCode::UnmatchedEnd,
            KlasswatchError::InflightOverflow { .. } => DefectCode::InflightOverflow,
            KlasswatchError::BadConfig(_) => DefectCode::BadConfig,
            KlasswatchError::UnsupportedVersion => DefectCode::UnsupportedVersion,
            KlasswatchError::Internal(_) => DefectCode::Internal,
        }
    }
}
