//! Top-level facade crate for klasswatch.
//!
//! Re-exports core types and the agent library so users can depend on a single crate.

pub mod core {
    pub use klasswatch_core::*;
}

pub mod agent {
    pub use klasswatch_agent::*;
}
