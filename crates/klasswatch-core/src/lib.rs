//! klasswatch core: runtime-agnostic class-loading telemetry primitives.
//!
//! This crate defines the counter state, the load recorder, and the clock
//! seam shared by the agent and by embedders that wire the subsystem into a
//! runtime directly. It intentionally carries no async-runtime or transport
//! dependencies so it can be called from loader threads of any host.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `KlasswatchError`/`Result` so a
//! telemetry defect can never take down the host runtime.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod telemetry;

/// Shared result type.
pub use error::{KlasswatchError, Result};
