//! Test helpers shared across crates in the workspace.
//!
//! - [`logs`] captures `tracing` output so tests can assert on the
//!   diagnostics a failure produces.
//! - [`payload`] holds a small payload type for tests that need something
//!   more realistic than `()`.

pub mod logs;
pub mod payload;
