//! Atelier - integration test support.
//!
//! Re-exports the workspace crates and provides fixtures shared by the
//! integration tests.

pub use atelier_app as app;
pub use atelier_core as core;
pub use atelier_schedule as schedule;

pub mod fixtures;
