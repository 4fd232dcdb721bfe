//! Shared building blocks for the Atelier workspace: configuration, errors
//! and constants that do not depend on the scheduling engine.

pub mod config;
pub mod constants;
pub mod error;
