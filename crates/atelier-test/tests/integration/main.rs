//! Integration tests for the scheduling engine and the `atelier` front end.

mod cli;
mod export;
mod properties;
mod scenarios;
