//! `atelier` command-line front end over the scheduling engine.

pub mod cli;
pub mod command;
pub mod error;
pub mod input;
