//! strictjson CLI library.
//!
//! Provides input discovery, configuration loading and the command
//! implementations behind the `strictjson` binary.

pub mod commands;
pub mod config;
pub mod input;
