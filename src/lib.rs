#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Thin wrappers around the MCP inspector CLI.
//!
//! Both tools share one pipeline: scan and parse the wrapper flags, build the
//! inspector's argument vector, then run it with inherited stdio and pass its
//! exit code through.

pub mod builder;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod invocation;
pub mod logging;
pub mod runner;

pub use config::RunnerConfig;
pub use errors::WrapperError;
