//! ClaimOrder CLI library.
//!
//! This library provides the frontend for the claim ordering engine, including
//! configuration management, the interactive REPL, batch ordering from JSON
//! files and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
