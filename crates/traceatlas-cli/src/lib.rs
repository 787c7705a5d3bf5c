//! Traceatlas CLI library.
//!
//! This library provides the core functionality for the `traceatlas`
//! command-line interface: configuration, the convert/validate/inspect
//! commands, JSON document writing and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod documents;
pub mod error;
pub mod output;

pub use cli::{Cli, Command, ConvertArgs};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
