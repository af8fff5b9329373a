//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `eil`
//! command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the shared
//!   [`Context`] and prints what the `eil` library resolves.
//!
//! All commands are read-only.

pub mod completions;
pub mod components;
pub mod groups;
pub mod person;
pub mod persons;
pub mod show;

use clap::ValueEnum;

use eil::output::OutputConfig;
use eil::repository::Repository;

/// State shared by every command.
pub struct Context {
    pub repo: Repository,
    pub out: OutputConfig,
}

impl Context {
    /// Converts a library error into a CLI error with hints.
    pub fn explain(&self, error: eil::error::Error) -> anyhow::Error {
        eil::suggestions::explain(error, &self.repo)
    }
}

/// Output format of listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human readable text
    #[default]
    Text,
    /// JSON, for scripts and documentation generators
    Json,
}

/// Renders an optional value, using a dimmed dash when absent.
pub fn or_dash(out: &OutputConfig, value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => eil::output::dim(out, "-"),
    }
}
