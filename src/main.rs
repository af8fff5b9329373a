//! # eil CLI
//!
//! This is the binary entry point for the `eil` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level errors and reporting them with hints.
//!
//! The registry logic lives in the `eil` library crate; the binary only
//! formats what the library resolves.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
