//! # Completions Command Implementation
//!
//! Prints a shell completion script for `eil`, generated by `clap_complete`.
//!
//! ```bash
//! eil completions bash > ~/.local/share/bash-completion/completions/eil
//! eil completions zsh > ~/.zfunc/_eil
//! ```

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "eil", &mut io::stdout());
    Ok(())
}
