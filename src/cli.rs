//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use eil::defaults::{default_root, DEFAULT_GIT_PROGRAM};
use eil::output::OutputConfig;
use eil::repository::{DefaultGitOperations, Repository};

use crate::commands::{self, Context};

/// esp-idf-lib component registry - inspect components, contributors, and groups
#[derive(Parser, Debug)]
#[command(name = "eil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Root of the esp-idf-lib checkout [default: current directory]
    #[arg(long, global = true, value_name = "DIR", env = "EIL_ROOT")]
    root: Option<PathBuf>,

    /// Program used to run `git submodule`
    #[arg(
        long,
        global = true,
        value_name = "PROGRAM",
        env = "EIL_GIT",
        default_value = DEFAULT_GIT_PROGRAM
    )]
    git: PathBuf,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List components tracked by the repository
    Components(commands::components::ComponentsArgs),

    /// Show metadata, links, and badges of a component
    Show(commands::show::ShowArgs),

    /// List known contributors
    Persons(commands::persons::PersonsArgs),

    /// Show a contributor and the components they contributed to
    Person(commands::person::PersonArgs),

    /// List component groups
    Groups(commands::groups::GroupsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let root = self.root.unwrap_or_else(default_root);
        let ctx = Context {
            repo: Repository::at(root)
                .with_git(Box::new(DefaultGitOperations::new(&self.git))),
            out: OutputConfig::from_env_and_flag(&self.color),
        };

        match self.command {
            Commands::Components(args) => commands::components::execute(args, &ctx),
            Commands::Show(args) => commands::show::execute(args, &ctx),
            Commands::Persons(args) => commands::persons::execute(args, &ctx),
            Commands::Person(args) => commands::person::execute(args, &ctx),
            Commands::Groups(args) => commands::groups::execute(args, &ctx),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Logs go to stderr. `RUST_LOG`, when set, takes precedence over
/// `--log-level`. Called once per process, from [`Cli::execute`].
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}
