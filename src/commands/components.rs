//! # Components Command Implementation
//!
//! This module implements the `components` subcommand, which lists every
//! component tracked as a submodule under `components/`.
//!
//! ## Functionality
//!
//! - **Listing**: One component per line, sorted by name
//! - **Group Filtering**: `--group` keeps only members of a group
//! - **Detailed Output**: `--long` adds version and description
//! - **JSON Output**: `--format json` emits the resolved metadata

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use eil::component::Component;

use super::{Context, Format};

/// List components tracked by the repository
#[derive(Args, Debug)]
pub struct ComponentsArgs {
    /// Only list components that belong to this group.
    #[arg(short, long, value_name = "GROUP")]
    pub group: Option<String>,

    /// Show version and description of each component.
    #[arg(short, long)]
    pub long: bool,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

/// Component metadata as emitted by `--format json`.
#[derive(Debug, Serialize)]
struct ComponentSummary<'a> {
    name: &'a str,
    fqdn: String,
    version: &'a str,
    description: &'a str,
    groups: &'a [String],
    contributors: Vec<&'a str>,
    code_owners: &'a [String],
    depends: &'a [String],
    repo_url: String,
    doc_url: String,
}

/// Execute the `components` command.
pub fn execute(args: ComponentsArgs, ctx: &Context) -> Result<()> {
    let mut components = Component::all(&ctx.repo).map_err(|e| ctx.explain(e))?;

    if let Some(group) = &args.group {
        let mut members = Vec::new();
        for component in components {
            if component.is_group_of(group).map_err(|e| ctx.explain(e))? {
                members.push(component);
            }
        }
        components = members;
    }

    match args.format {
        Format::Json => print_json(&components, ctx),
        Format::Text => print_text(&components, args.long, ctx),
    }
}

fn print_json(components: &[Component<'_>], ctx: &Context) -> Result<()> {
    let mut summaries = Vec::with_capacity(components.len());
    for component in components {
        let manifest = component.manifest().map_err(|e| ctx.explain(e))?;
        summaries.push(ComponentSummary {
            name: component.name(),
            fqdn: component.fqdn(),
            version: &manifest.version,
            description: &manifest.description,
            groups: &manifest.groups,
            contributors: manifest.contributors(),
            code_owners: &manifest.code_owners,
            depends: &manifest.depends,
            repo_url: component.repo_url(),
            doc_url: component.doc_url(),
        });
    }
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

fn print_text(components: &[Component<'_>], long: bool, ctx: &Context) -> Result<()> {
    if components.is_empty() {
        println!("No components found.");
        return Ok(());
    }

    if !long {
        for component in components {
            println!("{}", component.name());
        }
        return Ok(());
    }

    let width = components
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or_default();
    for component in components {
        let manifest = component.manifest().map_err(|e| ctx.explain(e))?;
        println!(
            "{:<width$}  {:<10}  {}",
            component.name(),
            manifest.version,
            manifest.description,
            width = width
        );
    }

    Ok(())
}
