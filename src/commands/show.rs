//! # Show Command Implementation
//!
//! This module implements the `show` subcommand, which prints everything the
//! registry knows about one component: manifest metadata, project links, and
//! Markdown badges ready to paste into a README.

use anyhow::Result;
use clap::Args;

use eil::component::Component;
use eil::output::{emoji, heading};

use super::{or_dash, Context};

/// Show metadata, links, and badges of a component
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Name of the component (the directory name under `components/`).
    #[arg(value_name = "COMPONENT")]
    pub name: String,

    /// GitHub Actions workflow file to print a status badge for.
    ///
    /// May be given more than once.
    #[arg(short, long = "workflow", value_name = "FILE")]
    pub workflows: Vec<String>,
}

/// Execute the `show` command.
pub fn execute(args: ShowArgs, ctx: &Context) -> Result<()> {
    let out = &ctx.out;
    let component = Component::new(&ctx.repo, &args.name).map_err(|e| ctx.explain(e))?;
    let manifest = component.manifest().map_err(|e| ctx.explain(e))?;

    println!(
        "{} {} ({})",
        emoji(out, "📦", "[COMPONENT]"),
        heading(out, component.name()),
        component.fqdn()
    );
    println!("  Description:  {}", manifest.description);
    println!("  Version:      {}", manifest.version);
    println!("  Groups:       {}", manifest.groups.join(", "));
    println!("  Contributors: {}", manifest.contributors().join(", "));
    println!("  License:      {}", or_dash(out, manifest.license.as_deref()));
    if !manifest.code_owners.is_empty() {
        println!("  Code owners:  {}", manifest.code_owners.join(", "));
    }
    if !manifest.depends.is_empty() {
        println!("  Depends on:   {}", manifest.depends.join(", "));
    }
    if !manifest.targets.is_empty() {
        println!("  Targets:      {}", manifest.targets.join(", "));
    }

    println!();
    println!("{} {}", emoji(out, "🔗", "[LINKS]"), heading(out, "Links"));
    println!("  Repository:         {}", component.repo_url());
    println!("  Documentation:      {}", component.doc_url());
    println!("  Issues:             {}", component.issues_url());
    println!("  Component Registry: {}", component.esp_component_url());

    println!();
    println!("{} {}", emoji(out, "🏷️", "[BADGES]"), heading(out, "Badges"));
    for workflow in &args.workflows {
        println!("  {}", component.badge(workflow));
    }
    println!("  {}", component.badge_esp_component_registry());

    Ok(())
}
