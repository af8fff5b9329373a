//! # Person Command Implementation
//!
//! This module implements the `person` subcommand, which shows one
//! contributor and the components whose manifests credit them.

use anyhow::Result;
use clap::Args;

use eil::output::{emoji, heading};
use eil::person::Person;

use super::{or_dash, Context};

/// Show a contributor and the components they contributed to
#[derive(Args, Debug)]
pub struct PersonArgs {
    /// Identity of the person, as listed in persons.yml.
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Execute the `person` command.
pub fn execute(args: PersonArgs, ctx: &Context) -> Result<()> {
    let out = &ctx.out;
    let person = Person::new(&ctx.repo, &args.name).map_err(|e| ctx.explain(e))?;

    let display_name = person.display_name();
    if display_name == person.name() {
        println!("{} {}", emoji(out, "👤", "[PERSON]"), heading(out, display_name));
    } else {
        println!(
            "{} {} ({})",
            emoji(out, "👤", "[PERSON]"),
            heading(out, display_name),
            person.name()
        );
    }
    println!("  Full name: {}", or_dash(out, person.full_name()));
    println!("  GitHub:    {}", or_dash(out, person.gh_id()));
    println!("  Email:     {}", or_dash(out, person.email()));
    println!("  URL:       {}", or_dash(out, person.url()));

    let components = person
        .contributed_components()
        .map_err(|e| ctx.explain(e))?;

    println!();
    if components.is_empty() {
        println!("No contributions found.");
        return Ok(());
    }

    println!("{}", heading(out, "Contributed to"));
    for component in &components {
        println!("  {}  {}", component.name(), component.repo_url());
    }

    Ok(())
}
