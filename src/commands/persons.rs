//! # Persons Command Implementation
//!
//! This module implements the `persons` subcommand, which lists every
//! contributor in `persons.yml`, sorted by full name (or by identity for
//! entries without one).

use anyhow::Result;
use clap::Args;

use eil::person::Person;

use super::{or_dash, Context, Format};

/// List known contributors
#[derive(Args, Debug)]
pub struct PersonsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

/// Execute the `persons` command.
pub fn execute(args: PersonsArgs, ctx: &Context) -> Result<()> {
    let persons = Person::all(&ctx.repo).map_err(|e| ctx.explain(e))?;

    if args.format == Format::Json {
        let records: Vec<_> = persons.iter().map(Person::record).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if persons.is_empty() {
        println!("No persons found.");
        return Ok(());
    }

    let width = persons
        .iter()
        .map(|p| p.name().len())
        .max()
        .unwrap_or_default();
    for person in &persons {
        println!(
            "{:<width$}  {}",
            person.name(),
            or_dash(&ctx.out, person.full_name()),
            width = width
        );
    }

    Ok(())
}
