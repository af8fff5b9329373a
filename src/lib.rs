//! # esp-idf-lib Component Registry
//!
//! This library resolves metadata about the components of the
//! [esp-idf-lib](https://github.com/esp-idf-lib) parent repository. Each
//! component is a git submodule under `components/`, described by a
//! `.eil.yml` manifest, and contributors are listed repository-wide in
//! `persons.yml`. The `eil` command-line tool is a thin wrapper around this
//! crate, and documentation generators can use it directly.
//!
//! ## Quick Example
//!
//! ```no_run
//! use eil::component::Component;
//! use eil::person::Person;
//! use eil::repository::Repository;
//!
//! let repo = Repository::at("/path/to/esp-idf-lib");
//!
//! for component in Component::all(&repo)? {
//!     println!("{} {}", component.fqdn(), component.version()?);
//!     println!("{}", component.badge("build.yml"));
//! }
//!
//! let trombik = Person::new(&repo, "trombik")?;
//! for component in trombik.contributed_components()? {
//!     println!("{}", component.name());
//! }
//! # Ok::<(), eil::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Repository (`repository`)**: The caller-owned context. It holds the
//!   root of the parent repository and the git and file I/O seams. Nothing
//!   in the crate reads global state.
//! - **Submodule Index (`submodule`, `git`)**: Runs `git submodule` once and
//!   parses its output into sorted component identities.
//! - **Manifests (`manifest`)**: Typed `.eil.yml` documents, loaded lazily
//!   and memoized per component.
//! - **Components (`component`)**: Validated component handles with URL
//!   builders and manifest accessors.
//! - **Persons and Groups (`person`, `group`)**: Repository-wide documents
//!   and their joins with components.
//!
//! Resolution order follows the dependencies: the root is configured first,
//! then submodules are discovered, then manifests are read on demand, and
//! finally persons are joined with the components they contributed to.

pub mod component;
pub mod defaults;
pub mod error;
pub mod git;
pub mod group;
pub mod manifest;
pub mod output;
pub mod person;
pub mod repository;
pub mod submodule;
pub mod suggestions;

#[cfg(test)]
mod git_proptest;
#[cfg(test)]
mod testing;
