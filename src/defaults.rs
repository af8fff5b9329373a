//! Default values and fixed names for the registry.
//!
//! This module centralizes the file names, path prefixes, and URL constants
//! used across the library and the CLI, ensuring consistency and avoiding
//! duplication.

use std::path::PathBuf;

/// The GitHub organization that owns every component repository.
pub const ORG: &str = "esp-idf-lib";

pub const GITHUB_URL: &str = "https://github.com";

pub const GITHUB_PAGES_URL: &str = "https://esp-idf-lib.github.io";

pub const ESP_COMPONENT_REGISTRY_URL: &str = "https://components.espressif.com";

/// Submodule paths below this prefix are components; everything else tracked
/// by `git submodule` is ignored.
pub const COMPONENTS_PREFIX: &str = "components/";

/// Directory, relative to the repository root, holding component checkouts.
pub const COMPONENTS_DIR: &str = "components";

/// Name of the per-component manifest.
pub const MANIFEST_FILENAME: &str = ".eil.yml";

/// Repository-wide list of contributors.
pub const PERSONS_FILENAME: &str = "persons.yml";

/// Repository-wide list of groups.
pub const GROUPS_FILENAME: &str = "groups.yml";

/// Program invoked for submodule discovery unless overridden.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Returns the default repository root.
///
/// This is the relaxed configuration used by the CLI: when neither `--root`
/// nor `EIL_ROOT` is given, the current directory is the parent repository.
pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}
