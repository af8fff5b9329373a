//! # Error Handling
//!
//! This module defines the centralized error type for the registry. It uses
//! the `thiserror` library to describe every failure mode of the resolution
//! layer with enough context to act on it.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum covering all failures:
//!   - the repository root was read before being configured,
//!   - the `git submodule` subprocess could not run or exited non-zero,
//!   - an unknown component or person was requested,
//!   - a component manifest or a repository-wide document failed to load.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! None of the operations substitute a default for a missing identity or a
//! missing manifest; the error is always returned to the caller, and caches
//! are left empty so that a later call can retry.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The kind of entity an identity lookup was performed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Component,
    Person,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Component => f.write_str("component"),
            EntityKind::Person => f.write_str("person"),
        }
    }
}

/// Main error type for registry operations
#[derive(Error, Debug)]
pub enum Error {
    /// The repository root was needed but has not been set.
    #[error("Repository root is not configured")]
    RootNotConfigured,

    /// The external discovery command failed to start or exited with a
    /// non-zero status. `stderr` holds the captured diagnostics.
    #[error("External command `{command}` failed: {stderr}")]
    ExternalTool { command: String, stderr: String },

    /// A component or person identity is unknown.
    ///
    /// `origin` names where the identity was looked up (the submodule list
    /// of a repository, or a persons file).
    #[error("Cannot find {kind} '{name}' in {}", origin.display())]
    IdentityNotFound {
        kind: EntityKind,
        name: String,
        origin: PathBuf,
    },

    /// A component manifest is missing, malformed, or lacks a required key.
    #[error("Failed to load manifest {}: {message}", path.display())]
    ManifestLoad { path: PathBuf, message: String },

    /// A repository-wide document (persons or groups) failed to load.
    #[error("Failed to load document {}: {message}", path.display())]
    DocumentLoad { path: PathBuf, message: String },
}

impl Error {
    /// Returns `true` for unknown-identity errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::IdentityNotFound { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
