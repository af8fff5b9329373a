//! # Parent Repository Context
//!
//! This module provides [`Repository`], the context object every registry
//! operation resolves against. It holds the path of the parent repository,
//! the I/O seams used to reach the outside world, and the submodule cache.
//!
//! ## Design
//!
//! Nothing in the registry reads global state. A caller builds a
//! `Repository`, configures its root, and passes it by reference to
//! [`Component`](crate::component::Component),
//! [`Person`](crate::person::Person), and [`Group`](crate::group::Group).
//! Two traits separate the resolution logic from real I/O:
//!
//! - **`GitOperations`**: runs `git submodule` for the repository root.
//! - **`FileOperations`**: reads manifests and repository-wide documents.
//!
//! `DefaultGitOperations` and `DefaultFileOperations` wrap the system `git`
//! command and `std::fs`. Tests swap in implementations that count calls or
//! return canned output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;

use crate::defaults::{
    COMPONENTS_DIR, DEFAULT_GIT_PROGRAM, GROUPS_FILENAME, MANIFEST_FILENAME, PERSONS_FILENAME,
};
use crate::error::{Error, Result};
use crate::submodule::SubmoduleIndex;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Returns the raw output of `git submodule` run in `root`.
    fn submodule_status(&self, root: &Path) -> Result<String>;
}

/// Trait for reading files - allows counting and faking reads in tests
pub trait FileOperations: Send + Sync {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The default implementation of `GitOperations`, which runs a real `git`
/// program.
pub struct DefaultGitOperations {
    program: PathBuf,
}

impl DefaultGitOperations {
    /// Use `program` instead of the `git` found on `PATH`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for DefaultGitOperations {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_PROGRAM)
    }
}

impl GitOperations for DefaultGitOperations {
    fn submodule_status(&self, root: &Path) -> Result<String> {
        crate::git::submodule_status(&self.program, root)
    }
}

/// The default implementation of `FileOperations`, backed by `std::fs`.
pub struct DefaultFileOperations;

impl FileOperations for DefaultFileOperations {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// The parent repository that tracks every component as a submodule.
pub struct Repository {
    root: Option<PathBuf>,
    files: Box<dyn FileOperations>,
    submodules: SubmoduleIndex,
}

impl Repository {
    /// Creates a repository context whose root is not configured yet.
    ///
    /// Every path-dependent operation fails with
    /// [`Error::RootNotConfigured`] until [`Repository::set_root`] is called.
    pub fn new() -> Self {
        Self {
            root: None,
            files: Box::new(DefaultFileOperations),
            submodules: SubmoduleIndex::new(Box::new(DefaultGitOperations::default())),
        }
    }

    /// Creates a repository context rooted at `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let mut repo = Self::new();
        repo.set_root(root);
        repo
    }

    /// Replaces the git implementation. Any cached submodule output is
    /// discarded.
    pub fn with_git(mut self, git_ops: Box<dyn GitOperations>) -> Self {
        self.submodules = SubmoduleIndex::new(git_ops);
        self
    }

    /// Replaces the file reading implementation.
    pub fn with_files(mut self, file_ops: Box<dyn FileOperations>) -> Self {
        self.files = file_ops;
        self
    }

    /// Sets or changes the repository root.
    ///
    /// Cached submodule output belongs to the previous root and is dropped.
    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        self.root = Some(root.into());
        self.submodules.invalidate();
    }

    /// The configured repository root.
    pub fn root(&self) -> Result<&Path> {
        self.root.as_deref().ok_or(Error::RootNotConfigured)
    }

    pub fn components_dir(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(COMPONENTS_DIR))
    }

    /// Directory of the component named `name`.
    pub fn component_dir(&self, name: &str) -> Result<PathBuf> {
        Ok(self.components_dir()?.join(name))
    }

    /// Path of the manifest of the component named `name`.
    pub fn manifest_path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.component_dir(name)?.join(MANIFEST_FILENAME))
    }

    pub fn persons_path(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(PERSONS_FILENAME))
    }

    pub fn groups_path(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(GROUPS_FILENAME))
    }

    /// The submodule index of this repository.
    pub fn submodules(&self) -> &SubmoduleIndex {
        &self.submodules
    }

    /// Sorted identities of every component tracked by this repository.
    pub fn component_identities(&self) -> Result<Vec<String>> {
        self.submodules.discover(self.root()?)
    }

    pub(crate) fn files(&self) -> &dyn FileOperations {
        self.files.as_ref()
    }

    /// Reads and deserializes a repository-wide YAML document.
    ///
    /// Both a missing file and a document that does not match `T` are
    /// reported as [`Error::DocumentLoad`] naming `path`.
    pub fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        debug!("loading document {}", path.display());
        let content = self
            .files
            .read_to_string(path)
            .map_err(|e| Error::DocumentLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        serde_yaml::from_str(&content).map_err(|e| Error::DocumentLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
