//! The submodule index: component discovery from `git submodule`.
//!
//! The external command runs at most once per index. Its raw output is kept
//! after the first successful run and every later query parses the cached
//! text. A failed run caches nothing, so the next query tries again.

use std::cell::OnceCell;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::git::{self, SubmoduleRecord};
use crate::repository::GitOperations;

pub struct SubmoduleIndex {
    git_ops: Box<dyn GitOperations>,
    output: OnceCell<String>,
}

impl SubmoduleIndex {
    pub fn new(git_ops: Box<dyn GitOperations>) -> Self {
        Self {
            git_ops,
            output: OnceCell::new(),
        }
    }

    /// Raw `git submodule` output for `root`, running the command only if
    /// nothing is cached yet.
    pub fn raw(&self, root: &Path) -> Result<&str> {
        if let Some(output) = self.output.get() {
            debug!("using cached submodule list");
            return Ok(output);
        }

        let output = self.git_ops.submodule_status(root)?;
        Ok(self.output.get_or_init(|| output))
    }

    /// Sorted, de-duplicated component identities.
    pub fn discover(&self, root: &Path) -> Result<Vec<String>> {
        Ok(git::component_identities(self.raw(root)?))
    }

    /// Every parsed submodule line, including submodules outside
    /// `components/`, in output order.
    pub fn records(&self, root: &Path) -> Result<Vec<SubmoduleRecord>> {
        Ok(git::parse_submodule_status(self.raw(root)?))
    }

    /// Whether `identity` names a discovered component.
    pub fn contains(&self, root: &Path, identity: &str) -> Result<bool> {
        let identities = self.discover(root)?;
        Ok(identities
            .binary_search_by(|probe| probe.as_str().cmp(identity))
            .is_ok())
    }

    pub fn is_cached(&self) -> bool {
        self.output.get().is_some()
    }

    /// Drops the cached output; the next query runs the command again.
    pub fn invalidate(&mut self) {
        self.output.take();
    }
}
