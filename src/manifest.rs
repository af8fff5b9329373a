//! # Component Manifests
//!
//! Every component carries a `.eil.yml` file describing it:
//!
//! ```yaml
//! name: aht
//! description: Driver for AHT10/AHT15/AHT20 temperature and humidity sensor
//! version: 1.0.0
//! groups:
//!   - temperature
//!   - humidity
//! copyrights:
//!   - name: UncleRus
//! license: BSD-3
//! code_owners:
//!   - trombik
//! depends:
//!   - i2cdev
//! ```
//!
//! [`Manifest`] is the typed form of that document. `description`,
//! `version`, `groups`, and `copyrights` are required; a manifest missing
//! any of them fails to load instead of failing later at lookup time.
//!
//! [`ManifestStore`] loads a manifest lazily and keeps it until cleared.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::repository::FileOperations;

/// A copyright holder listed in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copyright {
    /// Identity of the contributor, the key used in `persons.yml`.
    pub name: String,
}

/// The typed contents of a `.eil.yml` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    pub description: String,
    pub version: String,
    pub groups: Vec<String>,
    pub copyrights: Vec<Copyright>,
    #[serde(default)]
    pub license: Option<String>,
    /// Maintainers responsible for reviewing changes.
    #[serde(default)]
    pub code_owners: Vec<String>,
    /// ESP-IDF or esp-idf-lib components this one requires.
    #[serde(default)]
    pub depends: Vec<String>,
    /// Chips the component is known to work on.
    #[serde(default)]
    pub targets: Vec<String>,
}

impl Manifest {
    /// Parse a manifest from YAML text.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Names of everyone listed under `copyrights`, in document order.
    pub fn contributors(&self) -> Vec<&str> {
        self.copyrights.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn is_group_of(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    pub fn is_contributed_by(&self, person: &str) -> bool {
        self.copyrights.iter().any(|c| c.name == person)
    }
}

/// Lazily loaded, memoized manifest of one component.
#[derive(Debug)]
pub struct ManifestStore {
    path: PathBuf,
    manifest: OnceCell<Manifest>,
}

impl ManifestStore {
    /// A store for the manifest at `path`. Nothing is read until the first
    /// call to [`ManifestStore::get`].
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            manifest: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the manifest, reading it through `files` on first use.
    ///
    /// A failed read or parse is returned as [`Error::ManifestLoad`] and
    /// nothing is memoized, so the next call reads again.
    pub fn get(&self, files: &dyn FileOperations) -> Result<&Manifest> {
        if let Some(manifest) = self.manifest.get() {
            return Ok(manifest);
        }

        debug!("loading manifest {}", self.path.display());
        let content = files
            .read_to_string(&self.path)
            .map_err(|e| self.load_error(e.to_string()))?;
        let manifest = Manifest::parse(&content).map_err(|e| self.load_error(e.to_string()))?;

        Ok(self.manifest.get_or_init(|| manifest))
    }

    pub fn is_loaded(&self) -> bool {
        self.manifest.get().is_some()
    }

    /// Forgets the loaded manifest. The file is read again on next access.
    pub fn clear(&mut self) {
        self.manifest.take();
    }

    fn load_error(&self, message: String) -> Error {
        Error::ManifestLoad {
            path: self.path.clone(),
            message,
        }
    }
}
