//! Shared fixtures and mock I/O for unit tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::error::{Error, Result};
use crate::repository::{FileOperations, GitOperations, Repository};

pub const FIXTURE_SUBMODULES: &str = "\
 8d5a3c1f0e2b4a6c8e0f1a3b5c7d9e1f3a5b7c9d components/esp_idf_lib_helpers (1.2.0)
 1d24b0da13e9c0aae9ad985e4348d2fe50263e3c components/aht (1.0.0-1-g1d24b0d)
 5f4e3d2c1b0a99887766554433221100ffeeddcc devtools/scripts (v2.0.0)
";

pub const AHT_MANIFEST: &str = r#"---
name: aht
description: Driver for AHT10/AHT15/AHT20 temperature and humidity sensor
version: 1.0.0
groups:
  - temperature
  - humidity
copyrights:
  - name: UncleRus
license: BSD-3
code_owners:
  - UncleRus
depends:
  - i2cdev
  - esp_idf_lib_helpers
targets:
  - esp32
  - esp8266
"#;

pub const HELPERS_MANIFEST: &str = r#"---
name: esp_idf_lib_helpers
description: Common support library for esp-idf-lib
version: 1.2.0
groups:
  - common
copyrights:
  - name: trombik
  - name: UncleRus
license: ISC
"#;

pub const PERSONS: &str = r#"---
- name: trombik
  full_name: Tomoyuki Sakurai
  gh_id: trombik
  email: y@trombik.org
- name: jdoe
- name: UncleRus
  full_name: Ruslan V. Uss
  gh_id: UncleRus
  email: unclerus@gmail.com
"#;

pub const GROUPS: &str = r#"---
- name: common
  description: Common libraries
- name: temperature
  description: Temperature sensors
- name: humidity
  description: Humidity sensors
"#;

/// Shared call counter that outlives the mock it was taken from.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Git mock returning canned `git submodule` output.
pub struct MockGitOperations {
    calls: CallCounter,
    failures: Mutex<Vec<String>>,
    output: String,
}

impl MockGitOperations {
    pub fn new(output: &str) -> Self {
        Self {
            calls: CallCounter::default(),
            failures: Mutex::new(Vec::new()),
            output: output.to_string(),
        }
    }

    /// Fails with `stderr` on the first call, then returns `output`.
    pub fn failing_once(stderr: &str, output: &str) -> Self {
        let mock = Self::new(output);
        mock.failures.lock().unwrap().push(stderr.to_string());
        mock
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl GitOperations for MockGitOperations {
    fn submodule_status(&self, _root: &Path) -> Result<String> {
        self.calls.bump();
        if let Some(stderr) = self.failures.lock().unwrap().pop() {
            return Err(Error::ExternalTool {
                command: "git submodule".to_string(),
                stderr,
            });
        }
        Ok(self.output.clone())
    }
}

/// File reader that counts reads. Serves from memory, or from disk when
/// built with [`CountingFileOperations::on_disk`].
pub struct CountingFileOperations {
    reads: CallCounter,
    files: Option<HashMap<PathBuf, String>>,
}

impl CountingFileOperations {
    pub fn empty() -> Self {
        Self {
            reads: CallCounter::default(),
            files: Some(HashMap::new()),
        }
    }

    pub fn with_file(path: &str, content: &str) -> Self {
        let mut files = HashMap::new();
        files.insert(PathBuf::from(path), content.to_string());
        Self {
            reads: CallCounter::default(),
            files: Some(files),
        }
    }

    pub fn on_disk() -> Self {
        Self {
            reads: CallCounter::default(),
            files: None,
        }
    }

    pub fn reads(&self) -> CallCounter {
        self.reads.clone()
    }
}

impl FileOperations for CountingFileOperations {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.reads.bump();
        match &self.files {
            Some(files) => files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file")),
            None => fs::read_to_string(path),
        }
    }
}

/// Writes the fixture parent repository into a temporary directory.
pub fn write_fixture(root: &Path) {
    let write = |relative: &str, content: &str| {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    };
    write("components/aht/.eil.yml", AHT_MANIFEST);
    write("components/esp_idf_lib_helpers/.eil.yml", HELPERS_MANIFEST);
    write("persons.yml", PERSONS);
    write("groups.yml", GROUPS);
}

/// A fixture repository on disk with mocked `git submodule` output.
pub fn fixture_repository() -> (TempDir, Repository) {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());
    let repo = Repository::at(dir.path())
        .with_git(Box::new(MockGitOperations::new(FIXTURE_SUBMODULES)));
    (dir, repo)
}

/// Like [`fixture_repository`], also returning a counter of file reads.
pub fn counted_fixture_repository() -> (TempDir, Repository, CallCounter) {
    let (dir, repo) = fixture_repository();
    let files = CountingFileOperations::on_disk();
    let reads = files.reads();
    (dir, repo.with_files(Box::new(files)), reads)
}
