//! Shared test utilities for integration and E2E tests.
//!
//! [`TestFixture`] lays out a small esp-idf-lib checkout in a temporary
//! directory (two components, `persons.yml`, `groups.yml`) together with a
//! stub `git` script that prints canned `git submodule` output. Tests point
//! the library or the `eil` binary at both.
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! #[serial]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.command().arg("components").assert().success();
//! }
//! ```
//!
//! Tests that write the stub script should run under `#[serial]`: executing
//! a file while another thread still holds it open for writing fails with
//! `ETXTBSY`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;
    #[allow(unused_imports)]
    pub use serial_test::serial;

    #[allow(unused_imports)]
    pub use super::fixtures;
    pub use super::TestFixture;
}

/// File contents of the fixture repository.
#[allow(dead_code)]
pub mod fixtures {
    pub const SUBMODULES: &str = "\
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
}

/// A temporary esp-idf-lib checkout plus a stub `git`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    tools_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create the fixture repository with the default submodule listing.
    pub fn new() -> Self {
        let fixture = Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            tools_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        };
        fixture
            .with_file("components/aht/.eil.yml", fixtures::AHT_MANIFEST)
            .with_file(
                "components/esp_idf_lib_helpers/.eil.yml",
                fixtures::HELPERS_MANIFEST,
            )
            .with_file("persons.yml", fixtures::PERSONS)
            .with_file("groups.yml", fixtures::GROUPS)
            .with_submodules(fixtures::SUBMODULES)
    }

    /// Make the stub `git submodule` print `output`.
    ///
    /// Every invocation appends a line to [`TestFixture::git_calls`].
    pub fn with_submodules(self, output: &str) -> Self {
        let mut output = output.to_string();
        if !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }
        let script = format!(
            "#!/bin/sh\n\
             echo \"$*\" >> \"{calls}\"\n\
             if [ \"$1\" != \"submodule\" ]; then\n\
             \techo \"unexpected arguments: $*\" >&2\n\
             \texit 2\n\
             fi\n\
             cat <<'EOF'\n{output}EOF\n",
            calls = self.calls_path().display(),
            output = output,
        );
        self.write_stub(&script);
        self
    }

    /// Make the stub `git` fail like it does outside a repository.
    pub fn with_failing_git(self, stderr: &str) -> Self {
        let script = format!(
            "#!/bin/sh\n\
             echo \"$*\" >> \"{calls}\"\n\
             echo \"{stderr}\" >&2\n\
             exit 128\n",
            calls = self.calls_path().display(),
            stderr = stderr,
        );
        self.write_stub(&script);
        self
    }

    /// Add or replace a file in the repository.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Delete a file from the repository.
    pub fn without_file(self, path: &str) -> Self {
        fs::remove_file(self.temp_dir.path().join(path)).expect("Failed to remove file");
        self
    }

    /// Root of the fixture repository.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A file or directory inside the repository.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Path of the stub `git` program.
    pub fn git_path(&self) -> PathBuf {
        self.tools_dir.path().join("git")
    }

    /// How many times the stub `git` has been invoked.
    pub fn git_calls(&self) -> usize {
        fs::read_to_string(self.calls_path())
            .map(|calls| calls.lines().count())
            .unwrap_or(0)
    }

    /// An `eil` command configured for this fixture through the environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("eil");
        cmd.env("EIL_ROOT", self.path())
            .env("EIL_GIT", self.git_path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    fn calls_path(&self) -> PathBuf {
        self.tools_dir.path().join("git.calls")
    }

    fn write_stub(&self, script: &str) {
        let path = self.git_path();
        fs::write(&path, script).expect("Failed to write stub git");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub git executable");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
