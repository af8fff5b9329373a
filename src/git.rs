use std::collections::BTreeSet;
use std::path::Path;
use std::process::Command;

use log::{debug, warn};

use crate::defaults::COMPONENTS_PREFIX;
use crate::error::{Error, Result};

/// Status marker git prints in front of the commit of a submodule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmoduleStatus {
    /// The checked-out commit matches the index.
    InSync,
    /// `-`: the submodule is not initialized.
    Uninitialized,
    /// `+`: the checked-out commit differs from the one in the index.
    Modified,
    /// `U`: the submodule has merge conflicts.
    Conflicted,
}

/// One parsed line of `git submodule` output.
///
/// ```text
/// 1d24b0da13e9c0aae9ad985e4348d2fe50263e3c components/tda74xx (1.0.3-2-g1d24b0d)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmoduleRecord {
    pub status: SubmoduleStatus,
    pub commit: String,
    pub path: String,
    /// The `git describe` output shown in parentheses, if any.
    pub descriptor: Option<String>,
}

impl SubmoduleRecord {
    /// Parse a single line. Returns `None` for lines without a path field.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let first = fields.next()?;
        let path = fields.next()?;

        let (status, commit) = match first.chars().next() {
            Some('-') => (SubmoduleStatus::Uninitialized, &first[1..]),
            Some('+') => (SubmoduleStatus::Modified, &first[1..]),
            Some('U') => (SubmoduleStatus::Conflicted, &first[1..]),
            _ => (SubmoduleStatus::InSync, first),
        };

        let rest: Vec<&str> = fields.collect();
        let descriptor = if rest.is_empty() {
            None
        } else {
            let joined = rest.join(" ");
            Some(
                joined
                    .trim_start_matches('(')
                    .trim_end_matches(')')
                    .to_string(),
            )
        };

        Some(Self {
            status,
            commit: commit.to_string(),
            path: path.to_string(),
            descriptor,
        })
    }

    /// The component identity, or `None` when the submodule lives outside
    /// `components/`.
    pub fn identity(&self) -> Option<&str> {
        self.path
            .strip_prefix(COMPONENTS_PREFIX)
            .filter(|name| !name.is_empty())
    }
}

/// Run `<program> submodule` in `root` and return its standard output.
///
/// A non-zero exit, or a failure to start the program at all, is reported
/// as [`Error::ExternalTool`] with the captured standard error.
pub fn submodule_status(program: &Path, root: &Path) -> Result<String> {
    let command = format!("{} submodule", program.display());
    debug!("running `{}` in {}", command, root.display());

    let output = Command::new(program)
        .arg("submodule")
        .current_dir(root)
        .output()
        .map_err(|e| Error::ExternalTool {
            command: command.clone(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::ExternalTool {
            command,
            stderr: stderr.trim_end().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse every non-empty line of `git submodule` output.
pub fn parse_submodule_status(output: &str) -> Vec<SubmoduleRecord> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let record = SubmoduleRecord::parse(line);
            if record.is_none() {
                warn!("ignoring unparsable submodule line: {:?}", line);
            }
            record
        })
        .collect()
}

/// Extract the sorted, de-duplicated component identities from
/// `git submodule` output.
pub fn component_identities(output: &str) -> Vec<String> {
    parse_submodule_status(output)
        .iter()
        .filter_map(|record| record.identity())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
