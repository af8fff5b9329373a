//! # Error Suggestions
//!
//! Turns registry errors into messages that say what went wrong and how to
//! fix it. The CLI passes every library error through [`explain`] before
//! reporting it.
//!
//! ```rust,ignore
//! let component = Component::new(&repo, name)
//!     .map_err(|e| suggestions::explain(e, &repo))?;
//! ```

use std::path::Path;

use crate::error::{EntityKind, Error};
use crate::person::PersonRecord;
use crate::repository::Repository;

/// Generate an error for a repository root that was never configured.
pub fn root_not_configured() -> anyhow::Error {
    anyhow::anyhow!(
        "Repository root is not configured\n\n\
         hint: Use --root to point at an esp-idf-lib checkout\n\
         hint: Set the EIL_ROOT environment variable"
    )
}

/// Generate an error for a failed `git submodule` run.
pub fn git_failed(command: &str, stderr: &str, root: Option<&Path>) -> anyhow::Error {
    let location = root
        .map(|r| format!(" in {}", r.display()))
        .unwrap_or_default();
    anyhow::anyhow!(
        "`{command}` failed{location}: {stderr}\n\n\
         hint: Make sure --root points at a git checkout of esp-idf-lib\n\
         hint: Use --git or EIL_GIT if git is not on PATH"
    )
}

/// Generate an error for an unknown component or person, suggesting a
/// close match from `known` when there is one.
pub fn unknown_identity(kind: EntityKind, name: &str, known: &[&str]) -> anyhow::Error {
    let did_you_mean = find_similar(name, known)
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();
    let list_command = match kind {
        EntityKind::Component => "eil components",
        EntityKind::Person => "eil persons",
    };

    anyhow::anyhow!(
        "Unknown {kind}: {name}{did_you_mean}\n\n\
         hint: Run '{list_command}' to see every known {kind}"
    )
}

/// Attach hints to a registry error.
///
/// For unknown identities the candidates are looked up in `repo`; if that
/// lookup fails too, the message is returned without a suggestion.
pub fn explain(error: Error, repo: &Repository) -> anyhow::Error {
    match error {
        Error::RootNotConfigured => root_not_configured(),
        Error::ExternalTool { command, stderr } => {
            git_failed(&command, &stderr, repo.root().ok())
        }
        Error::IdentityNotFound { kind, name, .. } => {
            let known: Vec<String> = match kind {
                EntityKind::Component => repo.component_identities().unwrap_or_default(),
                EntityKind::Person => PersonRecord::load_all(repo)
                    .map(|records| records.into_iter().map(|r| r.name).collect())
                    .unwrap_or_default(),
            };
            let known: Vec<&str> = known.iter().map(String::as_str).collect();
            unknown_identity(kind, &name, &known)
        }
        other => anyhow::Error::new(other),
    }
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(&input.to_lowercase(), &candidate.to_lowercase());
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single rolling row of the distance matrix.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }

    row[b.len()]
}
