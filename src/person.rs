//! # Persons
//!
//! Contributors are listed once, repository-wide, in `persons.yml`:
//!
//! ```yaml
//! - name: trombik
//!   full_name: Tomoyuki Sakurai
//!   gh_id: trombik
//!   email: y@trombik.org
//! ```
//!
//! `name` is the identity that component manifests refer to under
//! `copyrights`. Every other field is optional and stays `None` when absent.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::error::{EntityKind, Error, Result};
use crate::repository::Repository;

/// One entry of `persons.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub gh_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl PersonRecord {
    /// The key persons are sorted by: the full name when present, the
    /// identity otherwise.
    pub fn display_key(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.name)
    }

    /// Byte-wise, case-sensitive comparison of display keys.
    pub fn cmp_display(&self, other: &Self) -> Ordering {
        self.display_key().cmp(other.display_key())
    }

    /// Reads `persons.yml` and returns its records sorted by display key.
    ///
    /// The sort is stable: records with equal keys keep their file order.
    pub fn load_all(repo: &Repository) -> Result<Vec<Self>> {
        let path = repo.persons_path()?;
        let mut records: Vec<Self> = repo.read_document(&path)?;
        records.sort_by(Self::cmp_display);
        Ok(records)
    }
}

/// A contributor, resolved against `persons.yml`.
pub struct Person<'r> {
    repo: &'r Repository,
    record: PersonRecord,
}

impl<'r> Person<'r> {
    /// Resolves the person whose identity is `name`.
    ///
    /// Fails with [`Error::IdentityNotFound`] when `persons.yml` has no such
    /// entry.
    pub fn new(repo: &'r Repository, name: &str) -> Result<Self> {
        let record = PersonRecord::load_all(repo)?
            .into_iter()
            .find(|record| record.name == name);

        let Some(record) = record else {
            return Err(Error::IdentityNotFound {
                kind: EntityKind::Person,
                name: name.to_string(),
                origin: repo.persons_path()?,
            });
        };
        Ok(Self { repo, record })
    }

    /// Every person, sorted by display key.
    pub fn all(repo: &'r Repository) -> Result<Vec<Self>> {
        Ok(PersonRecord::load_all(repo)?
            .into_iter()
            .map(|record| Self { repo, record })
            .collect())
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn full_name(&self) -> Option<&str> {
        self.record.full_name.as_deref()
    }

    /// GitHub account name.
    pub fn gh_id(&self) -> Option<&str> {
        self.record.gh_id.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.record.email.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.record.url.as_deref()
    }

    pub fn display_name(&self) -> &str {
        self.record.display_key()
    }

    pub fn record(&self) -> &PersonRecord {
        &self.record
    }

    /// Components whose manifest lists this person under `copyrights`, in
    /// component order.
    pub fn contributed_components(&self) -> Result<Vec<Component<'r>>> {
        let mut contributed = Vec::new();
        for component in Component::all(self.repo)? {
            if component.is_contributed_by(self.name())? {
                contributed.push(component);
            }
        }
        Ok(contributed)
    }
}

impl fmt::Debug for Person<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person")
            .field("record", &self.record)
            .finish()
    }
}
