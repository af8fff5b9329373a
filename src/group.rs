//! Groups: named categories listed in `groups.yml`.

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::error::Result;
use crate::repository::Repository;

/// One entry of `groups.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub description: String,
}

impl Group {
    /// Every group, in file order.
    pub fn all(repo: &Repository) -> Result<Vec<Self>> {
        let path = repo.groups_path()?;
        repo.read_document(&path)
    }

    /// Components whose manifest lists this group, sorted by identity.
    pub fn components<'r>(&self, repo: &'r Repository) -> Result<Vec<Component<'r>>> {
        let mut members = Vec::new();
        for component in Component::all(repo)? {
            if component.is_group_of(&self.name)? {
                members.push(component);
            }
        }
        Ok(members)
    }
}
