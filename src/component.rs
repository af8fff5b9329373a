//! # Components
//!
//! A [`Component`] is one driver repository tracked as a submodule under
//! `components/`. Components are only ever handed out after their identity
//! has been checked against the submodule index, so holding a `Component`
//! means the identity is known to the parent repository.
//!
//! URL builders are pure string templating over the identity and the
//! organization constant. Manifest accessors go through a per-component
//! [`ManifestStore`], reading `.eil.yml` at most once until
//! [`Component::reload`] is called.

use std::fmt;
use std::path::Path;

use crate::defaults::{ESP_COMPONENT_REGISTRY_URL, GITHUB_PAGES_URL, GITHUB_URL, ORG};
use crate::error::{EntityKind, Error, Result};
use crate::manifest::{Manifest, ManifestStore};
use crate::repository::Repository;

pub struct Component<'r> {
    repo: &'r Repository,
    name: String,
    manifest: ManifestStore,
}

impl<'r> Component<'r> {
    /// Resolves the component named `name`.
    ///
    /// Runs submodule discovery if it has not run yet. Fails with
    /// [`Error::IdentityNotFound`] when `name` is not a tracked component.
    pub fn new(repo: &'r Repository, name: &str) -> Result<Self> {
        let root = repo.root()?;
        if !repo.submodules().contains(root, name)? {
            return Err(Error::IdentityNotFound {
                kind: EntityKind::Component,
                name: name.to_string(),
                origin: root.join(".gitmodules"),
            });
        }
        Self::resolved(repo, name)
    }

    /// All components of `repo`, sorted by identity.
    pub fn all(repo: &'r Repository) -> Result<Vec<Self>> {
        repo.component_identities()?
            .iter()
            .map(|name| Self::resolved(repo, name))
            .collect()
    }

    fn resolved(repo: &'r Repository, name: &str) -> Result<Self> {
        Ok(Self {
            repo,
            name: name.to_string(),
            manifest: ManifestStore::new(repo.manifest_path(name)?),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory of the component checkout.
    pub fn path(&self) -> &Path {
        self.manifest
            .path()
            .parent()
            .unwrap_or_else(|| self.manifest.path())
    }

    pub fn org(&self) -> &'static str {
        ORG
    }

    /// `esp-idf-lib/<name>`
    pub fn fqdn(&self) -> String {
        format!("{}/{}", self.org(), self.name)
    }

    pub fn repo_url(&self) -> String {
        format!("{}/{}", GITHUB_URL, self.fqdn())
    }

    pub fn doc_url(&self) -> String {
        format!("{}/{}", GITHUB_PAGES_URL, self.name)
    }

    pub fn issues_url(&self) -> String {
        format!("{}/issues", self.repo_url())
    }

    pub fn workflow_url(&self, workflow_file: &str) -> String {
        format!("{}/actions/workflows/{}", self.repo_url(), workflow_file)
    }

    pub fn badge_svg_url(&self, workflow_file: &str) -> String {
        format!("{}/badge.svg", self.workflow_url(workflow_file))
    }

    /// Markdown status badge of a GitHub Actions workflow, linking to the
    /// workflow page. The label is the file name up to its first dot.
    pub fn badge(&self, workflow_file: &str) -> String {
        let label = workflow_file.split('.').next().unwrap_or_default();
        format!(
            "[![{}]({})]({})",
            label,
            self.badge_svg_url(workflow_file),
            self.workflow_url(workflow_file)
        )
    }

    /// Page of the component in the ESP Component Registry.
    pub fn esp_component_url(&self) -> String {
        format!(
            "{}/components/{}",
            ESP_COMPONENT_REGISTRY_URL,
            self.fqdn()
        )
    }

    pub fn badge_esp_component_registry(&self) -> String {
        let url = self.esp_component_url();
        format!("[![Component Registry]({}/badge.svg)]({})", url, url)
    }

    /// The parsed manifest, loaded on first use.
    pub fn manifest(&self) -> Result<&Manifest> {
        self.manifest.get(self.repo.files())
    }

    pub fn description(&self) -> Result<&str> {
        Ok(&self.manifest()?.description)
    }

    pub fn version(&self) -> Result<&str> {
        Ok(&self.manifest()?.version)
    }

    pub fn groups(&self) -> Result<&[String]> {
        Ok(&self.manifest()?.groups)
    }

    pub fn contributors(&self) -> Result<Vec<&str>> {
        Ok(self.manifest()?.contributors())
    }

    pub fn is_group_of(&self, group: &str) -> Result<bool> {
        Ok(self.manifest()?.is_group_of(group))
    }

    pub fn is_contributed_by(&self, person: &str) -> Result<bool> {
        Ok(self.manifest()?.is_contributed_by(person))
    }

    /// Drops the loaded manifest; the next accessor call reads the file
    /// again.
    pub fn reload(&mut self) {
        self.manifest.clear();
    }
}

impl fmt::Debug for Component<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("manifest", &self.manifest)
            .finish()
    }
}
