//! Workspace manifest formats
//!
//! `keystone.toml` at the workspace root:
//!
//! ```toml
//! [workspace]
//! name = "creek-test"
//! version = "0.4.2"
//! members = ["util", "hamcrest", "conformity", "test-unnamed"]
//! version_catalogs = ["gradle/versions.toml"]
//!
//! [versions]
//! spotBugs = "4.8.6"
//!
//! [[defaults.dependencies]]
//! kind = "testOnly"
//! external = "org.junit.jupiter:junit-jupiter-api"
//! version = "junit"
//! ```
//!
//! and an optional `module.toml` in every member directory:
//!
//! ```toml
//! role = "test-only"
//! main_sources = true
//!
//! [[dependencies]]
//! kind = "testOnly"
//! project = "conformity"
//! ```
//!
//! A name repeated inside one `[versions]` table is rejected by the TOML
//! parser as an invalid manifest; a name pinned both inline and in a catalog
//! reaches the registry and is a `DuplicateKey`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::entities::DependencyEdge;
use crate::domain::value_objects::{DependencyKind, Role};

pub(super) const WORKSPACE_KEYS: &[&str] = &[
    "workspace",
    "name",
    "version",
    "members",
    "version_catalogs",
    "versions",
    "defaults",
    "dependencies",
    "kind",
    "external",
    "project",
];

pub(super) const MODULE_KEYS: &[&str] = &[
    "role",
    "parent",
    "main_sources",
    "dependencies",
    "kind",
    "external",
    "version",
    "project",
];

pub(super) const CATALOG_KEYS: &[&str] = &["versions"];

#[derive(Debug, Deserialize)]
pub(super) struct WorkspaceManifest {
    pub workspace: WorkspaceSection,
    /// Repeated keys never get here; TOML rejects them while parsing.
    #[serde(default)]
    pub versions: BTreeMap<String, String>,
    #[serde(default)]
    pub defaults: DefaultsSection,
}

#[derive(Debug, Deserialize)]
pub(super) struct WorkspaceSection {
    pub name: String,
    pub version: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub version_catalogs: Vec<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct DefaultsSection {
    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ModuleManifest {
    pub role: Option<Role>,
    pub parent: Option<String>,
    pub main_sources: Option<bool>,
    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,
}

#[derive(Debug, Deserialize)]
pub(super) struct VersionCatalog {
    #[serde(default)]
    pub versions: BTreeMap<String, String>,
}

/// One declared dependency: either `external` coordinates or a `project`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct DependencySpec {
    pub kind: DependencyKind,
    pub external: Option<String>,
    /// Registry key; defaults to the artifact part of `external`.
    pub version: Option<String>,
    pub project: Option<String>,
}

impl DependencySpec {
    pub fn to_edge(&self) -> Result<DependencyEdge, String> {
        match (&self.external, &self.project) {
            (Some(coordinates), None) => {
                let key = match &self.version {
                    Some(key) => key.clone(),
                    None => default_version_key(coordinates),
                };
                Ok(DependencyEdge::external(self.kind, coordinates.clone(), key))
            }
            (None, Some(project)) => Ok(DependencyEdge::internal(self.kind, project.as_str())),
            (Some(_), Some(_)) => Err("dependency sets both `external` and `project`".to_string()),
            (None, None) => Err("dependency needs `external` or `project`".to_string()),
        }
    }
}

/// `group:artifact` → `artifact`
fn default_version_key(coordinates: &str) -> String {
    coordinates
        .rsplit(':')
        .next()
        .unwrap_or(coordinates)
        .to_string()
}
