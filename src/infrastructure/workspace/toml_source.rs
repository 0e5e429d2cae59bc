//! TOML Workspace Source
//!
//! Discovers the module graph from `keystone.toml` and the members'
//! `module.toml` files, and runs the version registration pass.

use std::fs;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;
use serde::de::DeserializeOwned;

use crate::config::deserialize_with_warnings;
use crate::domain::entities::{DependencyEdge, Module, ModuleGraph, VersionRegistry};
use crate::domain::ports::{LoadedWorkspace, WorkspaceError, WorkspaceSource};
use crate::domain::value_objects::{ConfigWarning, ModuleName, Role, Version};

use super::manifest::{
    DependencySpec, ModuleManifest, VersionCatalog, WorkspaceManifest, CATALOG_KEYS, MODULE_KEYS,
    WORKSPACE_KEYS,
};

pub const MANIFEST_FILE: &str = "keystone.toml";
pub const MODULE_FILE: &str = "module.toml";

pub struct TomlWorkspaceSource {
    root: PathBuf,
}

impl TomlWorkspaceSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    fn read<T: DeserializeOwned>(
        &self,
        path: &Path,
        keys: &[&str],
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<T, WorkspaceError> {
        let content = fs::read_to_string(path).map_err(|source| WorkspaceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (value, found) = deserialize_with_warnings(&content, path, keys).map_err(|err| {
            WorkspaceError::InvalidManifest {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        warnings.extend(found);
        Ok(value)
    }

    fn registry(
        &self,
        manifest: &WorkspaceManifest,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<VersionRegistry, WorkspaceError> {
        let mut builder = VersionRegistry::builder();
        for (name, version) in &manifest.versions {
            builder.set(name.as_str(), Version::new(version.as_str()))?;
        }
        for catalog in &manifest.workspace.version_catalogs {
            let path = self.root.join(catalog);
            let catalog: VersionCatalog = self.read(&path, CATALOG_KEYS, warnings)?;
            for (name, version) in catalog.versions {
                builder.set(name, Version::new(version))?;
            }
        }
        tracing::debug!(entries = builder.len(), "registered versions");
        Ok(builder.build())
    }

    fn member(
        &self,
        member: &str,
        defaults: &[DependencyEdge],
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<Module, WorkspaceError> {
        let directory = PathBuf::from(member);
        if !directory
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(WorkspaceError::InvalidManifest {
                path: self.manifest_path(),
                message: format!("member '{}' is not a relative path inside the workspace", member),
            });
        }
        let absolute = self.root.join(&directory);
        if !absolute.is_dir() {
            return Err(WorkspaceError::InvalidManifest {
                path: self.manifest_path(),
                message: format!("member directory '{}' does not exist", member),
            });
        }
        let name = directory
            .file_name()
            .map(|n| ModuleName::new(n.to_string_lossy()))
            .ok_or_else(|| WorkspaceError::InvalidManifest {
                path: self.manifest_path(),
                message: format!("member '{}' has no name", member),
            })?;

        let module_path = absolute.join(MODULE_FILE);
        let manifest: ModuleManifest = if module_path.exists() {
            self.read(&module_path, MODULE_KEYS, warnings)?
        } else {
            ModuleManifest::default()
        };

        let mut dependencies = defaults.to_vec();
        dependencies.extend(to_edges(&module_path, &manifest.dependencies)?);

        let has_main_sources = manifest
            .main_sources
            .unwrap_or_else(|| has_main_sources(&absolute));

        let mut module = Module::new(name, manifest.role.unwrap_or(Role::Standard))
            .with_directory(directory)
            .with_main_sources(has_main_sources)
            .with_dependencies(dependencies);
        if let Some(parent) = manifest.parent {
            module = module.with_parent(parent.as_str());
        }
        Ok(module)
    }
}

impl WorkspaceSource for TomlWorkspaceSource {
    fn load(&self) -> Result<LoadedWorkspace, WorkspaceError> {
        let manifest_path = self.manifest_path();
        if !manifest_path.is_file() {
            return Err(WorkspaceError::ManifestNotFound {
                path: manifest_path,
            });
        }

        let mut warnings = Vec::new();
        let manifest: WorkspaceManifest = self.read(&manifest_path, WORKSPACE_KEYS, &mut warnings)?;
        let registry = self.registry(&manifest, &mut warnings)?;
        let defaults = to_edges(&manifest_path, &manifest.defaults.dependencies)?;

        let mut modules = vec![Module::root(manifest.workspace.name.as_str())];
        for member in &manifest.workspace.members {
            modules.push(self.member(member, &defaults, &mut warnings)?);
        }
        let graph = ModuleGraph::new(modules)?;

        tracing::info!(
            workspace = %manifest.workspace.name,
            modules = graph.len(),
            "loaded workspace"
        );

        Ok(LoadedWorkspace {
            root_dir: self.root.clone(),
            graph,
            registry,
            declared_version: manifest.workspace.version.map(Version::new),
            warnings,
        })
    }
}

fn to_edges(path: &Path, specs: &[DependencySpec]) -> Result<Vec<DependencyEdge>, WorkspaceError> {
    specs
        .iter()
        .map(|spec| {
            spec.to_edge()
                .map_err(|message| WorkspaceError::InvalidManifest {
                    path: path.to_path_buf(),
                    message,
                })
        })
        .collect()
}

/// Whether `src/main` holds at least one file, hidden and ignored files included.
fn has_main_sources(module_dir: &Path) -> bool {
    let main = module_dir.join("src").join("main");
    if !main.is_dir() {
        return false;
    }
    WalkBuilder::new(&main)
        .standard_filters(false)
        .build()
        .filter_map(Result::ok)
        .any(|entry| entry.file_type().is_some_and(|t| t.is_file()))
}
