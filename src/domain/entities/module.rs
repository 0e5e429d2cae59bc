//! Module entity
//!
//! A module as discovered from the workspace layout, before configuration.

use std::path::PathBuf;

use crate::domain::entities::DependencyEdge;
use crate::domain::value_objects::{ModuleName, Role};

#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: ModuleName,
    /// `None` for the root; non-root modules without an explicit parent belong to the root.
    pub parent: Option<ModuleName>,
    pub declared_role: Role,
    /// Directory relative to the workspace root.
    pub directory: PathBuf,
    pub has_main_sources: bool,
    pub dependencies: Vec<DependencyEdge>,
}

impl Module {
    pub fn new(name: impl Into<ModuleName>, declared_role: Role) -> Self {
        let name = name.into();
        let directory = if declared_role.is_root() {
            PathBuf::from(".")
        } else {
            PathBuf::from(name.as_str())
        };
        Self {
            name,
            parent: None,
            declared_role,
            directory,
            has_main_sources: true,
            dependencies: Vec::new(),
        }
    }

    pub fn root(name: impl Into<ModuleName>) -> Self {
        Self::new(name, Role::Root).with_main_sources(false)
    }

    pub fn with_parent(mut self, parent: impl Into<ModuleName>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_directory(mut self, directory: PathBuf) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_main_sources(mut self, has_main_sources: bool) -> Self {
        self.has_main_sources = has_main_sources;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<DependencyEdge>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_dependency(mut self, dependency: DependencyEdge) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Internal modules referenced through any edge kind, in declaration order.
    pub fn internal_targets(&self) -> impl Iterator<Item = &ModuleName> {
        self.dependencies
            .iter()
            .filter_map(DependencyEdge::internal_target)
    }

    /// Internal modules referenced through export edges only.
    pub fn export_targets(&self) -> impl Iterator<Item = &ModuleName> {
        self.dependencies
            .iter()
            .filter(|edge| edge.kind.is_export())
            .filter_map(DependencyEdge::internal_target)
    }
}
