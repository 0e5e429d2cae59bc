//! Configuration errors
//!
//! Every error names the module it belongs to. None of them are downgraded to
//! warnings and none are retried inside the core.

use std::path::PathBuf;

use crate::domain::value_objects::{ModuleName, Role, Version};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("module '{module}' depends on '{name}' but no version is registered for it")]
    UnknownDependency { module: ModuleName, name: String },

    #[error("version for '{name}' registered twice in one pass ({existing}, then {rejected})")]
    DuplicateKey {
        name: String,
        existing: Version,
        rejected: Version,
    },

    #[error("module '{module}' is part of an export dependency cycle: {}", render_cycle(.cycle))]
    CyclicDependency {
        module: ModuleName,
        cycle: Vec<ModuleName>,
    },

    #[error(
        "artifact for module '{module}' has not been built: {}\n  → Fix: package the module before composing its classpath",
        .artifact.display()
    )]
    ArtifactNotBuilt { module: ModuleName, artifact: PathBuf },

    #[error("module '{module}' has role '{role}'; only test-only modules get a composed classpath")]
    ClasspathNotApplicable { module: ModuleName, role: Role },

    #[error("module '{module}' depends on project '{target}' which is not part of the workspace")]
    UnknownModule {
        module: ModuleName,
        target: ModuleName,
    },

    #[error("module '{module}' not configured: dependency '{dependency}' failed")]
    DependencyFailed {
        module: ModuleName,
        dependency: ModuleName,
    },

    #[error("module '{module}' is not part of the workspace")]
    ModuleNotFound { module: ModuleName },

    #[error("workspace has no root module")]
    MissingRoot,

    #[error("workspace declares two root modules: '{first}' and '{second}'")]
    MultipleRoots {
        first: ModuleName,
        second: ModuleName,
    },

    #[error("module '{module}' is declared more than once")]
    DuplicateModule { module: ModuleName },

    #[error("parent '{parent}' of module '{module}' is not declared before it")]
    UnknownParent {
        module: ModuleName,
        parent: ModuleName,
    },
}

impl ConfigurationError {
    /// Identity of the module the error is attached to, if any.
    pub fn module(&self) -> Option<&ModuleName> {
        match self {
            ConfigurationError::UnknownDependency { module, .. }
            | ConfigurationError::CyclicDependency { module, .. }
            | ConfigurationError::ArtifactNotBuilt { module, .. }
            | ConfigurationError::ClasspathNotApplicable { module, .. }
            | ConfigurationError::UnknownModule { module, .. }
            | ConfigurationError::DependencyFailed { module, .. }
            | ConfigurationError::ModuleNotFound { module }
            | ConfigurationError::DuplicateModule { module }
            | ConfigurationError::UnknownParent { module, .. } => Some(module),
            ConfigurationError::MultipleRoots { second, .. } => Some(second),
            ConfigurationError::DuplicateKey { .. } | ConfigurationError::MissingRoot => None,
        }
    }

    /// Stable machine-readable code used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigurationError::UnknownDependency { .. } => "unknown_dependency",
            ConfigurationError::DuplicateKey { .. } => "duplicate_key",
            ConfigurationError::CyclicDependency { .. } => "cyclic_dependency",
            ConfigurationError::ArtifactNotBuilt { .. } => "artifact_not_built",
            ConfigurationError::ClasspathNotApplicable { .. } => "classpath_not_applicable",
            ConfigurationError::UnknownModule { .. } => "unknown_module",
            ConfigurationError::DependencyFailed { .. } => "dependency_failed",
            ConfigurationError::ModuleNotFound { .. } => "module_not_found",
            ConfigurationError::MissingRoot => "missing_root",
            ConfigurationError::MultipleRoots { .. } => "multiple_roots",
            ConfigurationError::DuplicateModule { .. } => "duplicate_module",
            ConfigurationError::UnknownParent { .. } => "unknown_parent",
        }
    }
}

fn render_cycle(cycle: &[ModuleName]) -> String {
    let mut names: Vec<&str> = cycle.iter().map(ModuleName::as_str).collect();
    if let Some(first) = cycle.first() {
        names.push(first.as_str());
    }
    names.join(" -> ")
}
