//! WorkspaceSource port
//!
//! Discovery of the module graph and the version registration pass.

use std::path::PathBuf;

use crate::domain::entities::{ModuleGraph, VersionRegistry};
use crate::domain::errors::ConfigurationError;
use crate::domain::value_objects::{ConfigWarning, Version};

/// Everything discovery hands to the orchestrator.
#[derive(Debug, Clone)]
pub struct LoadedWorkspace {
    pub root_dir: PathBuf,
    pub graph: ModuleGraph,
    pub registry: VersionRegistry,
    /// Version declared in the manifest; callers may override it.
    pub declared_version: Option<Version>,
    pub warnings: Vec<ConfigWarning>,
}

pub trait WorkspaceSource: Send + Sync {
    fn load(&self) -> Result<LoadedWorkspace, WorkspaceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error(
        "workspace manifest not found: {path}\n  → Fix: run keystone from the workspace root or pass --workspace"
    )]
    ManifestNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
