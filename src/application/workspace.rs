//! Workspace Use Case
//!
//! Loads a workspace through its source port, settles the release version
//! and runs one configuration pass.

use crate::domain::ports::{LoadedWorkspace, WorkspaceSource};
use crate::domain::value_objects::Version;
use crate::error::{KeystoneError, KeystoneResult};

use super::orchestrator::{ConfigurationReport, Orchestrator};

/// A loaded workspace together with its configuration report
#[derive(Debug, Clone)]
pub struct ConfiguredWorkspace {
    pub workspace: LoadedWorkspace,
    pub version: Version,
    pub report: ConfigurationReport,
}

pub struct WorkspaceUseCase<S: WorkspaceSource> {
    source: S,
    orchestrator: Orchestrator,
    release_version: Option<Version>,
}

impl<S: WorkspaceSource> WorkspaceUseCase<S> {
    pub fn new(source: S, orchestrator: Orchestrator) -> Self {
        Self {
            source,
            orchestrator,
            release_version: None,
        }
    }

    /// Version supplied from outside the manifest (flag or environment).
    pub fn with_release_version(mut self, version: Option<Version>) -> Self {
        self.release_version = version.filter(|v| !v.is_blank());
        self
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Discovers the workspace; manifest warnings are logged, never fatal.
    pub fn load(&self) -> KeystoneResult<LoadedWorkspace> {
        let workspace = self.source.load()?;
        for warning in &workspace.warnings {
            tracing::warn!("{}", warning);
        }
        Ok(workspace)
    }

    /// Loads and configures. Per-module failures are in the report; only
    /// discovery problems and a missing version are errors here.
    pub fn configure(&self) -> KeystoneResult<ConfiguredWorkspace> {
        let workspace = self.load()?;
        let version = self.resolve_version(&workspace)?;
        let report = self
            .orchestrator
            .configure(&workspace.graph, &workspace.registry, &version);
        Ok(ConfiguredWorkspace {
            workspace,
            version,
            report,
        })
    }

    /// Flag or environment first, then the manifest's `[workspace] version`.
    pub fn resolve_version(&self, workspace: &LoadedWorkspace) -> KeystoneResult<Version> {
        self.release_version
            .clone()
            .or_else(|| {
                workspace
                    .declared_version
                    .clone()
                    .filter(|v| !v.is_blank())
            })
            .ok_or_else(|| KeystoneError::MissingReleaseVersion {
                workspace: workspace.graph.root().name.to_string(),
            })
    }
}
