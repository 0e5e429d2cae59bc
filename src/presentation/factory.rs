//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{Orchestrator, OrchestratorOptions, WorkspaceUseCase};
use crate::config::Config;
use crate::domain::ports::{ConfigurationEventSink, NoopEventSink};
use crate::domain::value_objects::Version;
use crate::infrastructure::{JsonEventSink, TomlWorkspaceSource};

/// Type alias for the concrete WorkspaceUseCase with all dependencies
pub type ConcreteWorkspaceUseCase = WorkspaceUseCase<TomlWorkspaceSource>;

/// Orchestrator options taken from the loaded configuration.
pub fn orchestrator_options(config: &Config) -> OrchestratorOptions {
    OrchestratorOptions::default()
        .with_test_prefix(config.conventions.test_prefix.clone())
        .with_layout(config.layout.build_layout())
}

/// NDJSON events on stdout for `--json`, nothing otherwise.
pub fn create_event_sink(json: bool, command: &'static str) -> Arc<dyn ConfigurationEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(NoopEventSink)
    }
}

/// Create a workspace use case rooted at `root`.
///
/// The release version falls back from the flag to `KEYSTONE_RELEASE_VERSION`
/// (already folded into `config`); the manifest is consulted last.
pub fn create_workspace_use_case(
    root: &Path,
    config: &Config,
    release_version: Option<String>,
    events: Arc<dyn ConfigurationEventSink>,
) -> ConcreteWorkspaceUseCase {
    let source = TomlWorkspaceSource::new(root);
    let orchestrator = Orchestrator::new(orchestrator_options(config)).with_events(events);
    let version = release_version
        .or_else(|| config.release_version.clone())
        .map(Version::new);

    WorkspaceUseCase::new(source, orchestrator).with_release_version(version)
}
