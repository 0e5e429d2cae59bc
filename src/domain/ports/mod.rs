//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_store;
pub mod build_executor;
pub mod configuration_events;
pub mod workspace_source;

pub use artifact_store::ArtifactStore;
pub use build_executor::{BuildExecutor, ExecutorError};
pub use configuration_events::{
    ConfigurationEvent, ConfigurationEventSink, ModuleStage, NoopEventSink,
};
pub use workspace_source::{LoadedWorkspace, WorkspaceError, WorkspaceSource};
