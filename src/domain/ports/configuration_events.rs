//! Configuration Event Port
//!
//! Observable progress of a configuration run, for JSON event streams
//! and debugging.

use crate::domain::errors::ConfigurationError;
use crate::domain::value_objects::{ModuleName, Version};

/// Stage a module has just completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStage {
    Discovered,
    VersionAssigned,
    ConventionsSelected,
    DependenciesBound,
    /// Test-only module waiting for its packaged artifact
    AwaitingArtifact,
    ClasspathComposed,
    Ready,
    Failed,
}

impl ModuleStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleStage::Discovered => "discovered",
            ModuleStage::VersionAssigned => "version_assigned",
            ModuleStage::ConventionsSelected => "conventions_selected",
            ModuleStage::DependenciesBound => "dependencies_bound",
            ModuleStage::AwaitingArtifact => "awaiting_artifact",
            ModuleStage::ClasspathComposed => "classpath_composed",
            ModuleStage::Ready => "ready",
            ModuleStage::Failed => "failed",
        }
    }

    /// `Ready` and `Failed` are never left.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ModuleStage::Ready | ModuleStage::Failed)
    }
}

impl std::fmt::Display for ModuleStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during configuration and execution
#[derive(Debug, Clone)]
pub enum ConfigurationEvent {
    /// Configuration started
    Started {
        module_count: usize,
        version: Version,
    },

    /// A module completed a stage
    StageCompleted {
        module: ModuleName,
        stage: ModuleStage,
    },

    /// A module failed
    ModuleFailed {
        module: ModuleName,
        error: ConfigurationError,
    },

    /// A module was handed to the build executor
    Executed { module: ModuleName },

    /// The build executor failed or was never invoked for a module
    ExecutionFailed { module: ModuleName, message: String },

    /// Skipped because a dependency failed
    Skipped {
        module: ModuleName,
        dependency: ModuleName,
    },

    /// Configuration completed
    Completed { ready: usize, failed: usize },
}

/// Trait for receiving configuration events
pub trait ConfigurationEventSink: Send + Sync {
    fn on_event(&self, event: ConfigurationEvent);

    /// Whether this sink wants per-stage events or only summaries.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ConfigurationEventSink for NoopEventSink {
    fn on_event(&self, _event: ConfigurationEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
