//! Keystone - convention and classpath policy for multi-module builds
//!
//! Keystone sits between a workspace of modules and the tool that builds
//! them. For every module it settles the release version, picks the
//! conventions that apply, binds declared dependencies to pinned versions
//! and, for test-only modules, composes a classpath around the packaged
//! artifact. Compiling, testing and publishing are left to the executor.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ConfigurationReport, ConfiguredWorkspace, Orchestrator, OrchestratorOptions, RunOutcome,
    WorkspaceUseCase,
};
pub use config::{Config, Verbosity};
pub use domain::entities::{
    ClasspathEntry, ClasspathSpec, DependencyEdge, Module, ModuleGraph, ResolvedConfiguration,
    VersionRegistry,
};
pub use domain::errors::ConfigurationError;
pub use domain::value_objects::{Convention, ConventionSet, DependencyKind, ModuleName, Role, Version};
pub use error::{KeystoneError, KeystoneResult};
pub use infrastructure::{BuildPlan, PlanFileExecutor, TomlWorkspaceSource};
