//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `workspace/` - Workspace discovery from `keystone.toml` / `module.toml`
//! - `artifacts/` - Artifact stores (file system, in-memory)
//! - `executor/` - Build executors (plan file)
//! - `events/` - Event sinks (NDJSON)

pub mod artifacts;
pub mod events;
pub mod executor;
pub mod workspace;

// Re-export for convenience
pub use artifacts::{FsArtifactStore, InMemoryArtifactStore};
pub use events::JsonEventSink;
pub use executor::{BuildPlan, PlanFileExecutor, PlanStep};
pub use workspace::{TomlWorkspaceSource, MANIFEST_FILE, MODULE_FILE};
