//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Orchestrator` - Configures every module and drives the build executor
//! - `WorkspaceUseCase` - Loads a workspace and configures it in one step

pub mod orchestrator;
pub mod workspace;

pub use orchestrator::{
    ConfigurationReport, ModuleFailure, ModuleReport, Orchestrator, OrchestratorOptions,
    RunOutcome,
};
pub use workspace::{ConfiguredWorkspace, WorkspaceUseCase};
