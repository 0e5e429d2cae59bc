//! Orchestrator Module
//!
//! Drives every module of a workspace from discovery to a resolved
//! configuration, then hands the configurations to the build executor.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`OrchestratorOptions`)
//! - `report` - Result types (`ConfigurationReport`, `RunOutcome`)
//! - `use_case` - Core use case logic (`Orchestrator`)
//!
//! ## Usage
//!
//! ```ignore
//! use keystone::application::orchestrator::{Orchestrator, OrchestratorOptions};
//!
//! let orchestrator = Orchestrator::new(OrchestratorOptions::default());
//! let mut report = orchestrator.configure(&graph, &registry, &version);
//! let outcome = orchestrator.run(&mut report, &graph, &executor, &artifacts);
//! ```

mod options;
mod report;
mod use_case;

pub use options::OrchestratorOptions;
pub use report::{ConfigurationReport, ModuleFailure, ModuleReport, RunOutcome};
pub use use_case::Orchestrator;
