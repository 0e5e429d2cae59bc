//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use keystone::presentation::factory;
//!
//! let use_case = factory::create_workspace_use_case(&root, &config, None, sink);
//! let configured = use_case.configure()?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_event_sink, create_workspace_use_case, ConcreteWorkspaceUseCase};
pub use output::{create_renderer, OutputFormat, ResultRenderer};
