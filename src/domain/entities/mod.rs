//! Domain Entities
//!
//! - `Module` - a discovered subproject and its declared edges
//! - `ModuleGraph` - validated, ordered set of modules owned by the root
//! - `VersionRegistry` - frozen table of pinned dependency versions
//! - `BoundDependencies` / `ClasspathSpec` - binding and composition results
//! - `ResolvedConfiguration` - what the build executor receives per module

mod bound_dependencies;
mod classpath;
mod dependency;
mod module;
mod module_graph;
mod resolved_configuration;
mod version_registry;

pub use bound_dependencies::{BoundDependencies, ResolvedDependency, ResolvedTarget};
pub use classpath::{ClasspathEntry, ClasspathSpec};
pub use dependency::{DependencyEdge, DependencyTarget};
pub use module::Module;
pub use module_graph::ModuleGraph;
pub use resolved_configuration::ResolvedConfiguration;
pub use version_registry::{UnknownVersion, VersionRegistry, VersionRegistryBuilder};
