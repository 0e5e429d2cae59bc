//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod classpath_composer;
mod dependency_binder;
mod ordering;

pub use classpath_composer::ClasspathComposer;
pub use dependency_binder::DependencyBinder;
pub use ordering::{execution_order, export_order, topological_order, TopologicalOrder};
