//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_layout;
mod config_warning;
mod convention;
mod dependency_kind;
mod module_name;
mod role;
mod version;

pub use build_layout::BuildLayout;
pub use config_warning::ConfigWarning;
pub use convention::{Convention, ConventionSet};
pub use dependency_kind::DependencyKind;
pub use module_name::ModuleName;
pub use role::Role;
pub use version::Version;
