//! Domain Layer
//!
//! This is the core of Keystone - pure policy logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Module, ModuleGraph, VersionRegistry)
//! - `value_objects/` - Immutable value types (ModuleName, Role, Convention)
//! - `services/` - Domain services (DependencyBinder, ClasspathComposer, ordering)
//! - `policies/` - Business rules (ConventionSelector)
//! - `ports/` - Interface definitions for infrastructure
//! - `errors` - The configuration error taxonomy
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod errors;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
