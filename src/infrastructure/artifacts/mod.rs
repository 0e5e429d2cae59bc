//! Artifact store implementations
//!
//! - `FsArtifactStore` - an artifact is built when its file exists
//! - `InMemoryArtifactStore` - trusts whatever the executor recorded

mod fs_store;
mod memory;

pub use fs_store::FsArtifactStore;
pub use memory::InMemoryArtifactStore;
