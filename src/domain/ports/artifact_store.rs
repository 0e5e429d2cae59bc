//! ArtifactStore port
//!
//! Observes whether the external executor has produced a module's packaged
//! artifact. The core never builds artifacts itself.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ModuleName;

pub trait ArtifactStore: Send + Sync {
    /// Path of the built artifact, or `None` while it has not been produced.
    ///
    /// `expected` is where the build layout says the artifact should be.
    fn built_artifact(&self, module: &ModuleName, expected: &Path) -> Option<PathBuf>;

    /// Records that the executor produced an artifact for `module`.
    fn record_built(&self, module: &ModuleName, path: PathBuf);
}
