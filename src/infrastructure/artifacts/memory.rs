//! In-memory artifact store

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::ArtifactStore;
use crate::domain::value_objects::ModuleName;

/// Artifacts exist once recorded; nothing touches the disk.
///
/// Used for planning, where the executor only reports where artifacts will be.
#[derive(Default)]
pub struct InMemoryArtifactStore {
    built: Mutex<HashMap<ModuleName, PathBuf>>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactStore for InMemoryArtifactStore {
    fn built_artifact(&self, module: &ModuleName, _expected: &Path) -> Option<PathBuf> {
        self.built
            .lock()
            .ok()
            .and_then(|built| built.get(module).cloned())
    }

    fn record_built(&self, module: &ModuleName, path: PathBuf) {
        if let Ok(mut built) = self.built.lock() {
            built.insert(module.clone(), path);
        }
    }
}
