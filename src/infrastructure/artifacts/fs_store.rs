//! File system artifact store

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::ArtifactStore;
use crate::domain::value_objects::ModuleName;

/// Treats an artifact as built when the file exists under the workspace root.
///
/// Paths handed in and out are relative to the workspace root.
pub struct FsArtifactStore {
    root: PathBuf,
    recorded: Mutex<HashMap<ModuleName, PathBuf>>,
}

impl FsArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recorded: Mutex::new(HashMap::new()),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).is_file()
    }
}

impl ArtifactStore for FsArtifactStore {
    fn built_artifact(&self, module: &ModuleName, expected: &Path) -> Option<PathBuf> {
        let recorded = self
            .recorded
            .lock()
            .ok()
            .and_then(|recorded| recorded.get(module).cloned());
        if let Some(path) = recorded.filter(|path| self.exists(path)) {
            return Some(path);
        }
        self.exists(expected).then(|| expected.to_path_buf())
    }

    fn record_built(&self, module: &ModuleName, path: PathBuf) {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.insert(module.clone(), path);
        }
    }
}
