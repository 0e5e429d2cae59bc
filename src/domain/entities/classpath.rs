//! Classpath entities

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ModuleName;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ClasspathEntry {
    PackagedArtifact { path: PathBuf },
    TestOutput { path: PathBuf },
    Module { module: ModuleName, path: PathBuf },
    External { notation: String },
}

impl ClasspathEntry {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ClasspathEntry::PackagedArtifact { path }
            | ClasspathEntry::TestOutput { path }
            | ClasspathEntry::Module { path, .. } => Some(path),
            ClasspathEntry::External { .. } => None,
        }
    }
}

impl std::fmt::Display for ClasspathEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClasspathEntry::External { notation } => f.write_str(notation),
            other => match other.path() {
                Some(path) => write!(f, "{}", path.display()),
                None => Ok(()),
            },
        }
    }
}

/// Ordered classpath; earlier entries shadow later ones on name collisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClasspathSpec {
    entries: Vec<ClasspathEntry>,
}

impl ClasspathSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry unless an identical one is already present.
    pub fn push(&mut self, entry: ClasspathEntry) {
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    pub fn entries(&self) -> &[ClasspathEntry] {
        &self.entries
    }

    pub fn first(&self) -> Option<&ClasspathEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
