//! Plan File Executor
//!
//! Records what the build executor would be asked to do, in order, and
//! writes it as JSON for an external build tool to consume.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::domain::entities::ResolvedConfiguration;
use crate::domain::ports::{BuildExecutor, ExecutorError};
use crate::domain::value_objects::{BuildLayout, ModuleName, Version};
use crate::error::KeystoneResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlanStep {
    Package {
        module: ModuleName,
        artifact: PathBuf,
    },
    Execute {
        #[serde(flatten)]
        configuration: ResolvedConfiguration,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub workspace: String,
    pub version: Version,
    pub steps: Vec<PlanStep>,
}

impl BuildPlan {
    pub fn to_json(&self) -> KeystoneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the plan atomically (temp file in the same directory, then rename).
    pub fn write_to(&self, path: &Path) -> KeystoneResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let mut file = tempfile::NamedTempFile::new_in(&parent)?;
        file.write_all(self.to_json()?.as_bytes())?;
        file.write_all(b"\n")?;
        file.persist(path).map_err(|err| err.error)?;
        Ok(())
    }
}

/// Executor that plans instead of building.
///
/// `package` reports the artifact path the layout prescribes; the real
/// build tool produces it later.
pub struct PlanFileExecutor {
    layout: BuildLayout,
    steps: Mutex<Vec<PlanStep>>,
}

impl PlanFileExecutor {
    pub fn new(layout: BuildLayout) -> Self {
        Self {
            layout,
            steps: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, step: PlanStep) {
        if let Ok(mut steps) = self.steps.lock() {
            steps.push(step);
        }
    }

    pub fn into_plan(self, workspace: impl Into<String>, version: Version) -> BuildPlan {
        BuildPlan {
            workspace: workspace.into(),
            version,
            steps: self
                .steps
                .into_inner()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        }
    }
}

impl BuildExecutor for PlanFileExecutor {
    fn package(&self, config: &ResolvedConfiguration) -> Result<PathBuf, ExecutorError> {
        if !config.produces_artifact {
            return Err(ExecutorError::NoArtifact {
                module: config.module.clone(),
            });
        }
        let artifact = self
            .layout
            .artifact_path(&config.directory, &config.module, &config.version);
        self.record(PlanStep::Package {
            module: config.module.clone(),
            artifact: artifact.clone(),
        });
        Ok(artifact)
    }

    fn execute(&self, config: &ResolvedConfiguration) -> Result<(), ExecutorError> {
        self.record(PlanStep::Execute {
            configuration: config.clone(),
        });
        Ok(())
    }
}
