//! Build layout value object
//!
//! Where the external executor places outputs, relative to a module directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ModuleName, Version};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildLayout {
    pub build_dir: PathBuf,
    pub artifact_dir: PathBuf,
    pub artifact_extension: String,
    pub main_output_dir: PathBuf,
    pub test_output_dir: PathBuf,
}

impl Default for BuildLayout {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("build"),
            artifact_dir: PathBuf::from("libs"),
            artifact_extension: "jar".to_string(),
            main_output_dir: PathBuf::from("classes/main"),
            test_output_dir: PathBuf::from("classes/test"),
        }
    }
}

impl BuildLayout {
    /// `<module_dir>/<build_dir>/<artifact_dir>/<name>-<version>.<ext>`
    pub fn artifact_path(&self, module_dir: &Path, name: &ModuleName, version: &Version) -> PathBuf {
        let file = if self.artifact_extension.is_empty() {
            format!("{}-{}", name, version)
        } else {
            format!("{}-{}.{}", name, version, self.artifact_extension)
        };
        module_dir
            .join(&self.build_dir)
            .join(&self.artifact_dir)
            .join(file)
    }

    pub fn main_output(&self, module_dir: &Path) -> PathBuf {
        module_dir.join(&self.build_dir).join(&self.main_output_dir)
    }

    pub fn test_output(&self, module_dir: &Path) -> PathBuf {
        module_dir.join(&self.build_dir).join(&self.test_output_dir)
    }
}
