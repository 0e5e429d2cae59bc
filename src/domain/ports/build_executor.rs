//! BuildExecutor port
//!
//! The external collaborator that compiles, tests, measures coverage and
//! publishes. Keystone only hands it resolved configurations, in order.

use std::path::PathBuf;

use crate::domain::entities::ResolvedConfiguration;
use crate::domain::value_objects::ModuleName;

pub trait BuildExecutor: Send + Sync {
    /// Produces the packaged artifact for a module and returns its path.
    fn package(&self, config: &ResolvedConfiguration) -> Result<PathBuf, ExecutorError>;

    /// Runs the module's build with the resolved configuration.
    fn execute(&self, config: &ResolvedConfiguration) -> Result<(), ExecutorError>;
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ExecutorError {
    #[error("executor failed for module '{module}': {message}")]
    Failed { module: ModuleName, message: String },

    #[error("executor could not be started for module '{module}': {message}")]
    Unavailable { module: ModuleName, message: String },

    #[error("executor reported no artifact for module '{module}'")]
    NoArtifact { module: ModuleName },
}
