//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal warning raised while reading a config file or workspace manifest
/// (for example an unknown key). Never aborts configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown or problematic key
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown key '{}' in {}:{}",
                self.key,
                self.file.display(),
                line
            )?,
            None => write!(f, "unknown key '{}' in {}", self.key, self.file.display())?,
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
