//! Version registry entity
//!
//! Pinned dependency versions shared by every module in the workspace.
//!
//! The registration pass is modelled by [`VersionRegistryBuilder`]; once
//! [`VersionRegistryBuilder::build`] is called the resulting
//! [`VersionRegistry`] has no mutators, so every module reads the same,
//! frozen table.

use std::collections::BTreeMap;

use crate::domain::errors::ConfigurationError;
use crate::domain::value_objects::{ModuleName, Version};

#[derive(Debug, Clone, Default)]
pub struct VersionRegistryBuilder {
    entries: BTreeMap<String, Version>,
}

impl VersionRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pinned version. A second registration of the same name
    /// in this pass is a `DuplicateKey` error, even with an equal version.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        version: Version,
    ) -> Result<&mut Self, ConfigurationError> {
        let name = name.into();
        if let Some(existing) = self.entries.get(&name) {
            return Err(ConfigurationError::DuplicateKey {
                existing: existing.clone(),
                rejected: version,
                name,
            });
        }
        self.entries.insert(name, version);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> VersionRegistry {
        VersionRegistry {
            entries: self.entries,
        }
    }
}

/// Lookup failure, before a consuming module is attached.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("no version registered for '{name}'")]
pub struct UnknownVersion {
    pub name: String,
}

impl UnknownVersion {
    pub fn for_module(self, module: &ModuleName) -> ConfigurationError {
        ConfigurationError::UnknownDependency {
            module: module.clone(),
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRegistry {
    entries: BTreeMap<String, Version>,
}

impl VersionRegistry {
    pub fn builder() -> VersionRegistryBuilder {
        VersionRegistryBuilder::new()
    }

    /// Missing names are an error; there is no fallback version.
    pub fn get(&self, name: &str) -> Result<&Version, UnknownVersion> {
        self.entries.get(name).ok_or_else(|| UnknownVersion {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Version)> {
        self.entries.iter().map(|(name, version)| (name.as_str(), version))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
