//! Module graph entity
//!
//! The ordered module list handed over by discovery, validated so that the
//! root comes first and every parent is declared before its children.

use std::collections::HashMap;

use crate::domain::entities::Module;
use crate::domain::errors::ConfigurationError;
use crate::domain::value_objects::ModuleName;

#[derive(Debug, Clone)]
pub struct ModuleGraph {
    /// Root first, then declaration order.
    modules: Vec<Module>,
    index: HashMap<ModuleName, usize>,
}

impl ModuleGraph {
    /// Validates discovery output and builds the graph.
    ///
    /// Non-root modules without an explicit parent are attached to the root.
    pub fn new(modules: Vec<Module>) -> Result<Self, ConfigurationError> {
        let mut root: Option<Module> = None;
        let mut rest = Vec::with_capacity(modules.len());

        for module in modules {
            if module.declared_role.is_root() {
                if let Some(first) = &root {
                    return Err(ConfigurationError::MultipleRoots {
                        first: first.name.clone(),
                        second: module.name,
                    });
                }
                root = Some(module);
            } else {
                rest.push(module);
            }
        }

        let mut root = root.ok_or(ConfigurationError::MissingRoot)?;
        root.parent = None;
        let root_name = root.name.clone();

        let mut ordered = Vec::with_capacity(rest.len() + 1);
        let mut index = HashMap::new();
        index.insert(root_name.clone(), 0);
        ordered.push(root);

        for mut module in rest {
            if index.contains_key(&module.name) {
                return Err(ConfigurationError::DuplicateModule {
                    module: module.name,
                });
            }
            let parent = module.parent.take().unwrap_or_else(|| root_name.clone());
            if !index.contains_key(&parent) {
                return Err(ConfigurationError::UnknownParent {
                    module: module.name,
                    parent,
                });
            }
            module.parent = Some(parent);
            index.insert(module.name.clone(), ordered.len());
            ordered.push(module);
        }

        Ok(Self {
            modules: ordered,
            index,
        })
    }

    pub fn root(&self) -> &Module {
        &self.modules[0]
    }

    pub fn get(&self, name: &ModuleName) -> Option<&Module> {
        self.index.get(name).map(|&idx| &self.modules[idx])
    }

    pub fn contains(&self, name: &ModuleName) -> bool {
        self.index.contains_key(name)
    }

    /// Position in declaration order (root is 0).
    pub fn position(&self, name: &ModuleName) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Modules in declaration order, root first. Parents always precede children.
    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
