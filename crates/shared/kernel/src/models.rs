//! Model registry.
//!
//! A model is any type implementing [`Model`]. Models reach the registry through a
//! [`ModelSet`] listed in the manifest, and only those declared inside the owning
//! application's package are kept.

use crate::errors::{KernelError, KernelResult};
use serde::Serialize;
use std::any::type_name;
use std::collections::BTreeMap;

pub trait Model: 'static {
    const TABLE_NAME: &'static str;
    const BIND_KEY: Option<&'static str> = None;
}

/// Static description of a model type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    /// Short type name, the registry key.
    pub name: &'static str,
    /// Full type path, e.g. `demo::app::models::User`.
    pub type_path: &'static str,
    pub table_name: &'static str,
    pub bind_key: Option<&'static str>,
}

impl ModelDescriptor {
    pub fn of<T: Model>() -> Self {
        let type_path = type_name::<T>();
        let name = type_path.rsplit("::").next().unwrap_or(type_path);
        Self { name, type_path, table_name: T::TABLE_NAME, bind_key: T::BIND_KEY }
    }

    /// Module path the type is declared in.
    pub fn location(&self) -> &'static str {
        self.type_path.rsplit_once("::").map_or("", |(module, _)| module)
    }

    /// Whether the type is declared inside `package` (a crate name).
    pub fn belongs_to(&self, package: &str) -> bool {
        self.type_path.contains(package)
    }
}

/// Metadata view of one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelMeta {
    #[serde(rename = "ref")]
    pub name: &'static str,
    pub location: &'static str,
    pub table_name: &'static str,
    pub bind_key: Option<&'static str>,
}

/// The models a module exposes under one attribute name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSet {
    pub attribute: &'static str,
    pub members: Vec<ModelDescriptor>,
}

impl ModelSet {
    pub const fn new(attribute: &'static str) -> Self {
        Self { attribute, members: Vec::new() }
    }

    #[must_use]
    pub fn with<T: Model>(mut self) -> Self {
        self.members.push(ModelDescriptor::of::<T>());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<&'static str, ModelDescriptor>,
}

impl ModelRegistry {
    /// Adds a descriptor when it belongs to `package`. Returns whether it was added.
    pub fn register(&mut self, package: &str, descriptor: ModelDescriptor) -> bool {
        if !descriptor.belongs_to(package) {
            return false;
        }
        self.models.insert(descriptor.name, descriptor);
        true
    }

    /// # Errors
    /// Returns [`KernelError::ModelNotFound`] listing the registered models.
    pub fn get(&self, name: &str) -> KernelResult<&ModelDescriptor> {
        self.models.get(name).ok_or_else(|| KernelError::ModelNotFound {
            name: name.to_owned(),
            available: self.names().collect::<Vec<_>>().join(", "),
            context: None,
        })
    }

    /// # Errors
    /// See [`ModelRegistry::get`].
    pub fn meta(&self, name: &str) -> KernelResult<ModelMeta> {
        let model = self.get(name)?;
        Ok(ModelMeta {
            name: model.name,
            location: model.location(),
            table_name: model.table_name,
            bind_key: model.bind_key,
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.models.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
