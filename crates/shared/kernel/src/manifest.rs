//! Explicit module table used in place of dynamic imports.
//!
//! Discovery finds `routes/index.rs`; the manifest says what `demo.routes.index` does.
//!
//! ```rust,ignore
//! let manifest = Manifest::new()
//!     .routes("demo.routes.index", routes::index::register)
//!     .blueprint("demo.blueprints.www", blueprints::www::blueprint)
//!     .models("demo.models.users", ModelSet::new("db").with::<User>());
//! ```

use crate::blueprint::Blueprint;
use crate::errors::KernelResult;
use crate::models::ModelSet;
use crate::routes::Routes;
use fxhash::FxHashMap;
use std::path::Path;

pub type RoutesFn = fn(Routes) -> Routes;
pub type BlueprintFn = fn(&Path) -> KernelResult<Blueprint>;

#[derive(Debug, Clone)]
pub enum Module {
    Routes(RoutesFn),
    Blueprint(BlueprintFn),
    Models(ModelSet),
}

#[derive(Debug, Clone, Default)]
pub struct Manifest {
    modules: FxHashMap<String, Module>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn routes(self, id: impl Into<String>, register: RoutesFn) -> Self {
        self.module(id, Module::Routes(register))
    }

    #[must_use]
    pub fn blueprint(self, id: impl Into<String>, factory: BlueprintFn) -> Self {
        self.module(id, Module::Blueprint(factory))
    }

    #[must_use]
    pub fn models(self, id: impl Into<String>, models: ModelSet) -> Self {
        self.module(id, Module::Models(models))
    }

    #[must_use]
    pub fn module(mut self, id: impl Into<String>, module: Module) -> Self {
        self.modules.insert(id.into(), module);
        self
    }

    /// Adds every entry of `other`, replacing entries with the same id.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.modules.extend(other.modules);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Module> {
        self.modules.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
