//! Application assembly: [`BigApp`] collects config, routes, blueprints, structures and
//! models, then freezes them into an [`AppContext`] shared through [`AppState`].

use crate::blueprint::Blueprint;
use crate::config::{ConfigLoader, EnvPolicy, EnvSource, HostConfig, ProcessEnv, SmtpRegistry};
use crate::discovery::{DiscoveryReport, ScanMode, SkipReason, module_id, scan};
use crate::errors::{KernelError, KernelErrorExt, KernelResult};
use crate::manifest::{Manifest, Module};
use crate::models::{ModelDescriptor, ModelMeta, ModelRegistry};
use crate::routes::Routes;
use crate::server::HEALTH_PATH;
use crate::server::mounts::{Mount, MountTable};
use crate::server::templates::Templates;
use crate::session::{SessionMap, seed_session};
use crate::structure::Structure;
use axum::extract::FromRef;
use axum::routing::MethodRouter;
use bigapp_domain::config::AppSection;
use bigapp_domain::constants::DEFAULT_MODEL_ATTRIBUTE;
use std::collections::BTreeMap;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// How to start an application.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Package name: the first segment of module ids and the model ownership filter.
    pub name: String,
    pub root: PathBuf,
    pub config_file: Option<PathBuf>,
    pub instance_path: Option<PathBuf>,
    pub env: Arc<dyn EnvSource>,
    pub policy: EnvPolicy,
}

impl AppOptions {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            config_file: None,
            instance_path: None,
            env: Arc::new(ProcessEnv),
            policy: EnvPolicy::default(),
        }
    }

    /// Options from the `[app]` settings section; `root` is used when the section has none.
    pub fn from_section(name: impl Into<String>, section: &AppSection, root: impl Into<PathBuf>) -> Self {
        let mut options = Self::new(name, section.root.clone().unwrap_or_else(|| root.into()));
        options.config_file.clone_from(&section.config_file);
        options.instance_path.clone_from(&section.instance_path);
        if section.strict_env {
            options.policy = EnvPolicy::Strict;
        }
        options
    }

    #[must_use]
    pub fn config_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.config_file = Some(file.into());
        self
    }

    #[must_use]
    pub fn instance_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.instance_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn env(mut self, env: Arc<dyn EnvSource>) -> Self {
        self.env = env;
        self
    }

    #[must_use]
    pub const fn policy(mut self, policy: EnvPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Enabled blueprints by name. Names and URL prefixes are unique.
#[derive(Debug, Clone, Default)]
pub struct BlueprintRegistry {
    blueprints: BTreeMap<String, Blueprint>,
}

impl BlueprintRegistry {
    /// # Errors
    /// The reason the blueprint was not registered.
    pub fn register(&mut self, blueprint: Blueprint) -> Result<(), SkipReason> {
        if !blueprint.enabled() {
            return Err(SkipReason::Disabled);
        }
        let clash = self.blueprints.contains_key(blueprint.name())
            || self.blueprints.values().any(|b| b.url_prefix() == blueprint.url_prefix());
        if clash {
            return Err(SkipReason::Duplicate);
        }
        self.blueprints.insert(blueprint.name().to_owned(), blueprint);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Blueprint> {
        self.blueprints.get(name)
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Blueprint> {
        self.blueprints.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Blueprint> {
        self.blueprints.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blueprints.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }
}

/// Application under construction.
#[derive(Debug)]
pub struct BigApp {
    name: String,
    config: HostConfig,
    routes: Routes,
    blueprints: BlueprintRegistry,
    structures: BTreeMap<String, Structure>,
    models: ModelRegistry,
    report: DiscoveryReport,
}

impl BigApp {
    /// Loads the config document and prepares the instance folder.
    ///
    /// # Errors
    /// Any [`ConfigLoader::load`] failure, or the instance folder cannot be created.
    pub fn init(options: AppOptions) -> KernelResult<Self> {
        let AppOptions { name, root, config_file, instance_path, env, policy } = options;

        let mut config = HostConfig::new(&root);
        if let Some(instance_path) = instance_path {
            config = config.with_instance_path(instance_path);
        }
        std::fs::create_dir_all(&config.instance_path).context("creating instance folder")?;

        let mut loader = ConfigLoader::new(&root).env(env).policy(policy);
        if let Some(file) = config_file {
            loader = loader.file(file);
        }
        loader.load(&mut config)?;

        info!(app = %name, root = %root.display(), "Application initialised");
        Ok(Self {
            name,
            config,
            routes: Routes::new(),
            blueprints: BlueprintRegistry::default(),
            structures: BTreeMap::new(),
            models: ModelRegistry::default(),
            report: DiscoveryReport::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Everything imported and skipped so far.
    pub const fn report(&self) -> &DiscoveryReport {
        &self.report
    }

    #[must_use]
    pub fn route(mut self, path: &str, method_router: MethodRouter<AppState>) -> Self {
        self.routes = self.routes.route(path, method_router);
        self
    }

    /// Imports `<root>/<folder>/*.rs` route modules through the manifest.
    pub fn import_routes(&mut self, folder: impl AsRef<Path>, manifest: &Manifest) -> DiscoveryReport {
        let folder = folder.as_ref();
        let mut report = DiscoveryReport::default();

        for candidate in scan(&self.config.root.join(folder), ScanMode::Routes, &mut report) {
            let id = module_id(&self.name, folder, &candidate.stem);
            match manifest.get(&id) {
                Some(Module::Routes(register)) => {
                    self.routes = register(std::mem::take(&mut self.routes));
                    report.import(id);
                },
                Some(_) => report.skip(id, SkipReason::WrongModuleKind),
                None => report.skip(id, SkipReason::UnknownModule),
            }
        }
        self.record(report)
    }

    /// Imports every blueprint folder under `<root>/<folder>`.
    pub fn import_blueprints(&mut self, folder: impl AsRef<Path>, manifest: &Manifest) -> DiscoveryReport {
        let folder = folder.as_ref();
        let mut report = DiscoveryReport::default();

        for candidate in scan(&self.config.root.join(folder), ScanMode::Blueprints, &mut report) {
            let id = module_id(&self.name, folder, &candidate.stem);
            let factory = match manifest.get(&id) {
                Some(Module::Blueprint(factory)) => factory,
                Some(_) => {
                    report.skip(id, SkipReason::WrongModuleKind);
                    continue;
                },
                None => {
                    report.skip(id, SkipReason::UnknownModule);
                    continue;
                },
            };

            match factory(&candidate.path) {
                Ok(blueprint) => match self.blueprints.register(blueprint) {
                    Ok(()) => report.import(id),
                    Err(reason) => report.skip(id, reason),
                },
                Err(err) => report.skip(id, SkipReason::Failed(err.to_string())),
            }
        }
        self.record(report)
    }

    /// Registers a blueprint built by hand.
    ///
    /// # Errors
    /// The reason it was not registered (disabled or duplicate).
    pub fn register_blueprint(&mut self, blueprint: Blueprint) -> Result<(), SkipReason> {
        let name = blueprint.name().to_owned();
        self.blueprints.register(blueprint).inspect(|_| debug!(blueprint = %name, "Blueprint registered"))
    }

    /// Imports theme folders under `<root>/<folder>`. No manifest entries are needed.
    pub fn import_structures(&mut self, folder: impl AsRef<Path>) -> DiscoveryReport {
        let folder = folder.as_ref();
        let mut report = DiscoveryReport::default();

        for candidate in scan(&self.config.root.join(folder), ScanMode::Structures, &mut report) {
            match Structure::load(&candidate.path) {
                Ok(Ok(structure)) if self.structures.contains_key(&structure.name) => {
                    report.skip(candidate.name, SkipReason::Duplicate);
                },
                Ok(Ok(structure)) => {
                    self.structures.insert(structure.name.clone(), structure);
                    report.import(candidate.name);
                },
                Ok(Err(reason)) => report.skip(candidate.name, reason),
                Err(err) => report.skip(candidate.name, SkipReason::Failed(err.to_string())),
            }
        }
        self.record(report)
    }

    /// Imports model modules exposing the `db` attribute.
    pub fn import_models(&mut self, folder: impl AsRef<Path>, manifest: &Manifest) -> DiscoveryReport {
        self.import_models_with(folder, manifest, DEFAULT_MODEL_ATTRIBUTE)
    }

    /// Imports model modules exposing `attribute`. Only models declared inside this
    /// application's package are registered.
    pub fn import_models_with(
        &mut self,
        folder: impl AsRef<Path>,
        manifest: &Manifest,
        attribute: &str,
    ) -> DiscoveryReport {
        let folder = folder.as_ref();
        let mut report = DiscoveryReport::default();

        for candidate in scan(&self.config.root.join(folder), ScanMode::Models, &mut report) {
            let id = module_id(&self.name, folder, &candidate.stem);
            match manifest.get(&id) {
                Some(Module::Models(set)) if set.attribute == attribute => {
                    for descriptor in &set.members {
                        if !self.models.register(&self.name, descriptor.clone()) {
                            debug!(model = %descriptor.type_path, app = %self.name, "Foreign model ignored");
                        }
                    }
                    report.import(id);
                },
                Some(Module::Models(_)) => report.skip(id, SkipReason::MissingAttribute(attribute.to_owned())),
                Some(_) => report.skip(id, SkipReason::WrongModuleKind),
                None => report.skip(id, SkipReason::UnknownModule),
            }
        }
        self.record(report)
    }

    /// Freezes the application and loads its templates.
    ///
    /// Blueprints and structures whose paths overlap an earlier mount are left out and
    /// reported as [`SkipReason::Overlap`].
    ///
    /// # Errors
    /// Fails when a template does not parse, or the application's own routes overlap
    /// `/health` or its static folder.
    pub fn build(mut self) -> KernelResult<AppState> {
        self.claim_mounts()?;

        let mut folders = vec![self.config.template_folder.clone()];
        folders.extend(self.blueprints.iter().flat_map(|b| b.walk()).map(|b| b.template_folder().to_path_buf()));
        folders.extend(self.structures.values().map(|s| s.template_folder.clone()));
        let templates = Templates::load(&folders)?;

        info!(
            app = %self.name,
            blueprints = self.blueprints.len(),
            structures = self.structures.len(),
            models = self.models.len(),
            templates = templates.len(),
            "Application built"
        );

        Ok(AppState {
            inner: Arc::new(AppContext {
                name: self.name,
                config: self.config,
                routes: self.routes,
                blueprints: self.blueprints,
                structures: self.structures,
                models: self.models,
                templates,
                report: self.report,
            }),
        })
    }

    fn claim_mounts(&mut self) -> KernelResult<()> {
        let mut table = MountTable::default();

        let mut own: Vec<_> = self.routes.paths().map(Mount::route).collect();
        own.push(Mount::route(HEALTH_PATH));
        if self.config.static_folder.is_dir() {
            own.push(Mount::service(&self.config.static_url_path));
        }
        table.claim(&self.name, own).map_err(|clash| KernelError::InvalidConfig {
            message: clash.to_string().into(),
            context: None,
        })?;

        let blueprints: Vec<_> = self.blueprints.iter().map(|b| (b.name().to_owned(), b.mounts("/"))).collect();
        for (name, mounts) in blueprints {
            if let Err(clash) = table.claim(&name, mounts) {
                self.blueprints.remove(&name);
                self.report.skip(name, SkipReason::Overlap(clash.to_string()));
            }
        }

        let structures: Vec<_> = self
            .structures
            .values()
            .map(|s| {
                let mounts = s.static_folder.iter().map(|_| Mount::service(&s.static_url_path));
                (s.name.clone(), mounts.collect::<Vec<_>>())
            })
            .collect();
        for (name, mounts) in structures {
            if let Err(clash) = table.claim(&name, mounts) {
                self.structures.remove(&name);
                self.report.skip(name, SkipReason::Overlap(clash.to_string()));
            }
        }
        Ok(())
    }

    fn record(&mut self, report: DiscoveryReport) -> DiscoveryReport {
        self.report.extend(report.clone());
        report
    }
}

/// Immutable result of start-up.
#[derive(Debug)]
pub struct AppContext {
    name: String,
    config: HostConfig,
    routes: Routes,
    blueprints: BlueprintRegistry,
    structures: BTreeMap<String, Structure>,
    models: ModelRegistry,
    templates: Templates,
    report: DiscoveryReport,
}

impl AppContext {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn instance_path(&self) -> &Path {
        &self.config.instance_path
    }

    pub fn database_uri(&self) -> Option<&str> {
        self.config.database_uri.as_deref()
    }

    pub const fn database_binds(&self) -> &BTreeMap<String, String> {
        &self.config.database_binds
    }

    pub const fn smtp(&self) -> &SmtpRegistry {
        &self.config.smtp
    }

    /// Settings for `address`, empty when unknown.
    pub fn smtp_settings(&self, address: &str) -> toml::Table {
        self.config.smtp.settings(address)
    }

    pub const fn routes(&self) -> &Routes {
        &self.routes
    }

    pub const fn blueprints(&self) -> &BlueprintRegistry {
        &self.blueprints
    }

    pub fn structures(&self) -> impl Iterator<Item = &Structure> {
        self.structures.values()
    }

    pub fn structure(&self, name: &str) -> Option<&Structure> {
        self.structures.get(name)
    }

    pub const fn models(&self) -> &ModelRegistry {
        &self.models
    }

    pub const fn templates(&self) -> &Templates {
        &self.templates
    }

    pub const fn report(&self) -> &DiscoveryReport {
        &self.report
    }

    /// # Errors
    /// [`crate::errors::KernelError::ModelNotFound`] listing the registered models.
    pub fn model(&self, name: &str) -> KernelResult<&ModelDescriptor> {
        self.models.get(name)
    }

    /// # Errors
    /// See [`AppContext::model`].
    pub fn model_meta(&self, name: &str) -> KernelResult<ModelMeta> {
        self.models.meta(name)
    }

    /// Seeds `session` with the app defaults, then every blueprint's.
    pub fn init_session(&self, session: &mut SessionMap) {
        seed_session(session, &self.config.session);
        for blueprint in self.blueprints.iter() {
            blueprint.init_session(session);
        }
    }

    pub fn structure_tmpl(&self, structure: &str, template: &str) -> String {
        format!("{structure}/{template}")
    }

    /// # Errors
    /// Fails when the template is unknown or rendering fails.
    pub fn render(&self, template: &str, context: &tera::Context) -> KernelResult<String> {
        self.templates.render(template, context)
    }
}

/// Cheap clone handle to the [`AppContext`], used as the router state.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppContext>,
}

impl Deref for AppState {
    type Target = AppContext;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<AppState> for Templates {
    fn from_ref(state: &AppState) -> Self {
        state.inner.templates.clone()
    }
}
