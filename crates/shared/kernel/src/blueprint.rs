//! Self-contained route groups configured by their own `config.toml`.

use crate::app::AppState;
use crate::config::database::is_enabled;
use crate::discovery::{DiscoveryReport, ScanMode, SkipReason, module_id, scan};
use crate::errors::{KernelError, KernelErrorExt, KernelResult};
use crate::manifest::{Manifest, Module, RoutesFn};
use crate::routes::Routes;
use crate::server::mounts::{Mount, join};
use crate::session::{SessionMap, seed_session};
use axum::Router;
use axum::routing::MethodRouter;
use bigapp_domain::constants::{BLUEPRINT_CONFIG_FILE, DEFAULT_STATIC_FOLDER, DEFAULT_TEMPLATE_FOLDER};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BlueprintFile {
    enabled: Option<toml::Value>,
    settings: BlueprintSettings,
    session: toml::Table,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BlueprintSettings {
    url_prefix: Option<String>,
    static_folder: Option<String>,
    template_folder: Option<String>,
    static_url_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Blueprint {
    name: String,
    location: PathBuf,
    enabled: bool,
    url_prefix: String,
    static_folder: Option<PathBuf>,
    static_url_path: String,
    template_folder: PathBuf,
    session: toml::Table,
    routes: Routes,
    children: Vec<Blueprint>,
}

impl Blueprint {
    /// Loads the blueprint in `location`, named after the folder.
    ///
    /// # Errors
    /// [`KernelError::ConfigNotFound`] without a `config.toml`, [`KernelError::Toml`] when it
    /// does not parse.
    pub fn new(location: impl AsRef<Path>) -> KernelResult<Self> {
        let location = location.as_ref().to_path_buf();
        let name = location
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| KernelError::InvalidConfig {
                message: format!("blueprint location has no name: {}", location.display()).into(),
                context: None,
            })?;

        let config_path = location.join(BLUEPRINT_CONFIG_FILE);
        if !config_path.is_file() {
            return Err(KernelError::ConfigNotFound { path: config_path, context: None });
        }
        let raw = std::fs::read_to_string(&config_path).context("reading blueprint config")?;
        let table: toml::Table = toml::from_str(&raw).context(format!("parsing {}", config_path.display()))?;
        let file = BlueprintFile::deserialize(lowercase_keys(toml::Value::Table(table)))
            .context(format!("reading {}", config_path.display()))?;

        let settings = file.settings;
        let url_prefix = settings
            .url_prefix
            .filter(|p| !p.is_empty())
            .map_or_else(|| format!("/{name}"), |p| normalize_prefix(&p));
        let static_folder = settings.static_folder.filter(|f| !f.is_empty()).map(|f| location.join(f));
        let static_url_path = settings
            .static_url_path
            .filter(|p| !p.is_empty())
            .map_or_else(|| format!("/{DEFAULT_STATIC_FOLDER}"), |p| normalize_prefix(&p));
        let template_folder = location.join(
            settings.template_folder.filter(|f| !f.is_empty()).as_deref().unwrap_or(DEFAULT_TEMPLATE_FOLDER),
        );

        Ok(Self {
            enabled: file.enabled.as_ref().is_some_and(is_enabled),
            url_prefix,
            static_folder,
            static_url_path,
            template_folder,
            session: file.session,
            routes: Routes::new(),
            children: Vec::new(),
            location,
            name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    pub fn static_folder(&self) -> Option<&Path> {
        self.static_folder.as_deref()
    }

    /// Relative to the blueprint prefix.
    pub fn static_url_path(&self) -> &str {
        &self.static_url_path
    }

    pub fn template_folder(&self) -> &Path {
        &self.template_folder
    }

    pub const fn session(&self) -> &toml::Table {
        &self.session
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// This blueprint and its nested blueprints, depth first.
    pub fn walk(&self) -> Vec<&Self> {
        let mut all = vec![self];
        for child in &self.children {
            all.extend(child.walk());
        }
        all
    }

    #[must_use]
    pub fn url_prefix_override(mut self, prefix: &str) -> Self {
        self.url_prefix = normalize_prefix(prefix);
        self
    }

    /// Adds a route relative to the blueprint prefix.
    #[must_use]
    pub fn route(mut self, path: &str, method_router: MethodRouter<AppState>) -> Self {
        self.routes = self.routes.route(path, method_router);
        self
    }

    /// Applies a routes function to the blueprint router.
    #[must_use]
    pub fn routes(mut self, register: RoutesFn) -> Self {
        self.routes = register(self.routes);
        self
    }

    /// Imports `<location>/<folder>/*.rs` route modules. Module ids use the blueprint name
    /// as package, e.g. `www.routes.index`.
    pub fn import_routes(&mut self, folder: impl AsRef<Path>, manifest: &Manifest) -> DiscoveryReport {
        let folder = folder.as_ref();
        let mut report = DiscoveryReport::default();

        for candidate in scan(&self.location.join(folder), ScanMode::Routes, &mut report) {
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
        report
    }

    /// Nests `child` under this blueprint's prefix. Disabled children are dropped.
    #[must_use]
    pub fn register_blueprint(mut self, child: Self) -> Self {
        if child.enabled {
            self.children.push(child);
        } else {
            debug!(blueprint = %child.name, parent = %self.name, "Nested blueprint disabled");
        }
        self
    }

    /// Template name inside this blueprint's namespace.
    pub fn tmpl(&self, template: &str) -> String {
        format!("{}/{template}", self.name)
    }

    /// Seeds `session` with this blueprint's defaults, keeping existing keys.
    pub fn init_session(&self, session: &mut SessionMap) {
        seed_session(session, &self.session);
        for child in &self.children {
            child.init_session(session);
        }
    }

    /// Paths this blueprint and its children answer once mounted under `base`.
    pub(crate) fn mounts(&self, base: &str) -> Vec<Mount> {
        let prefix = join(base, &self.url_prefix);
        let mut mounts: Vec<_> = self.routes.paths().map(|path| Mount::route(&join(&prefix, path))).collect();
        if self.static_folder.is_some() {
            mounts.push(if self.static_url_path == "/" {
                Mount::Fallback(prefix.clone())
            } else {
                Mount::service(&join(&prefix, &self.static_url_path))
            });
        }
        for child in &self.children {
            mounts.extend(child.mounts(&prefix));
        }
        mounts
    }

    /// Router relative to this blueprint's prefix, nested blueprints included.
    pub fn router(&self) -> Router<AppState> {
        let mut router = self.routes.router().clone();
        if let Some(folder) = &self.static_folder {
            router = serve_static(router, &self.static_url_path, folder);
        }
        for child in &self.children {
            router = nest(router, &child.url_prefix, child.router());
        }
        router
    }
}

/// Nests at `prefix`, merging when the prefix is the root.
pub(crate) fn nest(router: Router<AppState>, prefix: &str, nested: Router<AppState>) -> Router<AppState> {
    if prefix.is_empty() || prefix == "/" { router.merge(nested) } else { router.nest(prefix, nested) }
}

pub(crate) fn serve_static(router: Router<AppState>, path: &str, folder: &Path) -> Router<AppState> {
    if path == "/" {
        router.fallback_service(ServeDir::new(folder))
    } else {
        router.nest_service(path, ServeDir::new(folder))
    }
}

/// `www/` → `/www`, `/` stays `/`.
pub(crate) fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

/// Blueprint config keys are case-insensitive.
fn lowercase_keys(value: toml::Value) -> toml::Value {
    match value {
        toml::Value::Table(table) => toml::Value::Table(
            table.into_iter().map(|(k, v)| (k.to_lowercase(), lowercase_keys(v))).collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercased_recursively() {
        let table: toml::Table = toml::from_str("Enabled = true\n[Settings]\nURL_PREFIX = '/x'").unwrap();
        let lowered = lowercase_keys(toml::Value::Table(table));
        assert_eq!(lowered["settings"]["url_prefix"].as_str(), Some("/x"));
        assert_eq!(lowered["enabled"].as_bool(), Some(true));
    }

    #[test]
    fn prefixes_are_normalized() {
        assert_eq!(normalize_prefix("www/"), "/www");
        assert_eq!(normalize_prefix("/admin"), "/admin");
        assert_eq!(normalize_prefix("/"), "/");
        assert_eq!(normalize_prefix(""), "/");
    }
}
