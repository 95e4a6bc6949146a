//! Application config document loading.
//!
//! The document is parsed once, then each known section is taken out of it and applied to
//! a [`HostConfig`]. Whatever is left afterwards is reported and dropped.

use super::database::database_section;
use super::env::{EnvPolicy, EnvSource, ProcessEnv, substitute, substitute_value};
use super::smtp::SmtpRegistry;
use crate::errors::{KernelError, KernelErrorExt, KernelResult};
use bigapp_domain::constants::{
    CONFIG_ENV_VAR, CONFIG_SUFFIXES, DATABASE_BINDS_KEY, DATABASE_URI_KEY, DEFAULT_CONFIG_FILE,
    DEFAULT_INSTANCE_FOLDER, DEFAULT_STATIC_FOLDER, DEFAULT_TEMPLATE_FOLDER, SECTION_DATABASE,
    SECTION_FLASK, SECTION_SESSION, SECTION_SMTP, STATIC_FOLDER_KEY, TEMPLATE_FOLDER_KEY,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use toml::Value;
use tracing::{debug, info, warn};

/// The host application configuration being assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub root: PathBuf,
    pub instance_path: PathBuf,
    pub static_folder: PathBuf,
    pub static_url_path: String,
    pub template_folder: PathBuf,
    /// Uppercased `flask` keys plus `DATABASE_URI` / `DATABASE_BINDS`.
    pub values: toml::Table,
    pub session: toml::Table,
    pub database_uri: Option<String>,
    pub database_binds: BTreeMap<String, String>,
    pub smtp: SmtpRegistry,
    /// The file the values came from, once loaded.
    pub source: Option<PathBuf>,
}

impl HostConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            instance_path: root.join(DEFAULT_INSTANCE_FOLDER),
            static_folder: root.join(DEFAULT_STATIC_FOLDER),
            static_url_path: format!("/{DEFAULT_STATIC_FOLDER}"),
            template_folder: root.join(DEFAULT_TEMPLATE_FOLDER),
            values: toml::Table::new(),
            session: toml::Table::new(),
            database_uri: None,
            database_binds: BTreeMap::new(),
            smtp: SmtpRegistry::default(),
            source: None,
            root,
        }
    }

    #[must_use]
    pub fn with_instance_path(mut self, instance_path: impl Into<PathBuf>) -> Self {
        let instance_path = instance_path.into();
        self.instance_path =
            if instance_path.is_absolute() { instance_path } else { self.root.join(instance_path) };
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }
}

/// Loads a config document into a [`HostConfig`].
///
/// ```rust,no_run
/// use bigapp_kernel::config::{ConfigLoader, HostConfig};
///
/// let mut host = HostConfig::new("/srv/app");
/// ConfigLoader::new("/srv/app").file("production.config.toml").load(&mut host)?;
/// # Ok::<(), bigapp_kernel::errors::KernelError>(())
/// ```
#[derive(Debug)]
pub struct ConfigLoader {
    root: PathBuf,
    file: Option<PathBuf>,
    env: Arc<dyn EnvSource>,
    policy: EnvPolicy,
}

impl ConfigLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), file: None, env: Arc::new(ProcessEnv), policy: EnvPolicy::default() }
    }

    #[must_use]
    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
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

    /// Explicit file, else `BIGAPP_CONFIG`, else `default.config.toml`, relative to the root.
    pub fn resolve_path(&self) -> PathBuf {
        let chosen = self
            .file
            .clone()
            .or_else(|| self.env.var(CONFIG_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if chosen.is_absolute() { chosen } else { self.root.join(chosen) }
    }

    /// Reads, parses and applies the config document.
    ///
    /// # Errors
    /// Fails when the file is missing, has the wrong suffix, does not parse, or a section is
    /// invalid.
    pub fn load(&self, target: &mut HostConfig) -> KernelResult<()> {
        let path = self.resolve_path();
        let mut document = read_document(&path)?;
        self.apply(&mut document, target)?;
        target.source = Some(path);
        Ok(())
    }

    /// Applies an already parsed document. Every processed section is removed from it.
    ///
    /// # Errors
    /// Fails when `flask` is missing or a section is invalid.
    pub fn apply(&self, document: &mut toml::Table, target: &mut HostConfig) -> KernelResult<()> {
        let env = self.env.as_ref();

        let flask = take_section(document, SECTION_FLASK)?.ok_or_else(|| {
            KernelError::MissingSection { section: SECTION_FLASK.into(), context: None }
        })?;
        self.apply_flask(flask, target)?;

        if let Some(session) = take_section(document, SECTION_SESSION)? {
            target.session = super::env::substitute_table(session, env, self.policy)?;
        }

        if let Some(database) = take_section(document, SECTION_DATABASE)? {
            let uris = database_section(database, &target.instance_path, env, self.policy)?;
            if let Some(main) = &uris.main {
                target.values.insert(DATABASE_URI_KEY.to_owned(), Value::String(main.clone()));
            }
            let binds: toml::Table =
                uris.binds.iter().map(|(k, v)| (k.clone(), Value::String(v.clone()))).collect();
            target.values.insert(DATABASE_BINDS_KEY.to_owned(), Value::Table(binds));
            target.database_uri = uris.main;
            target.database_binds = uris.binds;
        }

        if let Some(smtp) = take_section(document, SECTION_SMTP)? {
            target.smtp = SmtpRegistry::from_section(smtp, env, self.policy)?;
        }

        for leftover in document.keys() {
            warn!(section = %leftover, "Unknown config section ignored");
        }
        document.clear();

        info!(
            keys = target.values.len(),
            binds = target.database_binds.len(),
            smtp = target.smtp.len(),
            "Config applied"
        );
        Ok(())
    }

    fn apply_flask(&self, flask: toml::Table, target: &mut HostConfig) -> KernelResult<()> {
        let env = self.env.as_ref();

        for (key, value) in flask {
            let lowered = key.to_ascii_lowercase();
            if lowered == STATIC_FOLDER_KEY || lowered == TEMPLATE_FOLDER_KEY {
                let Value::String(raw) = value else {
                    return Err(KernelError::InvalidConfig {
                        message: format!("flask.{key} must be a string").into(),
                        context: None,
                    });
                };
                let folder = target.root.join(substitute(&raw, env, self.policy)?);
                debug!(key = %lowered, folder = %folder.display(), "Folder set on application");
                if lowered == STATIC_FOLDER_KEY {
                    target.static_folder = folder;
                } else {
                    target.template_folder = folder;
                }
                continue;
            }

            target.values.insert(key.to_uppercase(), substitute_value(value, env, self.policy)?);
        }
        Ok(())
    }
}

/// Reads and parses a config document.
///
/// # Errors
/// [`KernelError::ConfigNotFound`], [`KernelError::InvalidConfig`] for a wrong suffix,
/// [`KernelError::Toml`] on parse failure.
pub fn read_document(path: &Path) -> KernelResult<toml::Table> {
    let suffix_ok = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONFIG_SUFFIXES.iter().any(|s| ext.eq_ignore_ascii_case(s)));
    if !suffix_ok {
        return Err(KernelError::InvalidConfig {
            message: format!("config file must end in .toml or .tml: {}", path.display()).into(),
            context: None,
        });
    }
    if !path.is_file() {
        return Err(KernelError::ConfigNotFound { path: path.to_path_buf(), context: None });
    }

    let raw = std::fs::read_to_string(path).context("reading config document")?;
    let document = toml::from_str::<toml::Table>(&raw).context("parsing config document")?;
    info!("Config loaded from {}", path.display());
    Ok(document)
}

/// Removes a section by case-insensitive name.
fn take_section(document: &mut toml::Table, name: &str) -> KernelResult<Option<toml::Table>> {
    let Some(key) = document.keys().find(|k| k.eq_ignore_ascii_case(name)).cloned() else {
        return Ok(None);
    };
    match document.remove(&key) {
        Some(Value::Table(table)) => Ok(Some(table)),
        Some(_) => Err(KernelError::InvalidConfig {
            message: format!("[{key}] must be a table").into(),
            context: None,
        }),
        None => Ok(None),
    }
}
