//! Database bindings and connection URIs.

use super::env::{EnvPolicy, EnvSource, substitute, substitute_table};
use crate::errors::{KernelError, KernelResult};
use bigapp_domain::constants::DEFAULT_SQLITE_EXTENSION;
use bigapp_domain::database::{DatabaseBinding, Dialect};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use toml::Value;
use tracing::debug;

/// Parses one `[database.<name>]` table into a [`DatabaseBinding`].
pub trait FromTable: Sized {
    /// # Errors
    /// Fails when the dialect is unknown or a placeholder cannot be resolved.
    fn from_table(
        name: &str,
        table: toml::Table,
        env: &dyn EnvSource,
        policy: EnvPolicy,
    ) -> KernelResult<Self>;
}

impl FromTable for DatabaseBinding {
    fn from_table(
        name: &str,
        table: toml::Table,
        env: &dyn EnvSource,
        policy: EnvPolicy,
    ) -> KernelResult<Self> {
        let table = substitute_table(table, env, policy)?;

        let dialect_raw = text(&table, "type").or_else(|| text(&table, "dialect")).ok_or_else(|| {
            KernelError::InvalidConfig {
                message: format!("database '{name}' has no type, allowed: {}", Dialect::allowed())
                    .into(),
                context: None,
            }
        })?;
        let dialect: Dialect = dialect_raw.parse()?;

        let mut binding = Self::new(name, dialect);
        binding.enabled = table.get("enabled").is_none_or(is_enabled);
        binding.database_name = text(&table, "database_name");
        binding.username = text(&table, "username");
        binding.password = text(&table, "password");
        binding.port = text(&table, "port");

        let location = text(&table, "location");
        if dialect.is_networked() {
            binding.host = text(&table, "server").or(location);
        } else {
            binding.location = location.map(PathBuf::from);
        }
        if let Some(extension) = text(&table, "sqlite_db_extension").or_else(|| text(&table, "extension")) {
            binding.extension = normalize_extension(&extension);
        }

        Ok(binding)
    }
}

/// Builds the connection URI of a binding.
///
/// Sqlite files live in the instance path unless the binding names a `location` folder,
/// which is created when missing.
///
/// # Errors
/// Returns [`KernelError::MissingField`] for incomplete bindings and
/// [`KernelError::Io`] when a sqlite folder cannot be created.
pub fn database_uri(binding: &DatabaseBinding, instance_path: &Path) -> KernelResult<String> {
    let database_name = required(binding, "database_name", binding.database_name.as_deref())?;

    if !binding.dialect.is_networked() {
        let dir = match &binding.location {
            Some(location) => {
                let dir = instance_path.join(location);
                if !dir.exists() {
                    std::fs::create_dir_all(&dir).map_err(|source| KernelError::Io {
                        source,
                        context: Some(format!("creating sqlite folder {}", dir.display()).into()),
                    })?;
                }
                dir
            },
            None => instance_path.to_path_buf(),
        };
        return Ok(format!("sqlite:///{}/{database_name}{}", dir.display(), binding.extension));
    }

    let host = required(binding, "server", binding.host.as_deref())?;
    let username = required(binding, "username", binding.username.as_deref())?;
    let password = required(binding, "password", binding.password.as_deref())?;
    let port = binding.port.as_deref().map(|p| format!(":{p}")).unwrap_or_default();

    Ok(format!("{}://{username}:{password}@{host}{port}/{database_name}", binding.dialect))
}

/// URIs produced by the `[database]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseUris {
    pub main: Option<String>,
    pub binds: BTreeMap<String, String>,
}

/// Processes a whole `[database]` section. `main` becomes the primary URI; every other
/// enabled binding becomes a bind keyed by its substituted, lowercased name.
///
/// # Errors
/// Fails on the first invalid binding.
pub fn database_section(
    section: toml::Table,
    instance_path: &Path,
    env: &dyn EnvSource,
    policy: EnvPolicy,
) -> KernelResult<DatabaseUris> {
    let mut uris = DatabaseUris::default();

    for (raw_name, value) in section {
        let Value::Table(table) = value else {
            return Err(KernelError::InvalidConfig {
                message: format!("[database.{raw_name}] must be a table").into(),
                context: None,
            });
        };

        let name = substitute(&raw_name, env, policy)?.to_lowercase();
        let binding = DatabaseBinding::from_table(&name, table, env, policy)?;
        if !binding.enabled {
            debug!(database = %name, "Database binding disabled, skipping");
            continue;
        }

        let uri = database_uri(&binding, instance_path)?;
        if binding.is_main() {
            uris.main = Some(uri);
        } else {
            uris.binds.insert(name, uri);
        }
    }

    Ok(uris)
}

fn required<'a>(
    binding: &DatabaseBinding,
    field: &'static str,
    value: Option<&'a str>,
) -> KernelResult<&'a str> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| KernelError::MissingField {
        dialect: binding.dialect,
        binding: binding.name.clone(),
        field,
        context: None,
    })
}

fn text(table: &toml::Table, key: &str) -> Option<String> {
    match table.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        _ => None,
    }
}

/// Accepts booleans and the strings yes/true/1 (anything else is off).
pub(crate) fn is_enabled(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::Integer(i) => *i == 1,
        Value::String(s) => matches!(s.to_ascii_lowercase().as_str(), "yes" | "true" | "1"),
        _ => false,
    }
}

fn normalize_extension(extension: &str) -> String {
    match extension {
        "" => DEFAULT_SQLITE_EXTENSION.to_owned(),
        ext if ext.starts_with('.') => ext.to_owned(),
        ext => format!(".{ext}"),
    }
}
