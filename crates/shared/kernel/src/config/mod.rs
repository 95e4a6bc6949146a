pub mod database;
pub mod env;
pub mod loader;
pub mod smtp;

pub use database::{DatabaseUris, FromTable, database_section, database_uri};
pub use env::{EnvPolicy, EnvSource, MapEnv, ProcessEnv, substitute, substitute_value};
pub use loader::{ConfigLoader, HostConfig};
pub use smtp::SmtpRegistry;

use crate::errors::{KernelErrorExt, KernelResult};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Layered loader for process settings: a base file plus `BIGAPP__` environment overrides.
///
/// 1. **Base File**: settings from a file (e.g., `server.toml`). Defaults to `"server"`.
/// 2. **Environment Overrides**: variables prefixed with `BIGAPP__`. Nested keys use double
///    underscores (e.g., `BIGAPP__SERVER__PORT` maps to `server.port`).
///
/// # Errors
/// Returns an error if the file cannot be found or its content does not match `T`.
///
/// # Example
/// ```rust
/// use bigapp_kernel::config::load_settings;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     port: u16,
/// }
///
/// let settings: Settings = load_settings(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_settings<T>(path: Option<impl AsRef<Path>>) -> KernelResult<T>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("BIGAPP")
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading settings from {}", effective_path.display());

    let settings = builder
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(settings)
}
