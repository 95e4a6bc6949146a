//! Shared theme folders: templates plus optional static assets, no routes.

use crate::blueprint::normalize_prefix;
use crate::config::database::is_enabled;
use crate::discovery::SkipReason;
use crate::errors::{KernelErrorExt, KernelResult};
use bigapp_domain::constants::{BLUEPRINT_CONFIG_FILE, DEFAULT_STATIC_FOLDER, DEFAULT_TEMPLATE_FOLDER};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StructureFile {
    enabled: Option<toml::Value>,
    static_url_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub name: String,
    pub location: PathBuf,
    pub template_folder: PathBuf,
    pub static_folder: Option<PathBuf>,
    /// Absolute URL path, `/<name>/static` by default.
    pub static_url_path: String,
}

impl Structure {
    /// Loads the structure in `location`.
    ///
    /// `Ok(Err(reason))` means the folder is not a usable structure.
    ///
    /// # Errors
    /// Fails when an existing `config.toml` cannot be read or parsed.
    pub fn load(location: &Path) -> KernelResult<Result<Self, SkipReason>> {
        let name = location.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

        let template_folder = location.join(DEFAULT_TEMPLATE_FOLDER);
        if !template_folder.is_dir() {
            return Ok(Err(SkipReason::NoTemplates));
        }

        let config_path = location.join(BLUEPRINT_CONFIG_FILE);
        let file = if config_path.is_file() {
            let raw = std::fs::read_to_string(&config_path).context("reading structure config")?;
            toml::from_str::<StructureFile>(&raw).context("parsing structure config")?
        } else {
            StructureFile::default()
        };

        if file.enabled.as_ref().is_some_and(|v| !is_enabled(v)) {
            return Ok(Err(SkipReason::Disabled));
        }

        let static_folder = Some(location.join(DEFAULT_STATIC_FOLDER)).filter(|p| p.is_dir());
        let static_url_path = file
            .static_url_path
            .filter(|p| !p.is_empty())
            .map_or_else(|| format!("/{name}/{DEFAULT_STATIC_FOLDER}"), |p| normalize_prefix(&p));

        Ok(Ok(Self { name, location: location.to_path_buf(), template_folder, static_folder, static_url_path }))
    }

    pub fn tmpl(&self, template: &str) -> String {
        format!("{}/{template}", self.name)
    }
}
