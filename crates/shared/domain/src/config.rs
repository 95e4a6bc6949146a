use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Process-level settings of an HTTP host. Application configuration lives in the
/// application config document, not here.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostSettingsInner {
    pub server: ServerConfig,
    pub app: AppSection,
}

/// Thin Arc-wrapped settings for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct HostSettings {
    #[serde(flatten, default)]
    inner: Arc<HostSettingsInner>,
}

impl Deref for HostSettings {
    type Target = HostSettingsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for HostSettings {
    fn deref_mut(&mut self) -> &mut HostSettingsInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

/// Where the application lives and how its config document is read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Application root. Relative roots resolve against the working directory.
    pub root: Option<PathBuf>,
    /// Config document, relative to the root unless absolute.
    pub config_file: Option<PathBuf>,
    /// Instance folder, `<root>/instance` when unset.
    pub instance_path: Option<PathBuf>,
    /// Treat unset `<ENV>` placeholders as errors instead of the sentinel value.
    pub strict_env: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 5000 }
    }
}
