use crate::services::scaffold::default_config;
use anyhow::{Context, Result, bail};
use bigapp_auth::generate_private_key;
use bigapp_kernel::domain::constants::DEFAULT_CONFIG_FILE;
use std::fs;
use std::path::Path;

/// Writes `<path>/default.config.toml` with a random secret key.
///
/// # Errors
/// Returns an error if `path` does not exist, the file exists and `force` is not set, or
/// the file cannot be written.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if !path.is_dir() {
        bail!("{} does not exist", path.display());
    }
    let file = path.join(DEFAULT_CONFIG_FILE);
    if file.exists() && !force {
        bail!("{} already exists, use --force to overwrite it", file.display());
    }

    let content = default_config(&generate_private_key(None))?;
    fs::write(&file, content).with_context(|| format!("Failed to write {}", file.display()))?;

    println!("✅ Wrote {}", file.display());
    Ok(())
}
