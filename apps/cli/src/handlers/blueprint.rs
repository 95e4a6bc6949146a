use crate::services::scaffold::{blueprint_files, write_files};
use crate::services::utils::blueprint_name;
use anyhow::{Context, Result, bail};
use bigapp_kernel::blueprint::Blueprint;
use bigapp_kernel::discovery::{DiscoveryReport, ScanMode, scan};
use std::path::Path;

/// Creates `<path>/<name>/` with a config, a routes module, an index template and a static folder.
///
/// # Errors
/// Returns an error if `path` does not exist, the name is not usable or the blueprint
/// folder already exists.
pub fn add_blueprint(path: &Path, name: &str) -> Result<()> {
    if !path.is_dir() {
        bail!("{} does not exist", path.display());
    }
    let name = blueprint_name(name)?;
    let folder = path.join(&name);
    if folder.exists() {
        bail!("Blueprint folder {} already exists", folder.display());
    }

    let files = blueprint_files(&name)?;
    write_files(&folder, &files)?;

    for file in &files {
        println!("  created {}", folder.join(&file.path).display());
    }
    println!("✅ Created blueprint '{name}' in {}", folder.display());
    println!("ℹ️ Add `pub mod {name};` next to it and register `blueprints::{name}::blueprint` in the manifest.");
    Ok(())
}

/// Prints the blueprint folders under `path` with their URL prefix and state.
///
/// # Errors
/// Returns an error if `path` does not exist.
pub fn list_blueprints(path: &Path) -> Result<()> {
    if !path.is_dir() {
        bail!("{} does not exist", path.display());
    }

    let mut report = DiscoveryReport::default();
    let folders = scan(path, ScanMode::Blueprints, &mut report);
    if folders.is_empty() {
        println!("ℹ️ No blueprints found in '{}'.", path.display());
        return Ok(());
    }

    println!("\nBlueprints:\n");
    println!("{:<20} {:<10} {:<30}", "Name", "Enabled", "Prefix");
    println!("{:-<60}", "");
    for folder in folders {
        match Blueprint::new(&folder.path).with_context(|| format!("Reading {}", folder.path.display())) {
            Ok(blueprint) => {
                let enabled = if blueprint.enabled() { "yes" } else { "no" };
                println!("{:<20} {:<10} {:<30}", blueprint.name(), enabled, blueprint.url_prefix());
            },
            Err(err) => println!("{:<20} {:<10} {err:#}", folder.name, "-"),
        }
    }
    println!();
    Ok(())
}
