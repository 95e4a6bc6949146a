//! Embedded project templates rendered with Tera.

use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

const BLUEPRINT_MOD: &str = include_str!("../../templates/blueprint/mod.rs.tera");
const BLUEPRINT_CONFIG: &str = include_str!("../../templates/blueprint/config.toml.tera");
const ROUTES_MOD: &str = include_str!("../../templates/blueprint/routes_mod.rs.tera");
const ROUTES_INDEX: &str = include_str!("../../templates/blueprint/routes_index.rs.tera");
const TEMPLATE_INDEX: &str = include_str!("../../templates/blueprint/index.html.tera");
const STATIC_STYLE: &str = include_str!("../../templates/blueprint/style.css.tera");
pub const DEFAULT_CONFIG: &str = include_str!("../../templates/default.config.toml.tera");

/// A file to write, relative to the target folder.
#[derive(Debug)]
pub struct ScaffoldFile {
    pub path: PathBuf,
    pub content: String,
}

/// Renders every file of a blueprint folder named `name`.
///
/// # Errors
/// Returns an error if an embedded template fails to render.
pub fn blueprint_files(name: &str) -> Result<Vec<ScaffoldFile>> {
    let mut context = Context::new();
    context.insert("name", name);

    let files = [
        ("mod.rs".to_owned(), BLUEPRINT_MOD),
        ("config.toml".to_owned(), BLUEPRINT_CONFIG),
        ("routes/mod.rs".to_owned(), ROUTES_MOD),
        ("routes/index.rs".to_owned(), ROUTES_INDEX),
        (format!("templates/{name}/index.html"), TEMPLATE_INDEX),
        ("static/style.css".to_owned(), STATIC_STYLE),
    ];

    files
        .into_iter()
        .map(|(path, template)| {
            let content =
                Tera::one_off(template, &context, false).with_context(|| format!("Failed to render {path}"))?;
            Ok(ScaffoldFile { path: PathBuf::from(path), content })
        })
        .collect()
}

/// Renders `default.config.toml` with the given secret key.
///
/// # Errors
/// Returns an error if the embedded template fails to render.
pub fn default_config(secret_key: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("secret_key", secret_key);
    Tera::one_off(DEFAULT_CONFIG, &context, false).context("Failed to render default.config.toml")
}

/// Writes `files` under `root`, creating parent folders.
///
/// # Errors
/// Returns an error if a folder or file cannot be written.
pub fn write_files(root: &Path, files: &[ScaffoldFile]) -> Result<()> {
    for file in files {
        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, &file.content).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blueprint_templates_render() {
        let files = blueprint_files("shop").unwrap();
        let find = |p: &str| files.iter().find(|f| f.path == Path::new(p)).map(|f| f.content.as_str()).unwrap();

        assert!(find("mod.rs").contains(r#""shop.routes.index""#));
        assert!(find("config.toml").contains(r#"url_prefix = "/shop""#));
        assert!(find("templates/shop/index.html").contains("shop blueprint"));
        assert!(find("routes/index.rs").contains(r#""shop/index.html""#));
    }

    #[test]
    fn default_config_embeds_secret() {
        let rendered = default_config("abc123").unwrap();
        assert!(rendered.contains(r#"secret_key = "abc123""#));
    }
}
