#![allow(dead_code, unreachable_pub)]

use std::path::Path;
use tempfile::TempDir;

pub const MINIMAL_CONFIG: &str = r#"
[flask]
secret_key = "dev"
"#;

/// Writes `content` to `root/relative`, creating parent folders.
/// # Panics
/// * If the file cannot be written.
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().expect("file has a parent")).expect("create parent");
    std::fs::write(path, content).expect("write fixture");
}

/// A temp app root holding `default.config.toml`.
/// # Panics
/// * If the temp dir cannot be created.
#[must_use]
pub fn app_root(config: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "default.config.toml", config);
    dir
}

/// Blueprint folder `blueprints/<name>` with a config and one template.
pub fn blueprint(root: &Path, name: &str, config: &str) {
    write(root, &format!("blueprints/{name}/config.toml"), config);
    write(
        root,
        &format!("blueprints/{name}/templates/{name}/index.html"),
        &format!("<h1>{name} {{{{ title }}}}</h1>"),
    );
}
