use crate::errors::{KernelError, KernelErrorExt, KernelResult};
use fxhash::FxHashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tera::Tera;
use walkdir::WalkDir;

/// Tera engine over the app, blueprint and structure template folders.
///
/// Template names are paths relative to their folder. When two folders provide the same
/// name the earlier folder wins.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    /// Loads every file under the given folders. Missing folders are ignored.
    ///
    /// # Errors
    /// Fails when a template does not parse or extends an unknown parent.
    pub fn load(folders: &[PathBuf]) -> KernelResult<Self> {
        let mut seen = FxHashSet::default();
        let mut files = Vec::new();

        for folder in folders.iter().filter(|f| f.is_dir()) {
            for entry in WalkDir::new(folder).sort_by_file_name() {
                let entry = entry.map_err(|err| KernelError::Internal {
                    message: err.to_string().into(),
                    context: Some(format!("walking {}", folder.display()).into()),
                })?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let Some(name) = template_name(folder, entry.path()) else {
                    continue;
                };
                if seen.insert(name.clone()) {
                    files.push((entry.into_path(), Some(name)));
                }
            }
        }

        let mut tera = Tera::default();
        tera.add_template_files(files).context("loading templates")?;
        Ok(Self { tera: Arc::new(tera) })
    }

    /// # Errors
    /// Fails when the template is unknown or rendering fails.
    pub fn render(&self, name: &str, context: &tera::Context) -> KernelResult<String> {
        self.tera.render(name, context).context(format!("rendering {name}"))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tera.get_template_names().count()
    }
}

fn template_name(folder: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(folder).ok()?;
    let parts: Vec<_> = relative.components().map(|c| c.as_os_str().to_string_lossy()).collect();
    if parts.iter().any(|p| p.starts_with('.')) {
        return None;
    }
    Some(parts.join("/"))
}
