//! Folder scanning for the auto-discovery importers.
//!
//! Scanning only lists candidates; turning a candidate into routes, a blueprint, models or a
//! structure is done by the importers on [`crate::app::BigApp`] and [`crate::blueprint::Blueprint`]
//! through the [`crate::manifest::Manifest`].

use bigapp_domain::constants::{ILLEGAL_NAME_PATTERNS, MODULE_EXTENSION, RESERVED_MODULE_FILES};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Routes,
    Blueprints,
    Structures,
    Models,
}

impl ScanMode {
    const fn wants_dirs(self) -> bool {
        matches!(self, Self::Blueprints | Self::Structures)
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Routes => "routes",
            Self::Blueprints => "blueprints",
            Self::Structures => "structures",
            Self::Models => "models",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    IllegalName,
    NotAModule,
    NotAFolder,
    UnknownModule,
    WrongModuleKind,
    Disabled,
    Duplicate,
    /// Its paths overlap an earlier mount.
    Overlap(String),
    MissingAttribute(String),
    NoTemplates,
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalName => f.write_str("illegal name"),
            Self::NotAModule => f.write_str("not a .rs module"),
            Self::NotAFolder => f.write_str("not a folder"),
            Self::UnknownModule => f.write_str("not in the manifest"),
            Self::WrongModuleKind => f.write_str("manifest entry has the wrong kind"),
            Self::Disabled => f.write_str("disabled"),
            Self::Duplicate => f.write_str("already registered"),
            Self::Overlap(clash) => write!(f, "path overlap: {clash}"),
            Self::MissingAttribute(attr) => write!(f, "no '{attr}' attribute"),
            Self::NoTemplates => f.write_str("no templates folder"),
            Self::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub entry: String,
    pub reason: SkipReason,
}

/// Outcome of one import call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    pub imported: Vec<String>,
    pub skipped: Vec<Skipped>,
}

impl DiscoveryReport {
    pub fn import(&mut self, id: impl Into<String>) {
        let id = id.into();
        info!(module = %id, "Imported");
        self.imported.push(id);
    }

    /// Records a skipped entry. This is the only place skips are logged.
    pub fn skip(&mut self, entry: impl Into<String>, reason: SkipReason) {
        let entry = entry.into();
        warn!(entry = %entry, reason = %reason, "Skipped");
        self.skipped.push(Skipped { entry, reason });
    }

    pub fn extend(&mut self, other: Self) {
        self.imported.extend(other.imported);
        self.skipped.extend(other.skipped);
    }
}

/// A folder entry that passed the name and kind checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// File or folder name.
    pub name: String,
    /// Name without the `.rs` extension.
    pub stem: String,
    pub path: PathBuf,
}

pub fn is_illegal_name(name: &str) -> bool {
    let lowered = name.to_lowercase();
    ILLEGAL_NAME_PATTERNS.iter().any(|pattern| lowered.contains(pattern))
        || RESERVED_MODULE_FILES.contains(&lowered.as_str())
}

/// `<package>.<folder dotted>.<stem>`. Parent and root components are dropped.
pub fn module_id(package: &str, folder: &Path, stem: &str) -> String {
    let mut parts = vec![package.to_owned()];
    parts.extend(folder.components().filter_map(|c| match c {
        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
        _ => None,
    }));
    parts.push(stem.to_owned());
    parts.join(".")
}

/// Lists the direct entries of `folder` in name order, keeping those that fit `mode`.
/// Rejected entries go to `report`; a missing folder yields nothing.
pub fn scan(folder: &Path, mode: ScanMode, report: &mut DiscoveryReport) -> Vec<Candidate> {
    if !folder.is_dir() {
        warn!(folder = %folder.display(), %mode, "Discovery folder not found");
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let name = err.path().map_or_else(String::new, |p| p.display().to_string());
                report.skip(name, SkipReason::Failed(err.to_string()));
                continue;
            },
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if RESERVED_MODULE_FILES.contains(&name.as_str()) {
            continue;
        }
        if is_illegal_name(&name) {
            report.skip(name, SkipReason::IllegalName);
            continue;
        }

        let is_dir = entry.file_type().is_dir();
        let stem = if mode.wants_dirs() {
            if !is_dir {
                report.skip(name, SkipReason::NotAFolder);
                continue;
            }
            name.clone()
        } else {
            let path = entry.path();
            let is_module = !is_dir
                && path.extension().is_some_and(|ext| ext == MODULE_EXTENSION);
            let Some(stem) = path.file_stem().filter(|_| is_module) else {
                report.skip(name, SkipReason::NotAModule);
                continue;
            };
            stem.to_string_lossy().into_owned()
        };

        candidates.push(Candidate { name, stem, path: entry.into_path() });
    }
    candidates
}
