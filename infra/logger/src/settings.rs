use crate::{LevelFilter, LoggerError, Rotation};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// File rotation period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Minutely => Self::MINUTELY,
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

/// `[logging]` table of the server settings file.
///
/// ```toml
/// [logging]
/// name = "bigapp"
/// level = "debug"
/// directory = "logs"
/// rotation = "hourly"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub name: String,
    pub level: String,
    pub console: bool,
    pub filter: Option<String>,
    /// File output is enabled only when set.
    pub directory: Option<PathBuf>,
    pub rotation: LogRotation,
    pub max_files: usize,
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            name: "bigapp".to_owned(),
            level: "info".to_owned(),
            console: true,
            filter: None,
            directory: None,
            rotation: LogRotation::Daily,
            max_files: crate::DEFAULT_MAX_FILES,
            json: false,
        }
    }
}

impl LogSettings {
    /// Parses `level` (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    ///
    /// # Errors
    /// [`LoggerError::InvalidLevel`] for anything else.
    pub fn level_filter(&self) -> Result<LevelFilter, LoggerError> {
        LevelFilter::from_str(self.level.trim())
            .map_err(|_| LoggerError::InvalidLevel { level: self.level.clone(), context: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_table() {
        let settings: LogSettings = toml::from_str(
            r#"
            level = "debug"
            directory = "logs"
            rotation = "hourly"
            "#,
        )
        .unwrap();

        assert_eq!(settings.name, "bigapp");
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::DEBUG);
        assert_eq!(settings.rotation, LogRotation::Hourly);
        assert_eq!(settings.directory, Some(PathBuf::from("logs")));
        assert_eq!(settings.max_files, 10);
        assert!(settings.console);
    }

    #[test]
    fn rejects_unknown_level() {
        let settings = LogSettings { level: "loud".to_owned(), ..LogSettings::default() };
        let err = settings.level_filter().unwrap_err();
        assert_eq!(err.to_string(), "Invalid log level 'loud'");
    }
}
