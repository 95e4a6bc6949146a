use crate::constants::{DEFAULT_SQLITE_EXTENSION, MAIN_DATABASE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// SQL dialects a binding may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Sqlite,
    Postgresql,
    Mysql,
    Oracle,
    Mssql,
}

impl Dialect {
    pub const ALL: [Self; 5] =
        [Self::Sqlite, Self::Postgresql, Self::Mysql, Self::Oracle, Self::Mssql];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgresql => "postgresql",
            Self::Mysql => "mysql",
            Self::Oracle => "oracle",
            Self::Mssql => "mssql",
        }
    }

    /// Networked dialects need host, username, password and database name.
    pub const fn is_networked(self) -> bool {
        !matches!(self, Self::Sqlite)
    }

    /// Comma separated list of every dialect, for error messages.
    pub fn allowed() -> String {
        Self::ALL.iter().map(|d| d.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a dialect name is not one of [`Dialect::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDialect(pub String);

impl fmt::Display for UnknownDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown database dialect '{}', allowed: {}", self.0, Dialect::allowed())
    }
}

impl std::error::Error for UnknownDialect {}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == lowered)
            .ok_or_else(|| UnknownDialect(s.to_owned()))
    }
}

/// One entry of the `[database]` section, after placeholder substitution.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseBinding {
    pub name: String,
    pub dialect: Dialect,
    pub enabled: bool,
    pub database_name: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Folder of a sqlite file. Relative folders sit under the instance path.
    pub location: Option<PathBuf>,
    pub extension: String,
}

impl DatabaseBinding {
    pub fn new(name: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            name: name.into(),
            dialect,
            enabled: true,
            database_name: None,
            host: None,
            port: None,
            username: None,
            password: None,
            location: None,
            extension: DEFAULT_SQLITE_EXTENSION.to_owned(),
        }
    }

    pub fn sqlite(name: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self { database_name: Some(database_name.into()), ..Self::new(name, Dialect::Sqlite) }
    }

    pub fn is_main(&self) -> bool {
        self.name == MAIN_DATABASE
    }
}

// Keeps passwords out of logs.
impl fmt::Debug for DatabaseBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseBinding")
            .field("name", &self.name)
            .field("dialect", &self.dialect)
            .field("enabled", &self.enabled)
            .field("database_name", &self.database_name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("location", &self.location)
            .field("extension", &self.extension)
            .finish()
    }
}
