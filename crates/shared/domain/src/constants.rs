//! Names and reserved values shared by the loader, the discovery importer and the CLI.

/// Config file looked up in the application root when nothing else is specified.
pub const DEFAULT_CONFIG_FILE: &str = "default.config.toml";
/// Environment variable that may point at the application config file.
pub const CONFIG_ENV_VAR: &str = "BIGAPP_CONFIG";
/// Accepted config file suffixes.
pub const CONFIG_SUFFIXES: &[&str] = &["toml", "tml"];

/// Value substituted for a `<PLACEHOLDER>` whose environment variable is unset.
pub const ENV_KEY_NOT_FOUND: &str = "ENV_KEY_NOT_FOUND";

pub const SECTION_FLASK: &str = "flask";
pub const SECTION_SESSION: &str = "session";
pub const SECTION_DATABASE: &str = "database";
pub const SECTION_SMTP: &str = "smtp";

/// The database binding that becomes the primary connection.
pub const MAIN_DATABASE: &str = "main";

/// Host config keys written by the database section.
pub const DATABASE_URI_KEY: &str = "DATABASE_URI";
pub const DATABASE_BINDS_KEY: &str = "DATABASE_BINDS";

/// Reserved `flask` keys applied to the application instead of the config mapping.
pub const STATIC_FOLDER_KEY: &str = "static_folder";
pub const TEMPLATE_FOLDER_KEY: &str = "template_folder";

pub const DEFAULT_SQLITE_EXTENSION: &str = ".sqlite";
pub const DEFAULT_INSTANCE_FOLDER: &str = "instance";
pub const DEFAULT_STATIC_FOLDER: &str = "static";
pub const DEFAULT_TEMPLATE_FOLDER: &str = "templates";

/// Blueprint and structure config file name.
pub const BLUEPRINT_CONFIG_FILE: &str = "config.toml";

/// Attribute a models module must expose to be imported.
pub const DEFAULT_MODEL_ATTRIBUTE: &str = "db";

/// Substrings that disqualify a folder entry from discovery.
pub const ILLEGAL_NAME_PATTERNS: &[&str] = &["%", "$", "£", " ", "#", "readme", "__"];
/// Module files that never represent a discoverable entry.
pub const RESERVED_MODULE_FILES: &[&str] = &["mod.rs", "lib.rs", "main.rs"];
/// Source file extension for route and model modules.
pub const MODULE_EXTENSION: &str = "rs";
