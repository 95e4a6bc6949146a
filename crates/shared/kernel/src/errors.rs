use bigapp_domain::database::{Dialect, UnknownDialect};
use std::borrow::Cow;
use std::path::PathBuf;

/// Errors raised while loading configuration or assembling an application.
#[bigapp_derive::bigapp_error]
pub enum KernelError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("TOML parse error{}: {source}", format_context(.context))]
    Toml { source: toml::de::Error, context: Option<Cow<'static, str>> },

    #[error("Settings error{}: {source}", format_context(.context))]
    Settings { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Template error{}: {source}", format_context(.context))]
    Template { source: tera::Error, context: Option<Cow<'static, str>> },

    #[error("Database error{}: {source}", format_context(.context))]
    UnknownDialect { source: UnknownDialect, context: Option<Cow<'static, str>> },

    #[error("Config file not found{}: {}", format_context(.context), .path.display())]
    ConfigNotFound { path: PathBuf, context: Option<Cow<'static, str>> },

    #[error("Invalid config{}: {message}", format_context(.context))]
    InvalidConfig { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Config section [{section}] is required{}", format_context(.context))]
    MissingSection { section: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Environment variable {name} is not set{}", format_context(.context))]
    UndefinedEnv { name: String, context: Option<Cow<'static, str>> },

    #[error("{dialect} database '{binding}' is missing '{field}'{}", format_context(.context))]
    MissingField {
        dialect: Dialect,
        binding: String,
        field: &'static str,
        context: Option<Cow<'static, str>>,
    },

    #[error("Model '{name}' not found, available: [{available}]{}", format_context(.context))]
    ModelNotFound { name: String, available: String, context: Option<Cow<'static, str>> },

    #[error("Module '{id}' is not in the manifest{}", format_context(.context))]
    UnknownModule { id: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub type KernelResult<T> = Result<T, KernelError>;
