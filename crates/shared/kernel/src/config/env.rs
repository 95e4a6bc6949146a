//! `<NAME>` placeholder substitution.
//!
//! A config string that is exactly a name wrapped in angle brackets is replaced by the
//! environment variable of that name. Anything else passes through untouched.

use crate::errors::{KernelError, KernelResult};
use bigapp_domain::constants::ENV_KEY_NOT_FOUND;
use fxhash::FxHashMap;
use regex::Regex;
use std::fmt::Debug;
use std::sync::LazyLock;
use toml::Value;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<([^<>]+)>$").expect("placeholder pattern is valid"));

/// What to do when a placeholder names an unset variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnvPolicy {
    /// Substitute [`ENV_KEY_NOT_FOUND`].
    #[default]
    Sentinel,
    /// Fail with [`KernelError::UndefinedEnv`].
    Strict,
}

/// Read access to environment variables.
pub trait EnvSource: Debug + Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: FxHashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Returns the variable name if `value` is a placeholder token.
pub fn placeholder(value: &str) -> Option<&str> {
    PLACEHOLDER.captures(value).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Substitutes a single string.
///
/// # Errors
/// Returns [`KernelError::UndefinedEnv`] under [`EnvPolicy::Strict`] when the variable is unset.
pub fn substitute(value: &str, env: &dyn EnvSource, policy: EnvPolicy) -> KernelResult<String> {
    let Some(name) = placeholder(value) else {
        return Ok(value.to_owned());
    };

    match (env.var(name), policy) {
        (Some(found), _) => Ok(found),
        (None, EnvPolicy::Sentinel) => Ok(ENV_KEY_NOT_FOUND.to_owned()),
        (None, EnvPolicy::Strict) => {
            Err(KernelError::UndefinedEnv { name: name.to_owned(), context: None })
        },
    }
}

/// Substitutes every string inside a TOML value, descending into arrays and tables.
///
/// # Errors
/// See [`substitute`].
pub fn substitute_value(value: Value, env: &dyn EnvSource, policy: EnvPolicy) -> KernelResult<Value> {
    Ok(match value {
        Value::String(s) => Value::String(substitute(&s, env, policy)?),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| substitute_value(item, env, policy))
                .collect::<KernelResult<_>>()?,
        ),
        Value::Table(table) => Value::Table(substitute_table(table, env, policy)?),
        other => other,
    })
}

/// Substitutes the values of a table, leaving keys as they are.
///
/// # Errors
/// See [`substitute`].
pub fn substitute_table(
    table: toml::Table,
    env: &dyn EnvSource,
    policy: EnvPolicy,
) -> KernelResult<toml::Table> {
    table
        .into_iter()
        .map(|(key, value)| Ok((key, substitute_value(value, env, policy)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_requires_whole_string() {
        assert_eq!(placeholder("<DB_HOST>"), Some("DB_HOST"));
        assert_eq!(placeholder("prefix <DB_HOST>"), None);
        assert_eq!(placeholder("<>"), None);
        assert_eq!(placeholder("<<A>>"), None);
        assert_eq!(placeholder("plain"), None);
    }

    #[test]
    fn sentinel_policy_fills_unset() {
        let env = MapEnv::new();
        let value = substitute("<MISSING>", &env, EnvPolicy::Sentinel).unwrap();
        assert_eq!(value, ENV_KEY_NOT_FOUND);
    }

    #[test]
    fn strict_policy_names_variable() {
        let env = MapEnv::new();
        let err = substitute("<MISSING>", &env, EnvPolicy::Strict).unwrap_err();
        assert!(matches!(err, KernelError::UndefinedEnv { ref name, .. } if name == "MISSING"));
    }

    #[test]
    fn nested_values_are_substituted() {
        let env = MapEnv::new().with("HOST", "db.local");
        let value: Value = toml::from_str::<toml::Table>(
            r#"
            hosts = ["<HOST>", "static"]
            [inner]
            host = "<HOST>"
            port = 5432
            "#,
        )
        .map(Value::Table)
        .unwrap();

        let out = substitute_value(value, &env, EnvPolicy::Sentinel).unwrap();
        assert_eq!(out["hosts"][0].as_str(), Some("db.local"));
        assert_eq!(out["hosts"][1].as_str(), Some("static"));
        assert_eq!(out["inner"]["host"].as_str(), Some("db.local"));
        assert_eq!(out["inner"]["port"].as_integer(), Some(5432));
    }
}
