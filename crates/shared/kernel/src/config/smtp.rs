use super::env::{EnvPolicy, EnvSource, substitute, substitute_table};
use crate::errors::{KernelError, KernelResult};
use std::collections::BTreeMap;
use toml::Value;

/// Sender address → settings table, from the `[smtp]` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmtpRegistry {
    senders: BTreeMap<String, toml::Table>,
}

impl SmtpRegistry {
    /// Settings for `address`, or an empty table when it is unknown.
    pub fn settings(&self, address: &str) -> toml::Table {
        self.senders.get(address).cloned().unwrap_or_default()
    }

    pub fn get(&self, address: &str) -> Option<&toml::Table> {
        self.senders.get(address)
    }

    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.senders.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }

    /// Parses every `[smtp."<address>"]` table, substituting addresses and values.
    ///
    /// # Errors
    /// Fails when an entry is not a table or a placeholder cannot be resolved.
    pub fn from_section(
        section: toml::Table,
        env: &dyn EnvSource,
        policy: EnvPolicy,
    ) -> KernelResult<Self> {
        let mut senders = BTreeMap::new();
        for (raw_address, value) in section {
            let Value::Table(table) = value else {
                return Err(KernelError::InvalidConfig {
                    message: format!("[smtp.\"{raw_address}\"] must be a table").into(),
                    context: None,
                });
            };
            let address = substitute(&raw_address, env, policy)?;
            senders.insert(address, substitute_table(table, env, policy)?);
        }
        Ok(Self { senders })
    }
}
