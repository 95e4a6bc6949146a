//! Session defaults. BigApp does not ship a session layer; it only hands the configured
//! defaults to one.

use serde_json::Value;

pub type SessionMap = serde_json::Map<String, Value>;

/// Inserts every default whose key is not already present.
pub fn seed_session(session: &mut SessionMap, defaults: &toml::Table) {
    for (key, value) in defaults {
        if session.contains_key(key) {
            continue;
        }
        match serde_json::to_value(value) {
            Ok(json) => {
                session.insert(key.clone(), json);
            },
            Err(err) => tracing::warn!(key = %key, %err, "Session default not representable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn existing_keys_win() {
        let defaults: toml::Table = toml::from_str("logged_in = false\ntheme = 'dark'").unwrap();
        let mut session = SessionMap::new();
        session.insert("theme".to_owned(), json!("light"));

        seed_session(&mut session, &defaults);

        assert_eq!(session["theme"], json!("light"));
        assert_eq!(session["logged_in"], json!(false));
    }
}
