use anyhow::{Result, bail};
use bigapp_kernel::discovery::is_illegal_name;
use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid regex"));
static MODULE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid regex"));

/// Strict and reserved keywords of the 2024 edition. `pub mod <keyword>;` does not compile.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro",
    "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "self", "static", "struct",
    "super", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
    "yield",
];

/// `"Admin Panel"` → `"admin_panel"`.
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    NON_ALPHANUMERIC.replace_all(name.trim(), "_").trim_matches('_').to_lowercase()
}

/// Normalizes `name` and checks it can be both a folder the importer accepts and a Rust module.
///
/// # Errors
/// Returns an error if the normalized name is empty, is rejected by discovery, is not a
/// valid module identifier or is a Rust keyword.
pub fn blueprint_name(name: &str) -> Result<String> {
    let normalized = to_snake_case(name);
    if normalized.is_empty() {
        bail!("Blueprint name '{name}' is empty after normalization");
    }
    if is_illegal_name(&normalized) {
        bail!("Blueprint name '{normalized}' would be skipped by discovery");
    }
    if !MODULE_NAME.is_match(&normalized) {
        bail!("Blueprint name '{normalized}' must start with a letter");
    }
    if RUST_KEYWORDS.contains(&normalized.as_str()) {
        bail!("Blueprint name '{normalized}' is a Rust keyword");
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_snake_cased() {
        assert_eq!(to_snake_case("Admin Panel"), "admin_panel");
        assert_eq!(to_snake_case("  shop-front!! "), "shop_front");
        assert_eq!(to_snake_case("www"), "www");
    }

    #[test]
    fn blueprint_names_are_validated() {
        assert_eq!(blueprint_name("My Shop").unwrap(), "my_shop");
        assert!(blueprint_name("%%").is_err());
        assert!(blueprint_name("2fa").is_err());
        assert!(blueprint_name("readme").is_err());
    }

    #[test]
    fn keywords_are_not_blueprint_names() {
        for name in ["type", "Match", "async", "self", "gen"] {
            let err = blueprint_name(name).unwrap_err();
            assert!(err.to_string().contains("Rust keyword"), "{name}: {err}");
        }
        assert_eq!(blueprint_name("types").unwrap(), "types");
    }
}
