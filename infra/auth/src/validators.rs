use bigapp_domain::validation::AllowedSeparators;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z\d!#$%&'*+?^_`{|}~-]+(?:\.[a-z\d!#$%&'*+?^_`{|}~-]+)*@(?:[a-z\d](?:[a-z\d-]*[a-z\d])?\.)+[a-z\d](?:[a-z\d-]*[a-z\d])?$",
    )
    .expect("email pattern is valid")
});

/// Letters and digits, plus the `allowed` separators anywhere but the first and last position.
///
/// ```rust
/// use bigapp_auth::{AllowedSeparators, is_username_valid};
///
/// assert!(is_username_valid("user.name", AllowedSeparators::DOT));
/// assert!(!is_username_valid("user_name", AllowedSeparators::DOT | AllowedSeparators::DASH));
/// assert!(!is_username_valid("_user", AllowedSeparators::ALL));
/// ```
pub fn is_username_valid(username: &str, allowed: AllowedSeparators) -> bool {
    let (Some(first), Some(last)) = (username.chars().next(), username.chars().last()) else {
        return false;
    };
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return false;
    }
    username.chars().all(|c| c.is_ascii_alphanumeric() || allowed.allows(c))
}

/// Practical, not RFC 5322 complete. Quoted local parts and IP literals are rejected.
pub fn is_email_address_valid(email: &str) -> bool {
    EMAIL.is_match(email)
}
