//! Random tokens, keys and one-time codes.

use crate::errors::AuthError;
use crate::words::{ANIMALS, COLORS};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use sha2::{Digest, Sha256};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

const UPPER_ALPHANUMERIC: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Digits kept by [`generate_numeric_validator`] so the result fits in a `u64`.
pub const MAX_NUMERIC_LENGTH: usize = 18;
pub const EMAIL_VALIDATOR_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordStyle {
    Animals,
    Colors,
    #[default]
    Mixed,
}

impl FromStr for PasswordStyle {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "animals" => Ok(Self::Animals),
            "colors" | "colours" => Ok(Self::Colors),
            "mixed" => Ok(Self::Mixed),
            _ => Err(AuthError::InvalidStyle { style: s.to_owned(), context: None }),
        }
    }
}

/// 64 hex characters from 32 random bytes.
pub fn generate_csrf_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(Sha256::digest(bytes))
}

/// SHA-256 hex digest of `hook`. Without a hook the current time plus a random number is used.
pub fn generate_private_key(hook: Option<&str>) -> String {
    let hook = hook.map_or_else(
        || {
            let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_nanos());
            format!("{nanos}-{}", rand::rng().random_range(1..1000))
        },
        str::to_owned,
    );
    hex::encode(Sha256::digest(hook.as_bytes()))
}

/// A random number with `length` digits, between `11…1` and `99…9`.
/// `length` is clamped to `1..=MAX_NUMERIC_LENGTH`.
pub fn generate_numeric_validator(length: usize) -> u64 {
    let length = u32::try_from(length.clamp(1, MAX_NUMERIC_LENGTH)).unwrap_or(1);
    let ones = (10u64.pow(length) - 1) / 9;
    rand::rng().random_range(ones..=ones * 9)
}

/// `length` random characters from `A-Z0-9`. Empty for a zero length.
pub fn generate_alphanumeric_validator(length: usize) -> String {
    if length == 0 {
        return String::new();
    }
    nanoid::nanoid!(length, &UPPER_ALPHANUMERIC)
}

/// Eight character code for confirming an email address.
pub fn generate_email_validator() -> String {
    generate_alphanumeric_validator(EMAIL_VALIDATOR_LENGTH)
}

/// `length` dash-separated words followed by a `length` digit number, e.g. `Otter-Jade-Lynx482`.
pub fn generate_password(style: PasswordStyle, length: usize) -> String {
    let mut rng = rand::rng();
    let mixed: Vec<&str> = ANIMALS.iter().chain(COLORS).copied().collect();
    let words: &[&str] = match style {
        PasswordStyle::Animals => ANIMALS,
        PasswordStyle::Colors => COLORS,
        PasswordStyle::Mixed => &mixed,
    };

    let picked: Vec<&str> = (0..length).filter_map(|_| words.choose(&mut rng).copied()).collect();
    format!("{}{}", picked.join("-"), generate_numeric_validator(length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_validator_has_requested_digits() {
        for length in 1..=MAX_NUMERIC_LENGTH {
            let value = generate_numeric_validator(length);
            assert_eq!(value.to_string().len(), length);
        }
        assert_eq!(generate_numeric_validator(40).to_string().len(), MAX_NUMERIC_LENGTH);
    }

    #[test]
    fn styles_parse() {
        assert_eq!("Animals".parse::<PasswordStyle>().unwrap(), PasswordStyle::Animals);
        assert!("plants".parse::<PasswordStyle>().is_err());
    }
}
