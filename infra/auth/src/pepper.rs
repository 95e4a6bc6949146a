//! Legacy salt and pepper hashing.
//!
//! The pepper is one to three random ASCII letters mixed into the password and thrown away.
//! Verification tries every possible pepper, so a pepper of length `n` costs `52^n` digests.
//! This adds almost no strength over the salt alone; prefer [`crate::kdf::PasswordHasher`].

use rand::seq::IndexedRandom;
use sha2::{Digest, Sha256, Sha512};

pub const MAX_PEPPER_LENGTH: usize = 3;
pub const SALT_LENGTH: usize = 4;

const ASCII_LETTERS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const PUNCTUATION: &[u8; 32] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EncryptionLevel {
    Sha256,
    #[default]
    Sha512,
}

/// Where the pepper goes relative to the password. The salt always goes last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PepperPosition {
    #[default]
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PepperOptions {
    pub level: EncryptionLevel,
    /// Capped at [`MAX_PEPPER_LENGTH`].
    pub pepper_length: usize,
    pub position: PepperPosition,
}

impl Default for PepperOptions {
    fn default() -> Self {
        Self { level: EncryptionLevel::default(), pepper_length: 1, position: PepperPosition::default() }
    }
}

impl PepperOptions {
    fn length(&self) -> usize {
        self.pepper_length.min(MAX_PEPPER_LENGTH)
    }
}

/// Four random ASCII punctuation characters.
pub fn generate_salt() -> String {
    random_from(PUNCTUATION, SALT_LENGTH)
}

/// `length` random ASCII letters, capped at [`MAX_PEPPER_LENGTH`].
pub fn generate_pepper(length: usize) -> String {
    random_from(ASCII_LETTERS, length.min(MAX_PEPPER_LENGTH))
}

/// Hashes `password` with `salt` and a fresh random pepper.
pub fn encrypt_password(password: &str, salt: &str, options: &PepperOptions) -> String {
    encrypt_password_with_pepper(password, salt, &generate_pepper(options.length()), options)
}

/// Hashes with a known pepper.
pub fn encrypt_password_with_pepper(
    password: &str,
    salt: &str,
    pepper: &str,
    options: &PepperOptions,
) -> String {
    let material = match options.position {
        PepperPosition::Prefix => format!("{pepper}{password}{salt}"),
        PepperPosition::Suffix => format!("{password}{pepper}{salt}"),
    };
    digest(options.level, material.as_bytes())
}

/// Tries every pepper of the configured length until one reproduces `stored_hash`.
pub fn authenticate_password(
    input: &str,
    stored_hash: &str,
    salt: &str,
    options: &PepperOptions,
) -> bool {
    let length = options.length();
    let mut pepper = vec![0usize; length];

    loop {
        let candidate: String = pepper.iter().map(|&i| char::from(ASCII_LETTERS[i])).collect();
        if encrypt_password_with_pepper(input, salt, &candidate, options) == stored_hash {
            return true;
        }
        if !advance(&mut pepper, ASCII_LETTERS.len()) {
            return false;
        }
    }
}

/// Odometer increment over `base` digits. Returns `false` once every combination was seen.
fn advance(digits: &mut [usize], base: usize) -> bool {
    for digit in digits.iter_mut().rev() {
        *digit += 1;
        if *digit < base {
            return true;
        }
        *digit = 0;
    }
    false
}

fn digest(level: EncryptionLevel, bytes: &[u8]) -> String {
    match level {
        EncryptionLevel::Sha256 => hex::encode(Sha256::digest(bytes)),
        EncryptionLevel::Sha512 => hex::encode(Sha512::digest(bytes)),
    }
}

fn random_from(alphabet: &[u8], length: usize) -> String {
    let mut rng = rand::rng();
    (0..length).filter_map(|_| alphabet.choose(&mut rng)).map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odometer_visits_every_combination() {
        let mut digits = vec![0; 2];
        let mut seen = 1;
        while advance(&mut digits, 3) {
            seen += 1;
        }
        assert_eq!(seen, 9);
        assert_eq!(digits, [0, 0]);
    }

    #[test]
    fn empty_pepper_is_tried_once() {
        let options = PepperOptions { pepper_length: 0, ..PepperOptions::default() };
        let hash = encrypt_password("pw", "!!!!", &options);
        assert!(authenticate_password("pw", &hash, "!!!!", &options));
    }

    #[test]
    fn salt_is_punctuation() {
        let salt = generate_salt();
        assert_eq!(salt.len(), SALT_LENGTH);
        assert!(salt.chars().all(|c| c.is_ascii_punctuation()));
    }
}
