//! Stateless authentication helpers.
//!
//! New code should hash passwords with [`kdf::PasswordHasher`] (Argon2id). The salt and
//! pepper helpers in [`pepper`] exist to verify hashes produced by older applications.
//!
//! ```rust
//! use bigapp_auth::kdf::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("correct horse").unwrap();
//! assert!(hasher.verify("correct horse", &hash).unwrap());
//! ```

pub mod errors;
pub mod kdf;
pub mod pepper;
pub mod tokens;
pub mod validators;
mod words;

pub use errors::AuthError;
pub use kdf::PasswordHasher;
pub use pepper::{
    EncryptionLevel, PepperOptions, PepperPosition, authenticate_password, encrypt_password,
    encrypt_password_with_pepper, generate_pepper, generate_salt,
};
pub use tokens::{
    PasswordStyle, generate_alphanumeric_validator, generate_csrf_token, generate_email_validator,
    generate_numeric_validator, generate_password, generate_private_key,
};
pub use validators::{is_email_address_valid, is_username_valid};
pub use bigapp_domain::validation::AllowedSeparators;
