use crate::errors::AuthError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordVerifier, SaltString};
use argon2::{Argon2, PasswordHasher as _};

/// Argon2id password hashing with a random salt stored inside the PHC string.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a PHC string (`$argon2id$v=19$...`).
    ///
    /// # Errors
    /// Returns [`AuthError::Hash`] when Argon2 rejects the input.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| AuthError::Hash { message: err.to_string().into(), context: None })
    }

    /// # Errors
    /// Returns [`AuthError::InvalidHash`] when `hash` is not a PHC string.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|err| AuthError::InvalidHash { message: err.to_string().into(), context: None })?;
        Ok(self.argon2.verify_password(password.as_bytes(), &parsed).is_ok())
    }
}
