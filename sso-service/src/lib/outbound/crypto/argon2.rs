use crate::domain::auth::errors::HashError;
use crate::domain::auth::models::Password;
use crate::domain::auth::models::PasswordHash;
use crate::domain::auth::ports::PasswordHasher;

/// Argon2id hasher backed by the auth library.
///
/// Stores the PHC string as opaque bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher {
    inner: auth::PasswordHasher,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self {
            inner: auth::PasswordHasher::new(),
        }
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash, HashError> {
        self.inner
            .hash(password.as_bytes())
            .map(|phc| PasswordHash::from_bytes(phc.into_bytes()))
            .map_err(|e| HashError::HashingFailed(e.to_string()))
    }

    fn verify(&self, password: &Password, hash: &PasswordHash) -> Result<bool, HashError> {
        let phc = std::str::from_utf8(hash.as_bytes()).map_err(|_| {
            HashError::VerificationFailed("stored hash is not a PHC string".to_string())
        })?;

        self.inner
            .verify(password.as_bytes(), phc)
            .map_err(|e| HashError::VerificationFailed(e.to_string()))
    }
}
